//! Type conversions for RegistryError

use super::types::RegistryError;

impl From<csv::Error> for RegistryError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Utf8 { pos, .. } => {
                let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
                RegistryError::Parse(format!("invalid UTF-8 in line {}", line))
            }
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => {
                let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
                RegistryError::Parse(format!(
                    "expected {} fields in line {}, saw {}",
                    expected_len, line, len
                ))
            }
            _ => RegistryError::Parse(err.to_string()),
        }
    }
}

impl From<std::str::Utf8Error> for RegistryError {
    fn from(err: std::str::Utf8Error) -> Self {
        RegistryError::Parse(format!(
            "file is not valid UTF-8 (invalid byte at offset {})",
            err.valid_up_to()
        ))
    }
}

impl From<actix_multipart::MultipartError> for RegistryError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        RegistryError::BadRequest(format!("Invalid multipart data: {}", err))
    }
}
