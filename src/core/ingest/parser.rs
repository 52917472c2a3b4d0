//! Cut-file tabular parsing

use crate::core::normalizer::HeaderIndex;
use crate::utils::error::{RegistryError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

const BOM: char = '\u{feff}';

/// Header index plus every data row of an uploaded file
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub headers: HeaderIndex,
    pub rows: Vec<StringRecord>,
}

impl ParsedFile {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse delimited text with a mandatory header row.
///
/// Rows shorter than the header are kept (missing cells read as absent);
/// rows longer than the header fail the whole file.
pub fn parse_csv(content: &[u8], delimiter: u8) -> Result<ParsedFile> {
    let text = std::str::from_utf8(content)?;
    let text = text.strip_prefix(BOM).unwrap_or(text);

    if text.trim().is_empty() {
        return Err(RegistryError::parse("no columns to parse from file"));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let header_record = reader.headers()?.clone();
    if header_record.iter().all(|h| h.trim().is_empty()) {
        return Err(RegistryError::parse("no columns to parse from file"));
    }
    let width = header_record.len();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(RegistryError::parse(format!(
                "expected {} fields in line {}, saw {}",
                width,
                line,
                record.len()
            )));
        }
        rows.push(record);
    }

    Ok(ParsedFile {
        headers: HeaderIndex::from_headers(&header_record),
        rows,
    })
}
