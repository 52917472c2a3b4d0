//! HTTP response handling for errors

use super::types::RegistryError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

impl RegistryError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RegistryError::MissingInput(_) => (StatusCode::BAD_REQUEST, "MISSING_INPUT"),
            RegistryError::Parse(_) => (StatusCode::BAD_REQUEST, "PARSE_ERROR"),
            RegistryError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE")
            }
            RegistryError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            RegistryError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            RegistryError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            RegistryError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            RegistryError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, code) = self.status_and_code();

        // Server-side failures are logged in full but never echoed to the client
        let detail = if self.is_client_error() {
            self.to_string()
        } else {
            error!(error = %self, "request failed");
            match self {
                RegistryError::Database(_) => "Database operation failed".to_string(),
                _ => "An internal error occurred".to_string(),
            }
        };

        HttpResponse::build(status_code).json(ErrorResponse {
            detail,
            code: code.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure
    pub detail: String,
    /// Stable machine-readable error code
    pub code: String,
    /// Unix timestamp of the failure
    pub timestamp: i64,
}
