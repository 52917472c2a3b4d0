//! Helper functions for creating specific error types

use super::types::RegistryError;

/// Helper functions for creating specific errors
impl RegistryError {
    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error was caused by the client's input rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingInput(_)
                | Self::Parse(_)
                | Self::PayloadTooLarge(_)
                | Self::Validation(_)
                | Self::BadRequest(_)
                | Self::NotFound(_)
        )
    }
}
