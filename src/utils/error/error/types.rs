//! Error types for the registry service

use thiserror::Error;

/// Result type alias for the registry service
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for the registry service
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The upload carried no file
    #[error("{0}")]
    MissingInput(String),

    /// The uploaded file could not be read as delimited text
    #[error("Error parsing file: {0}")]
    Parse(String),

    /// The upload exceeded the configured body limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
