//! Top-level application configuration

use super::*;
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Cut-file ingestion configuration
    #[serde(default)]
    pub ingest: IngestConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Build a configuration from defaults overridden by environment variables
    ///
    /// Recognized variables: `DATABASE_URL`, `HOST`, `PORT`, `LOG_LEVEL`,
    /// `INGEST_FIELD_POLICY`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.storage.database.url = url;
        }
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| RegistryError::Config(format!("Invalid PORT '{}': {}", port, e)))?;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(policy) = std::env::var("INGEST_FIELD_POLICY") {
            config.ingest.field_policy = policy.parse().map_err(RegistryError::Config)?;
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.storage
            .database
            .validate()
            .map_err(|e| format!("Database config error: {}", e))?;
        self.ingest
            .validate()
            .map_err(|e| format!("Ingest config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;
        Ok(())
    }
}
