//! Storage layer for the registry
//!
//! This module provides data persistence for batches and records.

/// Database storage module
pub mod database;

use crate::config::StorageConfig;
use crate::core::traits::RegistryStore;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer, migrating the schema when configured to
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.database).await?);
        let storage = Self { database };

        if config.database.run_migrations {
            storage.migrate().await?;
        }

        info!("Storage layer initialized successfully");
        Ok(storage)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        self.database.migrate().await
    }

    /// Health check for the database
    pub async fn health_check(&self) -> StorageHealthStatus {
        match self.database.health_check().await {
            Ok(()) => StorageHealthStatus {
                database: true,
                backend: self.database.backend_type(),
                stats: self.database.stats().await.ok(),
            },
            Err(e) => {
                warn!("Database health check failed: {}", e);
                StorageHealthStatus {
                    database: false,
                    backend: self.database.backend_type(),
                    stats: None,
                }
            }
        }
    }

    /// Get database pool
    pub fn db(&self) -> &database::Database {
        &self.database
    }

    /// The database as the store the services run against
    pub fn store(&self) -> Arc<dyn RegistryStore> {
        self.database.clone()
    }
}

/// Storage health status
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    /// Database reachable
    pub database: bool,
    /// Backend in use
    pub backend: database::DatabaseBackendType,
    /// Row counts, when the database answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<database::DatabaseStats>,
}

impl StorageHealthStatus {
    /// Overall health
    pub fn is_healthy(&self) -> bool {
        self.database
    }
}
