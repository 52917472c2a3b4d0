//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::analytics::RegistryQueries;
use crate::core::ingest::BatchIngestor;
use crate::storage::StorageLayer;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Read-only after startup; every field is behind an `Arc` so cloning per
/// worker is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Upload ingestion
    pub ingestor: Arc<BatchIngestor>,
    /// Read-only queries
    pub queries: Arc<RegistryQueries>,
}

impl AppState {
    /// Wire the services against the storage layer
    pub fn new(config: Config, storage: StorageLayer) -> Self {
        let store = storage.store();
        let ingestor = BatchIngestor::new(store.clone(), config.ingest().clone());
        let queries = RegistryQueries::new(store, config.ingest());
        Self {
            config: Arc::new(config),
            storage: Arc::new(storage),
            ingestor: Arc::new(ingestor),
            queries: Arc::new(queries),
        }
    }

    /// Replace the ingestor, e.g. to pin its clock
    pub fn with_ingestor(mut self, ingestor: BatchIngestor) -> Self {
        self.ingestor = Arc::new(ingestor);
        self
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
