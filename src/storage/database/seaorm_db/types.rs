use sea_orm::DatabaseConnection;
use serde::Serialize;

/// SeaORM-based database implementation
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    /// Backend addressed by a connection URL
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            Self::SQLite
        } else {
            Self::PostgreSQL
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DatabaseStats {
    /// Number of stored batches
    pub batches: u64,
    /// Number of stored records
    pub records: u64,
}
