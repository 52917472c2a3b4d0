// Module declarations
mod analytics_ops;
mod batch_ops;
mod connection;
mod conversions;
mod record_ops;
mod store;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};
