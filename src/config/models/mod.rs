//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod app;
pub mod ingest;
pub mod logging;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use app::*;
pub use ingest::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum upload size in bytes
pub fn default_max_body_size() -> usize {
    50 * 1024 * 1024 // 50MB
}

/// Default database URL
pub fn default_database_url() -> String {
    "sqlite://data/registry.db?mode=rwc".to_string()
}

/// Default maximum database connections
pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
