//! # fonasa-registry
//!
//! Ingestion and reporting service for FONASA beneficiary registry cut
//! files.
//!
//! A cut file is a CSV snapshot of the beneficiaries enrolled at a set of
//! health facilities. Each upload becomes a [`core::models::Batch`] whose
//! rows are normalized into [`core::models::Record`]s and stored in one
//! transaction. The HTTP API then serves accepted/rejected tallies, a
//! rejection-reason histogram and record listings.
//!
//! ## Layout
//!
//! - [`core::normalizer`] turns a raw row into a typed record
//! - [`core::ingest`] parses uploads and persists batches
//! - [`core::analytics`] answers read-only queries
//! - [`storage`] implements [`core::traits::RegistryStore`] with SeaORM
//! - [`server`] exposes everything over actix-web
//!
//! ```rust,no_run
//! use fonasa_registry::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/registry.yaml").await?;
//!     server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::analytics::RegistryQueries;
pub use core::ingest::BatchIngestor;
pub use core::models::{Batch, BatchStatus, OutcomeTally, ReasonCount, Record, RecordView};
pub use storage::StorageLayer;
pub use utils::error::{RegistryError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
