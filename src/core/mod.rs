//! Core functionality of the registry
//!
//! Models, row normalization, ingestion and the query service, all written
//! against the [`traits::RegistryStore`] seam.

pub mod analytics;
pub mod ingest;
pub mod models;
pub mod normalizer;
pub mod traits;
