//! Core data models for the registry
//!
//! Batches (one per uploaded cut file), the beneficiary records they own,
//! and the value types used to query them.

pub mod batch;
pub mod query;
pub mod record;

pub use batch::*;
pub use query::*;
pub use record::*;
