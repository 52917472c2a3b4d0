//! Read-only queries and aggregations over stored batches and records

mod service;


pub use service::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, RegistryQueries};
