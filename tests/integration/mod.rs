//! Integration tests for fonasa-registry
//!
//! These tests run the real services against an in-memory SQLite database
//! without mocking.

pub mod database_tests;
pub mod http_tests;
pub mod ingest_tests;
