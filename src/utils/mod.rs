//! Utility modules for the registry service
//!
//! - **error**: crate error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging
