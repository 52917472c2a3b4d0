//! Core traits module
//!
//! Contains the abstract interfaces the core depends on

pub mod store;

pub use store::*;
