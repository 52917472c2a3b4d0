//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by resource.

pub mod batches;
pub mod records;

use crate::utils::error::RegistryError;
use actix_web::web;

/// Pagination metadata
#[derive(Debug, Clone, serde::Serialize)]
pub struct PaginationMeta {
    /// Current page number
    pub page: u64,
    /// Number of items per page
    pub page_size: u64,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub pages: u64,
    /// Whether there is a next page
    pub has_next: bool,
    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata
    pub fn new(page: u64, page_size: u64, total: u64) -> Self {
        let pages = total.div_ceil(page_size.max(1));

        Self {
            page,
            page_size,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, serde::Serialize)]
pub struct PaginatedResponse<T> {
    /// Response items
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T>
where
    T: serde::Serialize,
{
    /// Create a paginated response
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total: u64) -> Self {
        Self {
            items,
            pagination: PaginationMeta::new(page, page_size, total),
        }
    }
}

/// Query-string errors answer with the standard error body
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| RegistryError::validation(err.to_string()).into())
}

/// Malformed IDs in the path cannot name an existing resource
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| RegistryError::not_found(err.to_string()).into())
}

/// Parse an optional boolean query value (`true/false`, `1/0`, `yes/no`)
pub(crate) fn parse_bool_param(name: &str, value: Option<&str>) -> Result<Option<bool>, RegistryError> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(Some(true)),
        "false" | "0" | "no" => Ok(Some(false)),
        _ => Err(RegistryError::validation(format!(
            "{} must be a boolean, got {:?}",
            name, raw
        ))),
    }
}
