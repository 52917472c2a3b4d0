//! Query and aggregation value types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accepted vs. rejected counts over outcome labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeTally {
    pub accepted: u64,
    pub rejected: u64,
}

/// Number of records sharing one rejection reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: u64,
}

/// Filters of the standard record listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub batch_id: Option<Uuid>,
    pub cut_date: Option<NaiveDate>,
    pub facility_code: Option<String>,
    pub newly_enrolled: Option<bool>,
    pub transferred_in: Option<bool>,
    pub transferred_out: Option<bool>,
    /// Whitespace-separated terms matched against ID number and names
    pub search: Option<String>,
}

impl RecordFilter {
    /// Non-empty search terms
    pub fn search_terms(&self) -> Vec<&str> {
        self.search
            .as_deref()
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Rows to skip before this page, saturating at `u64::MAX`
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One page of a listing plus the total number of matching rows
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}
