//! Cut-file ingestion configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How present-but-malformed cells are handled during ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldPolicy {
    /// Default the cell, log the issue, keep ingesting
    #[default]
    Lenient,
    /// Reject the whole upload when any cell had to be defaulted
    Strict,
}

impl FromStr for FieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(format!("Unknown field policy: {}", other)),
        }
    }
}

impl fmt::Display for FieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Ingestion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field delimiter of the uploaded file
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// chrono format of the birth date column
    #[serde(default = "default_birth_date_format")]
    pub birth_date_format: String,
    /// Policy for malformed cells
    #[serde(default)]
    pub field_policy: FieldPolicy,
    /// Rows per INSERT statement during bulk persist
    #[serde(default = "default_insert_chunk_size")]
    pub insert_chunk_size: usize,
    /// Case-insensitive substring marking an accepted outcome
    #[serde(default = "default_accepted_marker")]
    pub accepted_marker: String,
    /// Case-insensitive substring marking a rejected outcome
    #[serde(default = "default_rejected_marker")]
    pub rejected_marker: String,
    /// How many field issues are quoted in logs and strict-mode errors
    #[serde(default = "default_issue_sample_size")]
    pub issue_sample_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            birth_date_format: default_birth_date_format(),
            field_policy: FieldPolicy::default(),
            insert_chunk_size: default_insert_chunk_size(),
            accepted_marker: default_accepted_marker(),
            rejected_marker: default_rejected_marker(),
            issue_sample_size: default_issue_sample_size(),
        }
    }
}

impl IngestConfig {
    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees an ASCII delimiter
        self.delimiter as u8
    }

    /// Validate ingestion configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(format!("Invalid delimiter: {:?}", self.delimiter));
        }
        if self.birth_date_format.is_empty() {
            return Err("Birth date format cannot be empty".to_string());
        }
        if self.insert_chunk_size == 0 {
            return Err("Insert chunk size must be greater than 0".to_string());
        }
        // SQLite binds at most 32766 parameters per statement
        if self.insert_chunk_size > 1000 {
            return Err("Insert chunk size cannot exceed 1000".to_string());
        }
        if self.accepted_marker.trim().is_empty() || self.rejected_marker.trim().is_empty() {
            return Err("Outcome markers cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_birth_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_insert_chunk_size() -> usize {
    500
}

fn default_accepted_marker() -> String {
    "acept".to_string()
}

fn default_rejected_marker() -> String {
    "rechaz".to_string()
}

fn default_issue_sample_size() -> usize {
    5
}
