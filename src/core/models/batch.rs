//! Upload batch model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Processing status of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    /// Accepted but not yet persisted
    Pending,
    /// All records persisted
    Processed,
    /// Processing failed
    Error,
}

impl BatchStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processed => "processed",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processed" => Ok(Self::Processed),
            "error" => Ok(Self::Error),
            other => Err(format!("Unknown batch status: {}", other)),
        }
    }
}

/// One uploaded cut file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Batch ID
    pub id: Uuid,
    /// Original filename of the upload
    pub filename: String,
    /// Logical snapshot date the file represents
    pub cut_date: NaiveDate,
    /// Number of records persisted for this batch
    pub total_records: i32,
    /// Processing status
    pub status: BatchStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Header of a batch about to be persisted together with its records
#[derive(Debug, Clone, PartialEq)]
pub struct NewBatch {
    pub id: Uuid,
    pub filename: String,
    pub cut_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl NewBatch {
    /// Create a header with a fresh identifier
    pub fn new(filename: impl Into<String>, cut_date: NaiveDate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            cut_date,
            created_at,
        }
    }
}
