//! Persistence interface for batches and records

use crate::core::models::{
    Batch, NewBatch, Page, PageRequest, ReasonCount, Record, RecordFilter, RecordView,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage operations the ingestion and query services rely on
///
/// Implementations must make [`RegistryStore::create_batch_with_records`]
/// atomic: either the batch header and every record are persisted, or
/// nothing is.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Persist a processed batch and all of its records in one transaction,
    /// inserting `chunk_size` records per statement
    async fn create_batch_with_records(
        &self,
        batch: NewBatch,
        records: Vec<Record>,
        chunk_size: usize,
    ) -> Result<Batch>;

    /// All batches, newest first
    async fn list_batches(&self) -> Result<Vec<Batch>>;

    /// Find a batch by ID
    async fn find_batch(&self, id: Uuid) -> Result<Option<Batch>>;

    /// Delete a batch and its records; returns the number of records removed,
    /// or `None` when the batch does not exist
    async fn delete_batch(&self, id: Uuid) -> Result<Option<u64>>;

    /// Find a record by ID
    async fn find_record(&self, id: Uuid) -> Result<Option<RecordView>>;

    /// One page of records matching `filter`, newest first
    async fn list_records(&self, filter: &RecordFilter, page: PageRequest)
    -> Result<Page<RecordView>>;

    /// Every record, newest batch first and in file order within a batch
    async fn all_records(&self) -> Result<Vec<RecordView>>;

    /// Number of records whose outcome contains `marker`, ignoring case
    async fn count_outcomes_containing(&self, marker: &str, batch_id: Option<Uuid>)
    -> Result<u64>;

    /// Non-empty rejection reasons with their counts, most frequent first
    async fn rejection_reason_counts(&self, batch_id: Option<Uuid>) -> Result<Vec<ReasonCount>>;
}
