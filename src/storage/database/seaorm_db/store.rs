//! [`RegistryStore`] backed by SeaORM

use crate::core::models::{
    Batch, NewBatch, Page, PageRequest, ReasonCount, Record, RecordFilter, RecordView,
};
use crate::core::traits::RegistryStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::types::SeaOrmDatabase;

#[async_trait]
impl RegistryStore for SeaOrmDatabase {
    async fn create_batch_with_records(
        &self,
        batch: NewBatch,
        records: Vec<Record>,
        chunk_size: usize,
    ) -> Result<Batch> {
        SeaOrmDatabase::create_batch_with_records(self, batch, records, chunk_size).await
    }

    async fn list_batches(&self) -> Result<Vec<Batch>> {
        SeaOrmDatabase::list_batches(self).await
    }

    async fn find_batch(&self, id: Uuid) -> Result<Option<Batch>> {
        SeaOrmDatabase::find_batch(self, id).await
    }

    async fn delete_batch(&self, id: Uuid) -> Result<Option<u64>> {
        SeaOrmDatabase::delete_batch(self, id).await
    }

    async fn find_record(&self, id: Uuid) -> Result<Option<RecordView>> {
        SeaOrmDatabase::find_record(self, id).await
    }

    async fn list_records(
        &self,
        filter: &RecordFilter,
        page: PageRequest,
    ) -> Result<Page<RecordView>> {
        SeaOrmDatabase::list_records(self, filter, page).await
    }

    async fn all_records(&self) -> Result<Vec<RecordView>> {
        SeaOrmDatabase::all_records(self).await
    }

    async fn count_outcomes_containing(
        &self,
        marker: &str,
        batch_id: Option<Uuid>,
    ) -> Result<u64> {
        SeaOrmDatabase::count_outcomes_containing(self, marker, batch_id).await
    }

    async fn rejection_reason_counts(&self, batch_id: Option<Uuid>) -> Result<Vec<ReasonCount>> {
        SeaOrmDatabase::rejection_reason_counts(self, batch_id).await
    }
}
