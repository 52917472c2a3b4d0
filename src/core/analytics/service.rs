//! Query service

use crate::config::models::ingest::IngestConfig;
use crate::core::models::{
    Batch, OutcomeTally, Page, PageRequest, ReasonCount, RecordFilter, RecordView,
};
use crate::core::traits::RegistryStore;
use crate::utils::error::{RegistryError, Result};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Page size used when a listing request does not name one
pub const DEFAULT_PAGE_SIZE: u64 = 50;
/// Largest page a listing request may ask for
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Tallies, histograms and listings over the registry
#[derive(Clone)]
pub struct RegistryQueries {
    store: Arc<dyn RegistryStore>,
    accepted_marker: String,
    rejected_marker: String,
}

impl RegistryQueries {
    pub fn new(store: Arc<dyn RegistryStore>, config: &IngestConfig) -> Self {
        Self {
            store,
            accepted_marker: config.accepted_marker.to_lowercase(),
            rejected_marker: config.rejected_marker.to_lowercase(),
        }
    }

    /// Accepted and rejected counts, matching outcome labels by substring
    /// regardless of case
    pub async fn tally(&self, batch_id: Option<Uuid>) -> Result<OutcomeTally> {
        let (accepted, rejected) = tokio::try_join!(
            self.store.count_outcomes_containing(&self.accepted_marker, batch_id),
            self.store.count_outcomes_containing(&self.rejected_marker, batch_id),
        )?;
        debug!("Outcome tally: {} accepted, {} rejected", accepted, rejected);
        Ok(OutcomeTally { accepted, rejected })
    }

    /// Non-empty rejection reasons, most frequent first
    pub async fn rejection_reasons(&self, batch_id: Option<Uuid>) -> Result<Vec<ReasonCount>> {
        self.store.rejection_reason_counts(batch_id).await
    }

    /// Every stored record without pagination.
    ///
    /// Response size grows with the store; meant for exports, not for
    /// general list traffic.
    pub async fn all_records(&self) -> Result<Vec<RecordView>> {
        self.store.all_records().await
    }

    /// One page of records matching `filter`
    pub async fn list_records(
        &self,
        filter: &RecordFilter,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<(Page<RecordView>, PageRequest)> {
        let request = Self::page_request(page, page_size)?;
        let result = self.store.list_records(filter, request).await?;
        Ok((result, request))
    }

    /// A single record
    pub async fn record(&self, id: Uuid) -> Result<RecordView> {
        self.store
            .find_record(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(format!("Record {} not found", id)))
    }

    /// All batches, newest first
    pub async fn list_batches(&self) -> Result<Vec<Batch>> {
        self.store.list_batches().await
    }

    /// A single batch
    pub async fn batch(&self, id: Uuid) -> Result<Batch> {
        self.store
            .find_batch(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(format!("Batch {} not found", id)))
    }

    fn page_request(page: Option<u64>, page_size: Option<u64>) -> Result<PageRequest> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page == 0 {
            return Err(RegistryError::validation("page must be at least 1"));
        }
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(RegistryError::validation(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        let in_range = (page - 1)
            .checked_mul(page_size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(RegistryError::validation(format!(
                "page {} is out of range for page_size {}",
                page, page_size
            )));
        }
        Ok(PageRequest { page, page_size })
    }
}
