//! Batch ingestor

use super::clock::{Clock, SystemClock};
use super::parser::parse_csv;
use crate::config::models::ingest::{FieldPolicy, IngestConfig};
use crate::core::models::{Batch, NewBatch};
use crate::core::normalizer::{NormalizeContext, RawRow, RowNormalizer, summarize};
use crate::core::traits::RegistryStore;
use crate::utils::error::{RegistryError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Longest filename a batch can carry
pub const MAX_FILENAME_LEN: usize = 255;

/// Filename recorded when the upload did not name its file
pub const UNNAMED_UPLOAD: &str = "upload.csv";

/// Turns uploaded cut files into persisted batches
#[derive(Clone)]
pub struct BatchIngestor {
    store: Arc<dyn RegistryStore>,
    config: IngestConfig,
    clock: Arc<dyn Clock>,
    normalizer: RowNormalizer,
}

impl BatchIngestor {
    /// Create an ingestor using the wall clock
    pub fn new(store: Arc<dyn RegistryStore>, config: IngestConfig) -> Self {
        let normalizer = RowNormalizer::new(config.birth_date_format.clone());
        Self {
            store,
            config,
            clock: Arc::new(SystemClock),
            normalizer,
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Ingestion settings in effect
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Ingest one uploaded file.
    ///
    /// Nothing is persisted unless the whole file parses and every record is
    /// stored.
    pub async fn ingest(&self, filename: &str, content: &[u8]) -> Result<Batch> {
        let filename = filename.trim();
        if filename.is_empty() && content.is_empty() {
            return Err(RegistryError::missing_input("No file was uploaded"));
        }
        let filename = if filename.is_empty() { UNNAMED_UPLOAD } else { filename };
        if filename.chars().count() > MAX_FILENAME_LEN {
            return Err(RegistryError::validation(format!(
                "Filename cannot exceed {} characters",
                MAX_FILENAME_LEN
            )));
        }

        let parsed = parse_csv(content, self.config.delimiter_byte())?;
        debug!("Parsed {} rows from {}", parsed.len(), filename);

        let header = NewBatch::new(filename, self.clock.today(), self.clock.now());
        let ctx = NormalizeContext {
            batch_id: header.id,
            cut_date: header.cut_date,
            created_at: header.created_at,
        };

        let mut records = Vec::with_capacity(parsed.len());
        let mut issues = Vec::new();
        for (i, data) in parsed.rows.iter().enumerate() {
            let row = RawRow::new(&parsed.headers, data, i + 1);
            let normalized = self.normalizer.normalize(&row, &ctx);
            issues.extend(normalized.issues);
            records.push(normalized.record);
        }

        if !issues.is_empty() {
            let sample = summarize(&issues, self.config.issue_sample_size);
            match self.config.field_policy {
                FieldPolicy::Strict => {
                    return Err(RegistryError::validation(format!(
                        "{} malformed field(s) in {}: {}",
                        issues.len(),
                        filename,
                        sample
                    )));
                }
                FieldPolicy::Lenient => {
                    warn!(
                        "Defaulted {} malformed field(s) in {}: {}",
                        issues.len(),
                        filename,
                        sample
                    );
                }
            }
        }

        let batch = self
            .store
            .create_batch_with_records(header, records, self.config.insert_chunk_size)
            .await?;

        info!(
            "Ingested batch {} ({}) with {} records for cut-date {}",
            batch.id, batch.filename, batch.total_records, batch.cut_date
        );
        Ok(batch)
    }

    /// Delete a batch and every record it owns
    pub async fn delete_batch(&self, id: Uuid) -> Result<()> {
        match self.store.delete_batch(id).await? {
            Some(removed) => {
                info!("Deleted batch {} and {} records", id, removed);
                Ok(())
            }
            None => Err(RegistryError::not_found(format!("Batch {} not found", id))),
        }
    }
}
