use crate::core::models::{Batch, BatchStatus, NewBatch, Record};
use crate::utils::error::{RegistryError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, batch, record};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Create a processed batch and bulk insert its records in one
    /// transaction. Any failure rolls the whole upload back.
    pub async fn create_batch_with_records(
        &self,
        header: NewBatch,
        records: Vec<Record>,
        chunk_size: usize,
    ) -> Result<Batch> {
        let total_records = i32::try_from(records.len())
            .map_err(|_| RegistryError::validation("Too many records in one batch"))?;
        debug!(
            "Creating batch {} ({}) with {} records",
            header.id, header.filename, total_records
        );

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;

        let active_model = batch::ActiveModel {
            id: Set(header.id),
            filename: Set(header.filename.clone()),
            cut_date: Set(header.cut_date),
            total_records: Set(total_records),
            status: Set(BatchStatus::Processed.as_str().to_string()),
            created_at: Set(header.created_at.into()),
        };
        entities::Batch::insert(active_model)
            .exec_without_returning(&txn)
            .await
            .map_err(RegistryError::Database)?;

        let chunk_size = chunk_size.max(1);
        let mut pending: Vec<record::ActiveModel> =
            records.into_iter().map(record::ActiveModel::from).collect();
        while !pending.is_empty() {
            let rest = pending.split_off(pending.len().min(chunk_size));
            let chunk = std::mem::replace(&mut pending, rest);
            entities::Record::insert_many(chunk)
                .exec_without_returning(&txn)
                .await
                .map_err(RegistryError::Database)?;
        }

        txn.commit().await.map_err(RegistryError::Database)?;

        Ok(Batch {
            id: header.id,
            filename: header.filename,
            cut_date: header.cut_date,
            total_records,
            status: BatchStatus::Processed,
            created_at: header.created_at,
        })
    }

    /// List batches, newest first
    pub async fn list_batches(&self) -> Result<Vec<Batch>> {
        debug!("Listing batches");

        entities::Batch::find()
            .order_by_desc(batch::Column::CreatedAt)
            .order_by_asc(batch::Column::Id)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .into_iter()
            .map(Batch::try_from)
            .collect()
    }

    /// Find a batch by ID
    pub async fn find_batch(&self, id: Uuid) -> Result<Option<Batch>> {
        debug!("Finding batch: {}", id);

        entities::Batch::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .map(Batch::try_from)
            .transpose()
    }

    /// Delete a batch and its records. Children are removed explicitly so
    /// the result does not depend on the backend enforcing the foreign key.
    pub async fn delete_batch(&self, id: Uuid) -> Result<Option<u64>> {
        debug!("Deleting batch: {}", id);

        let txn = self.db.begin().await.map_err(RegistryError::Database)?;

        let exists = entities::Batch::find_by_id(id)
            .one(&txn)
            .await
            .map_err(RegistryError::Database)?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let removed = entities::Record::delete_many()
            .filter(record::Column::BatchId.eq(id))
            .exec(&txn)
            .await
            .map_err(RegistryError::Database)?
            .rows_affected;

        entities::Batch::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(RegistryError::Database)?;

        txn.commit().await.map_err(RegistryError::Database)?;
        Ok(Some(removed))
    }
}
