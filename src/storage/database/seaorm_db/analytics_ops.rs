use crate::core::models::ReasonCount;
use crate::utils::error::{RegistryError, Result};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, record};
use super::record_ops::contains_ignore_case;
use super::types::SeaOrmDatabase;

#[derive(Debug, FromQueryResult)]
struct ReasonRow {
    rejection_reason: String,
    count: i64,
}

impl SeaOrmDatabase {
    /// Count records whose outcome contains `marker`, ignoring case
    pub async fn count_outcomes_containing(
        &self,
        marker: &str,
        batch_id: Option<Uuid>,
    ) -> Result<u64> {
        debug!("Counting outcomes containing {:?} (batch {:?})", marker, batch_id);

        entities::Record::find()
            .filter(contains_ignore_case(record::Column::Outcome, marker))
            .apply_if(batch_id, |q, id| q.filter(record::Column::BatchId.eq(id)))
            .count(&self.db)
            .await
            .map_err(RegistryError::Database)
    }

    /// Count records per non-empty rejection reason, most frequent first and
    /// alphabetically among equals
    pub async fn rejection_reason_counts(&self, batch_id: Option<Uuid>) -> Result<Vec<ReasonCount>> {
        debug!("Counting rejection reasons (batch {:?})", batch_id);

        let count = Expr::col((record::Entity, record::Column::Id)).count();
        let rows = entities::Record::find()
            .select_only()
            .column(record::Column::RejectionReason)
            .column_as(count.clone(), "count")
            .filter(record::Column::RejectionReason.ne(""))
            .apply_if(batch_id, |q, id| q.filter(record::Column::BatchId.eq(id)))
            .group_by(record::Column::RejectionReason)
            .order_by_desc(count)
            .order_by_asc(record::Column::RejectionReason)
            .into_model::<ReasonRow>()
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| ReasonCount {
                reason: row.rejection_reason,
                count: u64::try_from(row.count).unwrap_or_default(),
            })
            .collect())
    }
}
