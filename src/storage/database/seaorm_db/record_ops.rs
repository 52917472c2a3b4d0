use crate::core::models::{Page, PageRequest, RecordFilter, RecordView};
use crate::utils::error::{RegistryError, Result};
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, record};
use super::conversions::record_view;
use super::types::SeaOrmDatabase;

/// `%needle%` with LIKE wildcards in `needle` escaped by `\`, lower-cased
pub(super) fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Case-insensitive literal substring match on a record column
pub(super) fn contains_ignore_case(column: record::Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((record::Entity, column))))
        .like(LikeExpr::new(like_pattern(needle)).escape('\\'))
}

fn apply_filter(query: Select<record::Entity>, filter: &RecordFilter) -> Select<record::Entity> {
    let mut query = query
        .apply_if(filter.batch_id, |q, id| q.filter(record::Column::BatchId.eq(id)))
        .apply_if(filter.cut_date, |q, date| q.filter(record::Column::CutDate.eq(date)))
        .apply_if(filter.facility_code.clone(), |q, code| {
            q.filter(record::Column::FacilityCode.eq(code))
        })
        .apply_if(filter.newly_enrolled, |q, v| {
            q.filter(record::Column::NewlyEnrolled.eq(v))
        })
        .apply_if(filter.transferred_in, |q, v| {
            q.filter(record::Column::TransferredIn.eq(v))
        })
        .apply_if(filter.transferred_out, |q, v| {
            q.filter(record::Column::TransferredOut.eq(v))
        });

    for term in filter.search_terms() {
        query = query.filter(
            Condition::any()
                .add(contains_ignore_case(record::Column::Run, term))
                .add(contains_ignore_case(record::Column::FirstNames, term))
                .add(contains_ignore_case(record::Column::PaternalSurname, term)),
        );
    }
    query
}

fn newest_first(query: Select<record::Entity>) -> Select<record::Entity> {
    query
        .order_by_desc(record::Column::CreatedAt)
        .order_by_asc(record::Column::BatchId)
        .order_by_asc(record::Column::RowNumber)
}

impl SeaOrmDatabase {
    /// Find a record by ID together with its batch filename
    pub async fn find_record(&self, id: Uuid) -> Result<Option<RecordView>> {
        debug!("Finding record: {}", id);

        let found = entities::Record::find_by_id(id)
            .find_also_related(entities::Batch)
            .one(&self.db)
            .await
            .map_err(RegistryError::Database)?;
        Ok(found.map(record_view))
    }

    /// One page of filtered records, newest first
    pub async fn list_records(
        &self,
        filter: &RecordFilter,
        page: PageRequest,
    ) -> Result<Page<RecordView>> {
        debug!("Listing records: {:?}, page {:?}", filter, page);

        let query = apply_filter(entities::Record::find(), filter);

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(RegistryError::Database)?;

        let items = newest_first(query)
            .offset(page.offset())
            .limit(page.page_size)
            .find_also_related(entities::Batch)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?
            .into_iter()
            .map(record_view)
            .collect();

        Ok(Page { items, total })
    }

    /// Every record, without pagination
    pub async fn all_records(&self) -> Result<Vec<RecordView>> {
        debug!("Listing all records");

        let rows = newest_first(entities::Record::find())
            .find_also_related(entities::Batch)
            .all(&self.db)
            .await
            .map_err(RegistryError::Database)?;
        Ok(rows.into_iter().map(record_view).collect())
    }
}
