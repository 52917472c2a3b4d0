//! Record listing and aggregation endpoints

use crate::core::models::RecordFilter;
use crate::server::routes::{PaginatedResponse, parse_bool_param};
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

/// Configure record routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/records")
            .route("", web::get().to(list_records))
            .route("/all", web::get().to(all_records))
            .route("/stats", web::get().to(stats))
            .route("/reasons", web::get().to(reasons))
            .route("/{id}", web::get().to(get_record)),
    );
}

/// Query parameters of the standard listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordListQuery {
    pub batch_id: Option<Uuid>,
    pub cut_date: Option<NaiveDate>,
    pub facility_code: Option<String>,
    pub newly_enrolled: Option<String>,
    pub transferred_in: Option<String>,
    pub transferred_out: Option<String>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl RecordListQuery {
    fn filter(&self) -> Result<RecordFilter, crate::utils::error::RegistryError> {
        Ok(RecordFilter {
            batch_id: self.batch_id,
            cut_date: self.cut_date,
            facility_code: self
                .facility_code
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from),
            newly_enrolled: parse_bool_param("newly_enrolled", self.newly_enrolled.as_deref())?,
            transferred_in: parse_bool_param("transferred_in", self.transferred_in.as_deref())?,
            transferred_out: parse_bool_param("transferred_out", self.transferred_out.as_deref())?,
            search: self.search.clone(),
        })
    }
}

/// Optional batch scope of the aggregates
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScopeQuery {
    pub batch_id: Option<Uuid>,
}

/// Filtered, paginated listing
async fn list_records(
    state: web::Data<AppState>,
    query: web::Query<RecordListQuery>,
) -> ActixResult<HttpResponse> {
    let filter = query.filter()?;
    let (page, request) = state
        .queries
        .list_records(&filter, query.page, query.page_size)
        .await?;

    Ok(HttpResponse::Ok().json(PaginatedResponse::new(
        page.items,
        request.page,
        request.page_size,
        page.total,
    )))
}

/// Every record, unpaginated. Intended for exports; the response grows with
/// the store.
async fn all_records(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let records = state.queries.all_records().await?;
    debug!("Returning {} records", records.len());
    Ok(HttpResponse::Ok().json(records))
}

/// Accepted/rejected tally
async fn stats(
    state: web::Data<AppState>,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    let tally = state.queries.tally(query.batch_id).await?;
    Ok(HttpResponse::Ok().json(tally))
}

/// Rejection reason histogram
async fn reasons(
    state: web::Data<AppState>,
    query: web::Query<ScopeQuery>,
) -> ActixResult<HttpResponse> {
    let reasons = state.queries.rejection_reasons(query.batch_id).await?;
    Ok(HttpResponse::Ok().json(reasons))
}

async fn get_record(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let record = state.queries.record(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}
