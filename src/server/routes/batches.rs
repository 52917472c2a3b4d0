//! Batch upload and management endpoints

use crate::server::state::AppState;
use crate::utils::error::RegistryError;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult, web};
use futures::StreamExt;
use tracing::{debug, info};
use uuid::Uuid;

/// Multipart field carrying the cut file
const FILE_FIELD: &str = "file";

/// Configure batch routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/batches")
            .route("", web::post().to(upload_batch))
            .route("", web::get().to(list_batches))
            .route("/{id}", web::get().to(get_batch))
            .route("/{id}", web::delete().to(delete_batch)),
    );
}

/// Upload a cut file as multipart/form-data under the `file` field.
/// Other fields are ignored.
async fn upload_batch(state: web::Data<AppState>, mut payload: Multipart) -> ActixResult<HttpResponse> {
    let limit = state.config.server().max_body_size;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(RegistryError::from)?;

        if field.name() != Some(FILE_FIELD) || upload.is_some() {
            // Skip unknown fields
            while let Some(chunk) = field.next().await {
                chunk.map_err(RegistryError::from)?;
            }
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes = chunk.map_err(RegistryError::from)?;
            if data.len() + bytes.len() > limit {
                return Err(RegistryError::PayloadTooLarge(format!(
                    "upload exceeds {} bytes",
                    limit
                ))
                .into());
            }
            data.extend_from_slice(&bytes);
        }
        upload = Some((filename, data));
    }

    let (filename, data) =
        upload.ok_or_else(|| RegistryError::missing_input("No file was uploaded"))?;
    info!("Received upload {:?} ({} bytes)", filename, data.len());

    let batch = state.ingestor.ingest(&filename, &data).await?;
    Ok(HttpResponse::Created().json(batch))
}

/// List batches, newest first
async fn list_batches(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let batches = state.queries.list_batches().await?;
    Ok(HttpResponse::Ok().json(batches))
}

async fn get_batch(state: web::Data<AppState>, path: web::Path<Uuid>) -> ActixResult<HttpResponse> {
    let batch = state.queries.batch(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(batch))
}

/// Delete a batch together with its records
async fn delete_batch(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    debug!("Delete batch requested: {}", id);
    state.ingestor.delete_batch(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
