//! File upload endpoint.
//!
//! `POST /api/upload` takes a multipart form with a `file` part and a `biz`
//! text part naming the business area. The file is stored under
//! `<biz>/<epoch-ms>-<original filename>` and the public URL is returned.

use crate::{
    error::{ApiError, ApiResult, ErrorResponse},
    state::AppState,
};
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};
use bytes::Bytes;
use chrono::Utc;
use footprint_infrastructure::object_key;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

/// Name given to file parts sent without a filename
const DEFAULT_FILENAME: &str = "blob";

/// Successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Always `true`
    pub success: bool,

    /// Public URL of the stored object
    pub url: String,

    /// Original filename of the upload
    pub filename: String,
}

struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

/// Upload route, mounted under `/api`
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/upload", post(upload))
}

/// Upload a file to blob storage
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "Fields `file` and `biz`"
    ),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Missing file or biz", body = ErrorResponse),
        (status = 500, description = "Storage not configured or upload failed", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<UploadResponse>> {
    let store = state
        .blob_store
        .clone()
        .ok_or(ApiError::StorageNotConfigured)?;

    let mut multipart = multipart?;
    let mut file: Option<UploadedFile> = None;
    let mut biz: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .filter(|name| !name.is_empty())
                    .unwrap_or(DEFAULT_FILENAME)
                    .to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    data,
                });
            }
            Some("biz") => {
                biz = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let file = file.ok_or(ApiError::MissingField("file"))?;
    let biz = biz
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .ok_or(ApiError::MissingField("biz"))?;

    let key = object_key(&biz, &file.filename, Utc::now().timestamp_millis());
    let size = file.data.len();

    let stored = store
        .put(&key, file.data, file.content_type.as_deref())
        .await
        .map_err(|e| ApiError::UploadFailed(e.to_string()))?;

    info!(key = %stored.key, size, "File uploaded");

    Ok(Json(UploadResponse {
        success: true,
        url: stored.url,
        filename: file.filename,
    }))
}
