//! Upload route
//!
//! `POST /upload` accepts one multipart field named `pdfFile`, validates
//! the declared content type, persists the file through the upload store,
//! and returns the stored descriptor. Bodies over the 10 MiB transport
//! limit are rejected by the `DefaultBodyLimit` layer before this handler
//! gets to build a response.

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::MAX_UPLOAD_SIZE;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Multipart field the client sends the PDF under
const FILE_FIELD: &str = "pdfFile";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_url: String,
    pub file_name: String,
    pub file_size: u64,
    pub upload_date: DateTime<Utc>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_pdf))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
}

/// POST /upload
async fn upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("No file name provided".to_string()))?;

        let content_type = field.content_type().map(str::to_string).unwrap_or_default();
        if !content_type.contains("pdf") {
            return Err(AppError::BadRequest("Only PDF files are allowed".to_string()));
        }

        let data = field.bytes().await?;

        let stored = state.store().save(&file_name, &data).await?;

        tracing::info!(
            id = %stored.id,
            file_name = %stored.file_name,
            file_size = stored.size,
            "Upload accepted"
        );

        return Ok(Json(UploadResponse {
            success: true,
            file_url: stored.url,
            file_name: stored.file_name,
            file_size: stored.size,
            upload_date: stored.uploaded_at,
        }));
    }

    Err(AppError::BadRequest("No files were uploaded".to_string()))
}
