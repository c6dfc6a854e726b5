use axum::Json;
use axum::extract::rejection::MultipartRejection;
use axum::extract::{Multipart, State};
use std::sync::Arc;

use schedule_core::{PdfBackend, SubjectList};

use crate::error::ApiError;
use crate::models::ExtractResponse;
use crate::state::AppState;
use crate::upload::{self, UploadedFile};

pub async fn extract_schedule(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let file = upload::parse_multipart(multipart?).await?;
    let filename = file.filename.clone();

    // MuPDF is blocking; keep it off the async workers
    let backend = state.backend.clone();
    let subjects = tokio::task::spawn_blocking(move || extract_blocking(backend.as_ref(), &file))
        .await
        .map_err(|e| ApiError::Processing(format!("extraction task failed: {}", e)))??;

    tracing::info!(filename = %filename, subjects = subjects.len(), "schedule extracted");
    Ok(Json(ExtractResponse { subjects }))
}

/// Write the upload to a temp dir (removed on drop) and parse its first page.
fn extract_blocking(backend: &dyn PdfBackend, file: &UploadedFile) -> Result<SubjectList, ApiError> {
    let temp_dir = tempfile::tempdir()?;
    let pdf_path = temp_dir.path().join("upload.pdf");
    std::fs::write(&pdf_path, &file.data)?;
    Ok(schedule_parsing::extract_schedule(&pdf_path, backend)?)
}
