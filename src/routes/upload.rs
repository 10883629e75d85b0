use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        DefaultBodyLimit, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{debug, error, info};

use super::{NO_FILE_SELECTED, NO_FILE_UPLOADED, NO_READABLE_CONTENT};
use crate::extraction::extract_text;
use crate::models::{AppState, UploadResponse};
use crate::types::{AppError, AppResult};
use crate::utils::secure_filename;

const FILE_FIELD: &str = "file";

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;
    Router::new()
        .route("/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// POST /upload - save the file, extract its text and make it the current document
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| {
        debug!(error = %e, "Upload request is not multipart");
        AppError::InvalidRequest(NO_FILE_UPLOADED.to_string())
    })?;

    let (client_name, data) = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::InvalidRequest(NO_FILE_UPLOADED.to_string()))?;

    let file_name = secure_filename(&client_name);
    if file_name.is_empty() {
        return Err(AppError::InvalidRequest(NO_FILE_SELECTED.to_string()));
    }

    let upload_dir = &state.config.server.upload_dir;
    tokio::fs::create_dir_all(upload_dir).await.map_err(upload_failed)?;
    let path = upload_dir.join(&file_name);
    tokio::fs::write(&path, &data).await.map_err(upload_failed)?;
    info!(file = %file_name, bytes = data.len(), "File saved");

    let extract_path = path.clone();
    let extracted = tokio::task::spawn_blocking(move || extract_text(&extract_path))
        .await
        .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))?;

    let text = match extracted {
        Ok(text) => text,
        Err(e) if e.is_unsupported() => {
            info!(file = %file_name, "Unsupported file type");
            String::new()
        }
        // Corrupt files fail the upload and leave the store untouched.
        Err(e) => {
            error!(file = %file_name, error = %e, "Text extraction failed");
            return Err(upload_failed(e));
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::InvalidRequest(NO_READABLE_CONTENT.to_string()));
    }

    info!(file = %file_name, chars = text.chars().count(), "Document loaded");
    state.store.replace(file_name, path, text).await;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        redirect: "process.html".to_string(),
    }))
}

/// First `file` field as (client file name, bytes). Other fields are skipped.
async fn read_file_field(multipart: &mut Multipart) -> AppResult<Option<(String, Vec<u8>)>> {
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::InvalidRequest(NO_FILE_SELECTED.to_string()));
        }
        let data = field.bytes().await.map_err(malformed)?;
        return Ok(Some((file_name, data.to_vec())));
    }
    Ok(None)
}

fn malformed(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(format!("Upload too large: {}", e.body_text()));
    }
    AppError::InvalidRequest(format!("Malformed upload: {}", e.body_text()))
}

fn upload_failed(e: impl std::fmt::Display) -> AppError {
    AppError::UploadFailed(e.to_string())
}
