use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use super::NO_DOCUMENT;
use crate::analysis::analyze;
use crate::models::{AppState, ProcessResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_document))
        .with_state(state)
}

/// POST /process - word count and excerpt of the current document
async fn process_document(State(state): State<AppState>) -> AppResult<Json<ProcessResponse>> {
    let document = state
        .store
        .read()
        .await
        .ok_or_else(|| AppError::InvalidRequest(NO_DOCUMENT.to_string()))?;

    let analysis = analyze(&document.text);
    info!(file = %document.file_name, words = analysis.word_count, "Document analyzed");

    Ok(Json(ProcessResponse {
        message: analysis.message(),
        content: analysis.excerpt,
    }))
}
