use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use tracing::{debug, info};

use super::NO_DOCUMENT;
use crate::models::{AppState, AskRequest, AskResponse};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ask", post(ask_question))
        .with_state(state)
}

/// POST /ask - answer a question about the current document.
/// Completion failures come back as answer text with a 200.
async fn ask_question(State(state): State<AppState>, body: Bytes) -> AppResult<Json<AskResponse>> {
    let document = state
        .store
        .read()
        .await
        .ok_or_else(|| AppError::InvalidRequest(NO_DOCUMENT.to_string()))?;

    let request: AskRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!(error = %e, "Unreadable ask body");
        AskRequest::default()
    });

    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::InvalidRequest("Please ask a question".to_string()));
    }

    info!(file = %document.file_name, "Question received");
    let answer = state.qa.answer(question, &document.text).await;

    Ok(Json(AskResponse {
        question: question.to_string(),
        answer,
    }))
}
