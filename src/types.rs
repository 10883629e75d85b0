// Type definitions shared by the LLM layer and the HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<LLMMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LLMMessage {
    pub role: String, // "user", "assistant", "system"
    pub content: String,
}

impl LLMMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LLMResponse {
    pub content: String,
    pub finish_reason: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("LLM API error: {0}")]
    LLMApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    UploadFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "message": message }),
            ),
            AppError::PayloadTooLarge(message) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                serde_json::json!({ "message": message }),
            ),
            AppError::UploadFailed(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "message": "File upload failed",
                    "error": detail
                }),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "message": "Internal server error",
                    "error": other.to_string()
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let bad = AppError::InvalidRequest("Please ask a question".to_string()).into_response();
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

        let failed = AppError::UploadFailed("disk full".to_string()).into_response();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let llm = AppError::LLMApi("quota".to_string()).into_response();
        assert_eq!(llm.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let large = AppError::PayloadTooLarge("too big".to_string()).into_response();
        assert_eq!(large.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let internal = AppError::Internal("task panicked".to_string()).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_constructors() {
        assert_eq!(LLMMessage::system("s").role, "system");
        assert_eq!(LLMMessage::user("u").role, "user");
    }
}
