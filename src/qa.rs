//! Question answering over the stored document.
//!
//! Only the first [`PROMPT_CHAR_LIMIT`] characters of the document reach the
//! completion service; questions about later content get answers without
//! that context.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm::LLMAdapter;
use crate::types::{AppResult, LLMMessage, LLMRequest};
use crate::utils::char_prefix;

pub const PROMPT_CHAR_LIMIT: usize = 2000;
pub const TEMPERATURE: f32 = 0.5;
pub const SYSTEM_INSTRUCTION: &str =
    "You are Financial assistant that answers questions based on the uploaded document.";

#[derive(Clone)]
pub struct QaClient {
    adapter: Arc<dyn LLMAdapter>,
    model: String,
}

impl QaClient {
    pub fn new(adapter: Arc<dyn LLMAdapter>, model: impl Into<String>) -> Self {
        Self {
            adapter,
            model: model.into(),
        }
    }

    /// Build the two-message prompt for `question` over `document_text`.
    pub fn build_request(&self, question: &str, document_text: &str) -> LLMRequest {
        let excerpt = char_prefix(document_text, PROMPT_CHAR_LIMIT);
        LLMRequest {
            model: self.model.clone(),
            messages: vec![
                LLMMessage::system(SYSTEM_INSTRUCTION),
                LLMMessage::user(format!("Document: {}...\n\nQuestion: {}", excerpt, question)),
            ],
            max_tokens: None,
            temperature: Some(TEMPERATURE),
        }
    }

    pub async fn try_answer(&self, question: &str, document_text: &str) -> AppResult<String> {
        let request = self.build_request(question, document_text);
        let response = self.adapter.create_chat_completion(&request).await?;
        info!(
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "Completion received"
        );
        Ok(response.content)
    }

    /// Answer `question`, turning any failure into displayable text.
    pub async fn answer(&self, question: &str, document_text: &str) -> String {
        match self.try_answer(question, document_text).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "Completion request failed");
                format!("Error querying GPT-4: {}", e)
            }
        }
    }
}
