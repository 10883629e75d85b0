use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AzureOpenAIConfig;
use crate::types::{AppResult, LLMRequest, LLMResponse};

#[async_trait]
pub trait LLMAdapter: Send + Sync {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse>;
}

/// Build the adapter used by the QA client.
pub fn adapter_from_config(config: &AzureOpenAIConfig) -> Arc<dyn LLMAdapter> {
    Arc::new(crate::llm::azure::AzureOpenAIAdapter::new(config.clone()))
}
