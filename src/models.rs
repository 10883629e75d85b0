use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::llm::adapter_from_config;
use crate::qa::QaClient;
use crate::store::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: DocumentStore,
    pub qa: QaClient,
}

impl AppState {
    /// State backed by the Azure OpenAI adapter described in `config`.
    pub fn new(config: Config) -> Self {
        let adapter = adapter_from_config(&config.azure);
        let model = config.azure.deployment.clone().unwrap_or_default();
        Self::with_qa(config, QaClient::new(adapter, model))
    }

    pub fn with_qa(config: Config, qa: QaClient) -> Self {
        Self {
            config: Arc::new(config),
            store: DocumentStore::new(),
            qa,
        }
    }
}

// Request/response payloads

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub redirect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub message: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub document_loaded: bool,
}
