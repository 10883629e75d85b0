// Azure OpenAI chat-completions adapter
// API Reference: https://learn.microsoft.com/azure/ai-services/openai/reference
//
// Requests go to {endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}
// and authenticate with the `api-key` header. The deployment is taken from
// `LLMRequest::model`.

use crate::config::AzureOpenAIConfig;
use crate::llm::provider::LLMAdapter;
use crate::types::{AppError, AppResult, LLMRequest, LLMResponse, TokenUsage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct AzureOpenAIAdapter {
    client: Client,
    config: AzureOpenAIConfig,
}

// Request types for the Azure API
#[derive(Serialize)]
struct AzureChatRequest<'a> {
    messages: Vec<AzureMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct AzureMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Response types for the Azure API
#[derive(Deserialize)]
struct AzureChatResponse {
    #[serde(default)]
    choices: Vec<AzureChoice>,
    #[serde(default)]
    usage: Option<AzureUsage>,
}

#[derive(Deserialize)]
struct AzureChoice {
    message: AzureResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct AzureResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct AzureUsage {
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Deserialize)]
struct AzureErrorResponse {
    error: AzureError,
}

#[derive(Deserialize)]
struct AzureError {
    message: String,
    #[serde(default)]
    code: Option<serde_json::Value>,
}

impl AzureOpenAIAdapter {
    pub fn new(config: AzureOpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn required<'a>(value: &'a Option<String>, name: &str) -> AppResult<&'a str> {
        value
            .as_deref()
            .ok_or_else(|| AppError::Config(format!("{} is not set", name)))
    }

    fn completions_url(&self, deployment: &str) -> AppResult<String> {
        let endpoint = Self::required(&self.config.endpoint, "AZURE_OPENAI_ENDPOINT")?;
        let api_version = Self::required(&self.config.api_version, "AZURE_API_VERSION")?;
        if deployment.is_empty() {
            return Err(AppError::Config("AZURE_DEPLOYMENT_NAME is not set".to_string()));
        }

        Ok(format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            api_version
        ))
    }
}

#[async_trait]
impl LLMAdapter for AzureOpenAIAdapter {
    async fn create_chat_completion(&self, request: &LLMRequest) -> AppResult<LLMResponse> {
        let url = self.completions_url(&request.model)?;
        let api_key = Self::required(&self.config.api_key, "AZURE_OPENAI_KEY")?;

        let body = AzureChatRequest {
            messages: request
                .messages
                .iter()
                .map(|m| AzureMessage {
                    role: &m.role,
                    content: &m.content,
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(deployment = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLMApi(format!("Azure OpenAI request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            if let Ok(error_response) = serde_json::from_str::<AzureErrorResponse>(&error_text) {
                return Err(AppError::LLMApi(format!(
                    "Azure OpenAI error ({}): {} (code: {})",
                    status,
                    error_response.error.message,
                    error_response
                        .error
                        .code
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "none".to_string())
                )));
            }

            return Err(AppError::LLMApi(format!(
                "Azure OpenAI error ({}): {}",
                status, error_text
            )));
        }

        let azure_response: AzureChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLMApi(format!("Failed to parse Azure OpenAI response: {}", e)))?;

        let choice = azure_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::LLMApi("Azure OpenAI returned no choices".to_string()))?;

        let usage = azure_response
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(LLMResponse {
            content: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.unwrap_or_default(),
            usage,
        })
    }
}
