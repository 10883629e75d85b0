use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub azure: AzureOpenAIConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

/// Completion service settings. Every field is optional at startup; a missing
/// value is reported by the QA client when a question is asked.
#[derive(Clone, Default, Deserialize)]
pub struct AzureOpenAIConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub deployment: Option<String>,
    pub api_version: Option<String>,
}

impl AzureOpenAIConfig {
    /// True when every value needed for a completion call is present.
    pub fn is_complete(&self) -> bool {
        self.endpoint.is_some()
            && self.api_key.is_some()
            && self.deployment.is_some()
            && self.api_version.is_some()
    }
}

impl std::fmt::Debug for AzureOpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAIConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_upload_mb: usize = var("MAX_UPLOAD_MB")
            .unwrap_or_else(|| "25".to_string())
            .parse()?;

        Ok(Self {
            server: ServerConfig {
                port: var("PORT").unwrap_or_else(|| "5000".to_string()).parse()?,
                host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                cors_allowed_origins: var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty() && s != "*")
                    .collect(),
                upload_dir: PathBuf::from(var("UPLOAD_FOLDER").unwrap_or_else(|| "upload".to_string())),
                static_dir: PathBuf::from(var("STATIC_DIR").unwrap_or_else(|| "static".to_string())),
                max_upload_bytes: max_upload_mb * 1024 * 1024,
            },
            azure: AzureOpenAIConfig {
                endpoint: var("AZURE_OPENAI_ENDPOINT"),
                api_key: var("AZURE_OPENAI_KEY"),
                deployment: var("AZURE_DEPLOYMENT_NAME"),
                api_version: var("AZURE_API_VERSION"),
            },
        })
    }
}
