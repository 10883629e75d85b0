// LLM abstraction layer

pub mod provider;
pub mod azure;

pub use provider::*;
pub use azure::AzureOpenAIAdapter;
