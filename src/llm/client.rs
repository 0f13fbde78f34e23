use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::groq::GroqClient;
use crate::{RecapError, Result};

/// One-shot prompt completion against an LLM service.
///
/// Implementations perform no retries; failures surface as
/// `RecapError::CompletionFailed` and abort the enclosing pipeline call.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn CompletionProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" => Ok(Box::new(GroqClient::from_settings(settings)?)),
        other => Err(RecapError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: groq",
            other
        ))),
    }
}
