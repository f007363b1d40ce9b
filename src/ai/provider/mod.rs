//! LLM Provider Abstraction
//!
//! One capability interface for all generation backends: a provider accepts a
//! fully rendered two-role prompt and returns the completion text. Providers
//! are selected by configuration (`create_provider`) and must fail fast at
//! construction when their credential is missing, before any network call.
//!
//! Token accounting deliberately does NOT live here: counts for prompt and
//! completion are computed locally (`ai::tokenizer`) at the generation
//! boundary so they are consistent across providers.

mod anthropic;
mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::LlmConfig;
use crate::types::{CodeloreError, GenerationRequest, Result};

/// Shared provider handle
pub type SharedProvider = Arc<dyn LlmProvider + Send + Sync>;

/// Generation backend capability interface
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a rendered prompt and return the completion text.
    /// Errors are provider faults (network, auth rejection, empty choices);
    /// callers absorb them into empty results at the unit boundary.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;

    /// Model name currently in use
    fn model(&self) -> &str;
}

/// Create a shared provider from configuration.
/// Fails fast when the provider's credential is missing.
pub fn create_provider(config: &LlmConfig) -> Result<SharedProvider> {
    match config.provider.as_str() {
        "anthropic" => Ok(Arc::new(AnthropicProvider::new(config)?)),
        "openai" => Ok(Arc::new(OpenAiProvider::new(config)?)),
        other => Err(CodeloreError::Config(format!(
            "Unknown provider: {}. Supported: anthropic, openai",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_rejected() {
        let config = LlmConfig {
            provider: "carrier-pigeon".to_string(),
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_missing_credential_fails_fast() {
        // No api_key in config; ensure the env var is absent for this check
        if std::env::var("ANTHROPIC_API_KEY").is_ok() {
            return;
        }
        let config = LlmConfig {
            provider: "anthropic".to_string(),
            api_key: None,
            ..Default::default()
        };
        let err = create_provider(&config).err().unwrap();
        assert!(err.is_fatal());
    }
}
