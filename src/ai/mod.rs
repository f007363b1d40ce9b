//! LLM boundary: providers, token counting, cost accounting
//!
//! `run_generation` is the single crossing point for the pipelines: it sends
//! a rendered prompt through the configured provider, computes local token
//! counts for prompt and completion, and absorbs any provider failure into
//! the well-defined empty result (zero tokens, zero cost downstream).

pub mod cost;
pub mod provider;
pub mod tokenizer;

pub use cost::{CostReport, PricingConfig};
pub use provider::{AnthropicProvider, LlmProvider, OpenAiProvider, SharedProvider, create_provider};
pub use tokenizer::{TokenCounter, TokenEstimator};

use tracing::warn;

use crate::types::{GenerationRequest, GenerationResult, TokenUsage};

/// Call the provider, returning a `GenerationResult` in every case.
/// A failed generation yields the empty result and a warning, never an
/// error; the caller decides what an empty unit means for the run.
pub async fn run_generation(
    provider: &dyn LlmProvider,
    request: &GenerationRequest,
    counter: &TokenCounter,
) -> GenerationResult {
    match provider.generate(request).await {
        // A whitespace-only completion is a failed generation too: empty
        // raw_text must always carry zero usage.
        Ok(raw_text) if raw_text.trim().is_empty() => {
            warn!("Generation via {} returned no text", provider.name());
            GenerationResult::empty()
        }
        Ok(raw_text) => {
            let usage = TokenUsage {
                input_tokens: counter.count(&request.system) + counter.count(&request.human),
                output_tokens: counter.count(&raw_text),
            };
            GenerationResult { raw_text, usage }
        }
        Err(e) => {
            warn!("Generation failed via {}: {}", provider.name(), e);
            GenerationResult::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::types::{CodeloreError, Result};

    struct StubProvider {
        reply: Result<String>,
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(CodeloreError::LlmApi("stub failure".to_string())),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            system: "You are a test.".to_string(),
            human: "Say something.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_counts_both_sides() {
        let provider = StubProvider {
            reply: Ok("a generated completion".to_string()),
        };
        let result = run_generation(&provider, &request(), &TokenCounter::default()).await;
        assert!(!result.is_empty());
        assert!(result.usage.input_tokens > 0);
        assert!(result.usage.output_tokens > 0);
    }

    #[tokio::test]
    async fn test_whitespace_completion_is_empty_with_zero_usage() {
        let provider = StubProvider {
            reply: Ok("   \n\t ".to_string()),
        };
        let result = run_generation(&provider, &request(), &TokenCounter::default()).await;
        assert!(result.is_empty());
        assert_eq!(result.usage.total(), 0);
    }

    #[tokio::test]
    async fn test_failure_yields_empty_result_not_error() {
        let provider = StubProvider {
            reply: Err(CodeloreError::LlmApi("down".to_string())),
        };
        let result = run_generation(&provider, &request(), &TokenCounter::default()).await;
        assert!(result.is_empty());
        assert_eq!(result.usage.total(), 0);
    }
}
