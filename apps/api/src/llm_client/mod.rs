/// LLM Client — the single point of entry for all generative-model calls in Compass.
///
/// ARCHITECTURAL RULE: No other module may call the model API directly.
/// Handlers build a prompt and hand it to `LlmClient`; the network call itself
/// sits behind the `TextGenerator` trait so it can be replaced in tests.
///
/// Calls are made exactly once. No retry, no backoff.
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod gemini;
pub mod json;
pub mod prompts;

pub use gemini::{GeminiClient, GeminiConfig};

use crate::llm_client::json::parse_model_json;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {source}")]
    Parse {
        source: serde_json::Error,
        /// Leading slice of the raw model output, for diagnosis.
        raw_response: String,
    },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-in, text-out generative model.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// The LLM client shared by all handlers.
/// Wraps a `TextGenerator` with free-text and structured-output helpers.
#[derive(Clone)]
pub struct LlmClient {
    generator: Arc<dyn TextGenerator>,
}

impl LlmClient {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Free-text mode: returns the model output unchanged.
    pub async fn call_text(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(model = self.model(), prompt_len = prompt.len(), "LLM text call");
        self.generator.generate(prompt).await
    }

    /// JSON mode: strips fences, extracts the first `{...}` span and parses it.
    /// The prompt must instruct the model to return a JSON object.
    pub async fn call_json(&self, prompt: &str) -> Result<Value, LlmError> {
        debug!(model = self.model(), prompt_len = prompt.len(), "LLM JSON call");
        let text = self.generator.generate(prompt).await?;
        parse_model_json(&text).inspect_err(|e| warn!("Could not parse LLM output as JSON: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGenerator;

    #[tokio::test]
    async fn test_call_text_returns_raw_output() {
        let generator = Arc::new(ScriptedGenerator::replying("```json\n{}\n```"));
        let llm = LlmClient::new(generator.clone());

        let text = llm.call_text("hello").await.unwrap();
        assert_eq!(text, "```json\n{}\n```");
        assert_eq!(generator.prompts(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_call_json_unwraps_fenced_object() {
        let llm = LlmClient::new(Arc::new(ScriptedGenerator::replying(
            "Here you go:\n```json\n{\"a\": 1, \"b\": [\"x\"]}\n```",
        )));

        let value = llm.call_json("p").await.unwrap();
        assert_eq!(value, serde_json::json!({"a": 1, "b": ["x"]}));
    }

    #[tokio::test]
    async fn test_call_json_surfaces_service_failure() {
        let llm = LlmClient::new(Arc::new(ScriptedGenerator::failing(503, "overloaded")));

        let err = llm.call_json("p").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_call_json_parse_error_keeps_raw_text_verbatim() {
        let raw = "{ \"zeta\": 1,  \"alpha\": oops }";
        let llm = LlmClient::new(Arc::new(ScriptedGenerator::replying(raw)));

        match llm.call_json("p").await.unwrap_err() {
            LlmError::Parse { raw_response, .. } => assert_eq!(raw_response, raw),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
