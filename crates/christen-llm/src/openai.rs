//! OpenAI-compatible provider implementation
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint (OpenRouter,
//! OpenAI, self-hosted gateways). One synchronous request per suggestion:
//! no streaming, no retries.
//!
//! # Examples
//!
//! ```no_run
//! use christen_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new(
//!     "https://openrouter.ai/api/v1",
//!     "sk-...",
//!     "gpt-5-mini",
//! );
//! ```

use std::time::Duration;

use async_trait::async_trait;
use christen_domain::{CompletionProvider, SuggestionRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CompletionError;

/// Default sampling temperature; low, because the answer is a single name
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Default completion budget; a filename fits comfortably in 32 tokens
pub const DEFAULT_MAX_TOKENS: u32 = 32;

/// Default HTTP timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// OpenAI-compatible chat-completions provider
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

/// A single chat message
#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Response body from the chat-completions API
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error body some OpenAI-compatible services return
#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `base_url`: API root (e.g. "https://openrouter.ai/api/v1")
    /// - `api_key`: bearer credential
    /// - `model`: model identifier (e.g. "gpt-5-mini")
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The model this provider requests
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_body(&self, request: &SuggestionRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user.clone(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    type Error = CompletionError;

    async fn complete(&self, request: &SuggestionRequest) -> Result<String, CompletionError> {
        let body = self.build_body(request);

        debug!(
            model = %self.model,
            endpoint = %self.endpoint(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(parsed) => parsed.error.message,
                Err(_) => text,
            };
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .first()
            .ok_or_else(|| CompletionError::MalformedResponse("no choices".to_string()))?
            .message
            .content
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(CompletionError::Empty);
        }

        debug!(length = content.len(), "completion received");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OpenAiProvider::new("https://openrouter.ai/api/v1", "key", "gpt-5-mini");
        assert_eq!(provider.model(), "gpt-5-mini");
        assert_eq!(provider.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(provider.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(
            provider.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = OpenAiProvider::new("https://api.example.com/v1/", "key", "m");
        assert_eq!(provider.endpoint(), "https://api.example.com/v1/chat/completions");
    }

    #[test]
    fn test_builder_overrides() {
        let provider = OpenAiProvider::new("https://api.example.com/v1", "key", "m")
            .with_temperature(0.7)
            .with_max_tokens(64);
        assert_eq!(provider.temperature, 0.7);
        assert_eq!(provider.max_tokens, 64);
    }

    #[test]
    fn test_request_body_shape() {
        let provider = OpenAiProvider::new("https://api.example.com/v1", "key", "gpt-5-mini");
        let request = SuggestionRequest::new("be terse", "name this file");
        let body = provider.build_body(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-5-mini");
        assert_eq!(json["temperature"], 0.2);
        assert_eq!(json["max_tokens"], 32);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be terse");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "name this file");
    }

    #[test]
    fn test_response_parsing() {
        let raw = r#"{
            "id": "gen-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  acme_invoice  "}}
            ],
            "usage": {"prompt_tokens": 100, "completion_tokens": 6}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("  acme_invoice  ")
        );
    }

    #[test]
    fn test_error_body_parsing() {
        let raw = r#"{"error": {"message": "invalid api key", "code": 401}}"#;
        let parsed: ApiErrorBody = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "invalid api key");
    }
}
