//! Christen Completion Provider Layer
//!
//! Pluggable completion-service implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `CompletionProvider` trait
//! from `christen-domain`.
//!
//! # Providers
//!
//! - `MockCompletion`: deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions endpoint
//!   (OpenRouter, OpenAI, any compatible gateway)
//!
//! # Examples
//!
//! ```
//! use christen_llm::MockCompletion;
//! use christen_domain::{CompletionProvider, SuggestionRequest};
//!
//! # async fn example() {
//! let provider = MockCompletion::new("quarterly_report");
//! let request = SuggestionRequest::new("system", "user");
//! let result = provider.complete(&request).await.unwrap();
//! assert_eq!(result, "quarterly_report");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use christen_domain::{CompletionProvider, SuggestionRequest};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur while requesting a completion
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Network or transport error
    #[error("request failed: {0}")]
    Http(String),

    /// Non-success status from the completion service
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or the raw body
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The service returned no usable text
    #[error("empty completion")]
    Empty,
}

/// What the mock returns for a scripted request
#[derive(Debug, Clone)]
enum ScriptedReply {
    Text(String),
    Error,
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without any network access. Responses
/// can be scripted per user segment; unscripted requests get the default
/// response. Errors can be injected, and calls are counted.
///
/// # Examples
///
/// ```
/// use christen_llm::MockCompletion;
/// use christen_domain::{CompletionProvider, SuggestionRequest};
///
/// # async fn example() {
/// let mut provider = MockCompletion::new("default_name");
/// provider.add_response("user one", "name_one");
///
/// let request = SuggestionRequest::new("sys", "user one");
/// assert_eq!(provider.complete(&request).await.unwrap(), "name_one");
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockCompletion {
    default_reply: ScriptedReply,
    scripted: Arc<Mutex<HashMap<String, ScriptedReply>>>,
    call_count: Arc<Mutex<usize>>,
    last_request: Arc<Mutex<Option<SuggestionRequest>>>,
}

impl MockCompletion {
    /// Create a mock returning a fixed response for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_reply: ScriptedReply::Text(response.into()),
            scripted: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock that fails every request
    pub fn failing() -> Self {
        Self {
            default_reply: ScriptedReply::Error,
            scripted: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Script a response for an exact user segment
    pub fn add_response(&mut self, user: impl Into<String>, response: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(user.into(), ScriptedReply::Text(response.into()));
    }

    /// Script an error for an exact user segment
    pub fn add_error(&mut self, user: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .insert(user.into(), ScriptedReply::Error);
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<SuggestionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletion {
    type Error = CompletionError;

    async fn complete(&self, request: &SuggestionRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_request.lock().unwrap() = Some(request.clone());

        let reply = {
            let scripted = self.scripted.lock().unwrap();
            scripted
                .get(&request.user)
                .cloned()
                .unwrap_or_else(|| self.default_reply.clone())
        };

        match reply {
            ScriptedReply::Text(text) => Ok(text),
            ScriptedReply::Error => Err(CompletionError::Http("mock failure".to_string())),
        }
    }
}
