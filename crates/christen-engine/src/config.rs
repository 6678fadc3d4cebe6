//! Configuration for the suggestion engine

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the suggestion engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum extracted content included in the prompt (characters)
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,

    /// Maximum time for the completion-service call (seconds)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl EngineConfig {
    /// The completion-call timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_content_chars: default_max_content_chars(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_max_content_chars() -> usize {
    12_000
}

fn default_request_timeout_secs() -> u64 {
    60
}
