//! Core suggestion engine implementation

use std::path::Path;

use christen_domain::{
    fallback, sanitize, CompletionProvider, ContentExtractor, ExtractedContent, FallbackCause,
    NamingPolicy, SanitizedName,
};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::prompt::PromptBuilder;

/// The suggestion engine: extract → assemble → complete → sanitize.
///
/// Generic over its two infrastructure seams so tests can inject
/// deterministic fakes. Stateless across invocations; each `suggest` call
/// is independent.
pub struct Engine<E, C>
where
    E: ContentExtractor,
    C: CompletionProvider,
{
    extractor: E,
    completion: C,
    policy: NamingPolicy,
    system_prompt: String,
    config: EngineConfig,
}

impl<E, C> Engine<E, C>
where
    E: ContentExtractor,
    C: CompletionProvider,
{
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the naming policy fails
    /// validation.
    pub fn new(
        extractor: E,
        completion: C,
        policy: NamingPolicy,
        system_prompt: impl Into<String>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        policy.validate().map_err(EngineError::Policy)?;

        Ok(Self {
            extractor,
            completion,
            policy,
            system_prompt: system_prompt.into(),
            config,
        })
    }

    /// Suggest a policy-compliant name for the file at `path`.
    ///
    /// Strictly sequential and non-retrying. Extraction failures
    /// short-circuit to the fallback name without calling the completion
    /// service; service and sanitization failures degrade to the fallback
    /// name for this invocation. Never fails.
    pub async fn suggest(&self, path: &Path) -> SanitizedName {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        info!(path = %path.display(), "suggesting name");

        let content = match self.extractor.extract(path) {
            ExtractedContent::Unavailable { reason } => {
                debug!(%reason, "content unavailable; skipping completion call");
                return fallback(&extension, FallbackCause::Extraction, &self.policy);
            }
            available => available,
        };

        let request = PromptBuilder::new(
            &self.system_prompt,
            &self.policy,
            &content,
            file_name,
            &extension,
            self.config.max_content_chars,
        )
        .build();

        debug!(
            system_chars = request.system.len(),
            user_chars = request.user.len(),
            "assembled suggestion request"
        );

        let raw = match timeout(
            self.config.request_timeout(),
            self.completion.complete(&request),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                debug!(error = %e, "completion service failed");
                return fallback(&extension, FallbackCause::Service, &self.policy);
            }
            Err(_) => {
                debug!(
                    timeout_secs = self.config.request_timeout_secs,
                    "completion service timed out"
                );
                return fallback(&extension, FallbackCause::Service, &self.policy);
            }
        };

        debug!(raw_chars = raw.len(), "completion received");

        match sanitize(&raw, &self.policy) {
            Ok(name) => {
                info!(name = %name, "suggestion complete");
                name
            }
            Err(e) => {
                debug!(error = %e, raw = %raw, "sanitization failed");
                fallback(&extension, FallbackCause::Sanitization, &self.policy)
            }
        }
    }

    /// The naming policy this engine enforces
    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }
}
