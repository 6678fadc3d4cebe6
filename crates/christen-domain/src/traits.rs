//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the suggestion pipeline and
//! infrastructure. Implementations live in other crates; tests substitute
//! deterministic fakes.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;

use crate::content::ExtractedContent;
use crate::request::SuggestionRequest;

/// Trait for turning a file into text or a textual description
///
/// Implemented by the infrastructure layer (christen-extractor).
/// Total by contract: extraction failures are reported as
/// [`ExtractedContent::Unavailable`], never as errors or panics.
pub trait ContentExtractor: Send + Sync {
    /// Extract content from the file at `path`
    fn extract(&self, path: &Path) -> ExtractedContent;
}

/// Trait for the remote text-generation service
///
/// Implemented by the infrastructure layer (christen-llm).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Error type for completion operations
    type Error: fmt::Display + Send + Sync;

    /// Request a single, non-streaming completion
    async fn complete(&self, request: &SuggestionRequest) -> Result<String, Self::Error>;
}
