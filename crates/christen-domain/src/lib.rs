//! Christen Domain Layer
//!
//! This crate contains the core value objects and trait interfaces for
//! christen. It defines what a valid suggested filename is, and the seams
//! through which the infrastructure layers (content extraction, completion
//! service) plug into the pipeline.
//!
//! ## Key Concepts
//!
//! - **NamingPolicy**: the naming rules a suggested name must satisfy —
//!   character set, separator, length, plus free-text conventions
//! - **ExtractedContent**: what content extraction produced for a file, or
//!   why it could not
//! - **SanitizedName**: a name proven to satisfy the policy; the only value
//!   the pipeline ever returns
//! - **Fallback**: the deterministic generic name used when any pipeline
//!   stage fails
//!
//! ## Architecture
//!
//! Infrastructure implementations live in other crates:
//! - `christen-extractor` implements [`ContentExtractor`]
//! - `christen-llm` implements [`CompletionProvider`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod fallback;
pub mod policy;
pub mod request;
pub mod sanitize;
pub mod traits;

// Re-exports for convenience
pub use content::ExtractedContent;
pub use fallback::{fallback, FallbackCause};
pub use policy::NamingPolicy;
pub use request::SuggestionRequest;
pub use sanitize::{sanitize, SanitizeError, SanitizedName};
pub use traits::{CompletionProvider, ContentExtractor};
