//! Christen Suggestion Engine
//!
//! Orchestrates the suggestion pipeline: content extraction, prompt
//! assembly, the completion-service call, and sanitization of the returned
//! text into a policy-compliant filename.
//!
//! # Architecture
//!
//! ```text
//! File → ContentExtractor → PromptBuilder → CompletionProvider → sanitize
//!            │                                    │                  │
//!            └────────── any failure ─────────────┴──────────────────┘
//!                                │
//!                            fallback
//! ```
//!
//! The pipeline is strictly sequential with no retries and no streaming.
//! Once an [`Engine`] is constructed, `suggest` cannot fail: every
//! extraction, service, or sanitization failure degrades to a
//! deterministic, policy-compliant fallback name.
//!
//! # Example Usage
//!
//! ```
//! use christen_domain::NamingPolicy;
//! use christen_engine::{Engine, EngineConfig};
//! use christen_llm::MockCompletion;
//!
//! # #[derive(Clone)] struct StubExtractor;
//! # impl christen_domain::ContentExtractor for StubExtractor {
//! #     fn extract(&self, _: &std::path::Path) -> christen_domain::ExtractedContent {
//! #         christen_domain::ExtractedContent::Text("Invoice #4521".to_string())
//! #     }
//! # }
//! # async fn example() {
//! let engine = Engine::new(
//!     StubExtractor,
//!     MockCompletion::new("Acme_Invoice_4521"),
//!     NamingPolicy::default(),
//!     "Respond with only the filename, no extension, no quotes.",
//!     EngineConfig::default(),
//! )
//! .unwrap();
//!
//! let name = engine.suggest(std::path::Path::new("scan.pdf")).await;
//! assert_eq!(name.as_str(), "acme_invoice_4521");
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod prompt;


pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use prompt::PromptBuilder;
