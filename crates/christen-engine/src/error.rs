//! Error types for the engine

use thiserror::Error;

/// Errors constructing a suggestion engine.
///
/// Note the asymmetry with the pipeline itself: once an engine exists,
/// `suggest` is infallible — every pipeline failure degrades to a fallback
/// name instead of erroring.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Engine configuration failed validation
    #[error("invalid engine configuration: {0}")]
    Config(String),

    /// Naming policy failed validation
    #[error("invalid naming policy: {0}")]
    Policy(String),
}
