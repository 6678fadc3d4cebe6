//! Error types for the CLI application.
//!
//! Only configuration-level failures surface here; everything that happens
//! inside the pipeline degrades to a fallback name instead.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// No API key from any source
    #[error(
        "no API key provided (set CHRISTEN_API_KEY or OPENROUTER_API_KEY, \
         pass --api-key, or add it to the config file)"
    )]
    MissingApiKey,

    /// The input file cannot be read at all
    #[error("cannot read input file '{path}': {source}")]
    InputFile {
        /// Path as given on the command line
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Engine rejected its configuration
    #[error(transparent)]
    Engine(#[from] christen_engine::EngineError),
}
