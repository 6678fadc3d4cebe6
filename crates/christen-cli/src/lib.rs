//! Christen CLI library.
//!
//! Argument parsing, configuration loading, and settings resolution for the
//! `christen` binary.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::{resolve, Config, Resolved};
pub use error::{CliError, Result};
