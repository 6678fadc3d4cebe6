//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Suggest a descriptive filename for a file based on its content.
#[derive(Debug, Parser)]
#[command(name = "christen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to suggest a name for
    pub file: PathBuf,

    /// Path to the naming-conventions markdown file
    #[arg(long)]
    pub conventions: Option<PathBuf>,

    /// Path to the system-prompt file
    #[arg(long)]
    pub system_prompt: Option<PathBuf>,

    /// Model identifier (e.g. gpt-5-mini)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key; the CHRISTEN_API_KEY / OPENROUTER_API_KEY environment
    /// variables take precedence
    #[arg(long)]
    pub api_key: Option<String>,

    /// Configuration file path (default: ~/.christen/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
