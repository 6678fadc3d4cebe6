//! Configuration management for the CLI.
//!
//! Resolution order follows the original tool's contract: environment
//! credentials override CLI values, which override the config file; for
//! everything else CLI values override the config file, which overrides
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use christen_domain::NamingPolicy;
use christen_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Environment variable checked first for the API key
pub const API_KEY_ENV: &str = "CHRISTEN_API_KEY";

/// Fallback environment variable, for OpenRouter users
pub const OPENROUTER_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// System prompt used when no system-prompt file is configured
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that names files based on \
     their content. Respond with only the filename, no extension, no quotes.";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default file locations
    #[serde(default)]
    pub defaults: Defaults,

    /// Completion-service settings
    #[serde(default)]
    pub model: ModelSettings,

    /// Naming-policy constraints
    #[serde(default)]
    pub policy: NamingPolicy,

    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Default locations of the conventions and system-prompt documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Conventions markdown file
    pub conventions_file: Option<PathBuf>,

    /// System-prompt file
    pub system_prompt_file: Option<PathBuf>,
}

/// Completion-service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (environment variables take precedence)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Completion token budget
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    /// The default configuration file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".christen").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly given path must exist and parse. The default path is
    /// optional: when absent, built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|e| {
            CliError::Config(format!("cannot read config file '{}': {e}", path.display()))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Naming policy with the conventions text attached
    pub policy: NamingPolicy,

    /// System-prompt text
    pub system_prompt: String,

    /// Model identifier
    pub model: String,

    /// API base URL
    pub base_url: String,

    /// API key
    pub api_key: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Completion token budget
    pub max_tokens: u32,

    /// Engine settings
    pub engine: EngineConfig,
}

/// Resolve CLI arguments, environment, and config file into final settings.
pub fn resolve(cli: &Cli, config: Config) -> Result<Resolved> {
    let env_key = read_env_key(API_KEY_ENV).or_else(|| read_env_key(OPENROUTER_KEY_ENV));
    resolve_with_env(cli, config, env_key)
}

fn resolve_with_env(cli: &Cli, config: Config, env_key: Option<String>) -> Result<Resolved> {
    let conventions = match cli.conventions.as_ref().or(config.defaults.conventions_file.as_ref()) {
        Some(path) => read_document(path, "conventions")?,
        None => String::new(),
    };

    let system_prompt = match cli
        .system_prompt
        .as_ref()
        .or(config.defaults.system_prompt_file.as_ref())
    {
        Some(path) => read_document(path, "system prompt")?,
        None => DEFAULT_SYSTEM_PROMPT.to_string(),
    };

    let api_key = env_key
        .or_else(|| cli.api_key.clone())
        .or(config.model.api_key)
        .ok_or(CliError::MissingApiKey)?;

    Ok(Resolved {
        policy: config.policy.with_rules(conventions),
        system_prompt,
        model: cli.model.clone().unwrap_or(config.model.model),
        base_url: cli.base_url.clone().unwrap_or(config.model.base_url),
        api_key,
        temperature: config.model.temperature,
        max_tokens: config.model.max_tokens,
        engine: config.engine,
    })
}

fn read_env_key(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|key| !key.trim().is_empty())
}

fn read_document(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!(
            "cannot read {what} file '{}': {e}",
            path.display()
        ))
    })
}

fn default_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_temperature() -> f64 {
    0.2
}

fn default_max_tokens() -> u32 {
    32
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["christen"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.model, "gpt-5-mini");
        assert_eq!(config.model.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.model.temperature, 0.2);
        assert_eq!(config.model.max_tokens, 32);
        assert_eq!(config.policy.max_length, 120);
    }

    #[test]
    fn test_load_explicit_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[model]\nmodel = \"other-model\"\n\n[policy]\nseparator = \"-\"\n\n[engine]\nrequest_timeout_secs = 10\n"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.model.model, "other-model");
        assert_eq!(config.policy.separator, '-');
        assert_eq!(config.engine.request_timeout_secs, 10);
        // Unspecified values keep their defaults
        assert_eq!(config.model.base_url, "https://openrouter.ai/api/v1");
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not [valid toml").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_api_key_precedence_env_first() {
        let args = cli(&["f.txt", "--api-key", "from-cli"]);
        let mut config = Config::default();
        config.model.api_key = Some("from-config".to_string());

        let resolved =
            resolve_with_env(&args, config.clone(), Some("from-env".to_string())).unwrap();
        assert_eq!(resolved.api_key, "from-env");

        let resolved = resolve_with_env(&args, config.clone(), None).unwrap();
        assert_eq!(resolved.api_key, "from-cli");

        let resolved = resolve_with_env(&cli(&["f.txt"]), config, None).unwrap();
        assert_eq!(resolved.api_key, "from-config");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = resolve_with_env(&cli(&["f.txt"]), Config::default(), None);
        assert!(matches!(result, Err(CliError::MissingApiKey)));
    }

    #[test]
    fn test_cli_overrides_config_for_model() {
        let args = cli(&["f.txt", "--api-key", "k", "--model", "cli-model"]);
        let mut config = Config::default();
        config.model.model = "config-model".to_string();

        let resolved = resolve_with_env(&args, config, None).unwrap();
        assert_eq!(resolved.model, "cli-model");
    }

    #[test]
    fn test_conventions_text_attached_to_policy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Use lowercase snake_case names.").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let args = cli(&["f.txt", "--api-key", "k", "--conventions", &path]);

        let resolved = resolve_with_env(&args, Config::default(), None).unwrap();
        assert_eq!(resolved.policy.rules, "Use lowercase snake_case names.");
    }

    #[test]
    fn test_unreadable_conventions_file_is_an_error() {
        let args = cli(&[
            "f.txt",
            "--api-key",
            "k",
            "--conventions",
            "/nonexistent/conventions.md",
        ]);
        assert!(matches!(
            resolve_with_env(&args, Config::default(), None),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_default_system_prompt_used_when_unconfigured() {
        let args = cli(&["f.txt", "--api-key", "k"]);
        let resolved = resolve_with_env(&args, Config::default(), None).unwrap();
        assert_eq!(resolved.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }
}
