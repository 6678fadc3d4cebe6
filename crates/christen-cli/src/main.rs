//! christen - suggest a filename for a file based on its content.

use clap::Parser;

use christen_cli::{config, Cli, CliError, Config};
use christen_engine::Engine;
use christen_extractor::FileExtractor;
use christen_llm::OpenAiProvider;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> christen_cli::Result<()> {
    // .env values feed the environment lookups during resolution
    dotenvy::dotenv().ok();

    // An unreadable input file is a configuration failure, not a pipeline
    // failure: abort before any extraction is attempted.
    let metadata = std::fs::metadata(&cli.file).map_err(|e| CliError::InputFile {
        path: cli.file.display().to_string(),
        source: e,
    })?;
    if !metadata.is_file() {
        return Err(CliError::Config(format!(
            "'{}' is not a regular file",
            cli.file.display()
        )));
    }

    let file_config = Config::load(cli.config.as_deref())?;
    let resolved = config::resolve(&cli, file_config)?;

    tracing::debug!(
        model = %resolved.model,
        base_url = %resolved.base_url,
        conventions_chars = resolved.policy.rules.len(),
        system_prompt_chars = resolved.system_prompt.len(),
        "configuration resolved"
    );

    let extractor = FileExtractor::new().with_max_chars(resolved.engine.max_content_chars);
    let provider = OpenAiProvider::new(&resolved.base_url, &resolved.api_key, &resolved.model)
        .with_temperature(resolved.temperature)
        .with_max_tokens(resolved.max_tokens);

    let engine = Engine::new(
        extractor,
        provider,
        resolved.policy,
        resolved.system_prompt,
        resolved.engine,
    )?;

    let name = engine.suggest(&cli.file).await;
    println!("{name}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
