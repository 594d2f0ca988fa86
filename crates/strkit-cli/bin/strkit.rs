//! strkit binary entry point.
//!
//! This is a thin wrapper around the strkit-cli library that:
//! 1. Parses command-line arguments and environment
//! 2. Initializes logging to stderr
//! 3. Runs the selected command
//! 4. Prints the rendered result to stdout

use anyhow::{Context, Result};
use strkit_cli::{Config, render, run};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_args();

    let level = Level::from(config.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    config.validate()?;

    let outcome = run(
        &config.command,
        config.path_style.into(),
        &mut std::io::stdin().lock(),
    )
    .with_context(|| format!("{} failed", config.command.name()))?;

    let rendered = render(&outcome, config.format).context("Failed to render output")?;
    println!("{rendered}");

    Ok(())
}
