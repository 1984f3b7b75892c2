//! Style Bench CLI
//!
//! Command-line interface for running the style-transfer benchmark.

use anyhow::Result;
use clap::Parser;
use style_bench::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; keys may come from the real environment.
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    cli.run().await?;

    Ok(())
}
