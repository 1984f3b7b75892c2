//! CLI argument parsing and command handling

use crate::config::Config;
use crate::runner::{BatchRunner, RunMode, RunReport};
use anyhow::{Context, Result};
use clap::Parser;

/// Style Bench - compare style-transfer responses across OpenAI and Anthropic models
#[derive(Parser, Debug)]
#[command(name = "style-bench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Send only the first prompt to the first model of each provider
    #[arg(long)]
    pub single_test: bool,

    /// Run the full prompt set against OpenAI models only
    #[arg(long)]
    pub openai_only: bool,

    /// Run the full prompt set against Anthropic models only
    #[arg(long)]
    pub anthropic_only: bool,

    /// Output directory for results
    #[arg(long, env = "STYLE_BENCH_RESULTS_DIR", default_value = "results")]
    pub results_dir: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Unrecognised arguments are accepted and ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Run mode selected by the flags; earlier flags win when several are set
    pub fn mode(&self) -> RunMode {
        if self.single_test {
            RunMode::SingleTest
        } else if self.openai_only {
            RunMode::OpenAiOnly
        } else if self.anthropic_only {
            RunMode::AnthropicOnly
        } else {
            RunMode::All
        }
    }

    /// Run the benchmark based on CLI arguments
    pub async fn run(&self) -> Result<()> {
        let mode = self.mode();
        if !self.ignored.is_empty() {
            tracing::debug!("Ignoring unrecognised arguments: {:?}", self.ignored);
        }

        let config = Config::from_env(&self.results_dir);
        config
            .validate_for(mode)
            .context("Invalid configuration")?;

        tracing::info!("Starting Style Bench");
        tracing::info!("Mode: {:?}", mode);
        tracing::info!("Results directory: {}", self.results_dir);

        let runner = BatchRunner::new(&config)?;
        let reports = runner.run(mode).await?;

        println!();
        Self::print_results(&reports);

        Ok(())
    }

    fn print_results(reports: &[RunReport]) {
        println!("{}", "=".repeat(70));
        println!("   Style Bench Results");
        println!("{}", "=".repeat(70));

        for report in reports {
            println!();
            println!("{}:", report.provider);
            println!("  Requests:     {}", report.records.len());
            println!("  Successful:   {}", report.successes());
            println!("  Failed:       {}", report.failures());
            if let Some(avg) = report.avg_duration_ms() {
                println!("  Avg latency:  {:.2} ms", avg);
            }
            println!("  Output:       {}", report.output_path.display());
        }

        println!();
        println!("{}", "=".repeat(70));
    }
}
