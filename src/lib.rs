//! Style Bench - style-transfer benchmark for hosted LLM providers
//!
//! Sends a fixed set of prompts, each paired with a style/target rewriting
//! instruction, to every configured OpenAI and Anthropic model, and records the
//! responses and latencies into one CSV file per provider run.
//!
//! # Architecture
//!
//! - **Dataset**: the fixed prompt cases and model lists
//! - **Providers**: request building and response extraction per API
//! - **Runner**: sequential orchestration and per-pair outcomes
//! - **Output**: the CSV results file layout
//!
//! # Example
//!
//! ```rust,no_run
//! use style_bench::config::Config;
//! use style_bench::runner::{BatchRunner, RunMode};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env("results");
//!     config.validate_for(RunMode::SingleTest)?;
//!
//!     let runner = BatchRunner::new(&config)?;
//!     let reports = runner.run_single_test().await?;
//!     for report in reports {
//!         println!("{}: {} ok", report.provider, report.successes());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod providers;
pub mod runner;

// Re-export commonly used types
pub use config::Config;
pub use dataset::PromptCase;
pub use error::{ConfigError, RequestError};
pub use output::ResultsFile;
pub use providers::Provider;
pub use runner::{BatchRunner, PairOutcome, RunMode, RunReport};
