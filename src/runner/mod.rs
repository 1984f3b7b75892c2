//! Benchmark runner orchestration
//!
//! The runner walks the fixed dataset against each provider's model list,
//! strictly in order: models in list order, prompts in dataset order, one
//! awaited request at a time. Every attempted pair produces one
//! [`PairOutcome`]; successful pairs are also appended to the provider's
//! results file as soon as the response arrives.

use crate::config::Config;
use crate::dataset::{prompt_label, PromptCase, ANTHROPIC_MODELS, OPENAI_MODELS, PROMPT_CASES};
use crate::error::RequestError;
use crate::output::{file_timestamp, ResultsFile};
use crate::providers::{AnthropicProvider, OpenAIProvider, Provider};
use anyhow::{Context, Result};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Which providers a run talks to, and how much of the matrix it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// First prompt against the first model of each provider
    SingleTest,
    OpenAiOnly,
    AnthropicOnly,
    /// Full OpenAI run, then full Anthropic run
    All,
}

impl RunMode {
    pub fn uses_openai(self) -> bool {
        !matches!(self, RunMode::AnthropicOnly)
    }

    pub fn uses_anthropic(self) -> bool {
        !matches!(self, RunMode::OpenAiOnly)
    }
}

/// Result of one (model, prompt) request
#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    Success {
        /// Value extracted from the response body
        response: Value,
        /// `response` as written into the CSV row
        encoded: String,
        duration_ms: u64,
    },
    Failure {
        reason: String,
    },
}

impl PairOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PairOutcome::Success { .. })
    }
}

/// One attempted pair, in attempt order
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    pub model: String,
    /// Index into the prompt dataset
    pub prompt_index: usize,
    pub outcome: PairOutcome,
}

/// Everything one provider run attempted
#[derive(Debug, Clone)]
pub struct RunReport {
    pub provider: String,
    pub output_path: PathBuf,
    pub records: Vec<PairRecord>,
}

impl RunReport {
    fn new(provider: &str, output_path: &Path) -> Self {
        Self {
            provider: provider.to_string(),
            output_path: output_path.to_path_buf(),
            records: Vec::new(),
        }
    }

    pub fn successes(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.records.len() - self.successes()
    }

    /// Mean latency of the successful pairs
    pub fn avg_duration_ms(&self) -> Option<f64> {
        let durations: Vec<u64> = self
            .records
            .iter()
            .filter_map(|r| match r.outcome {
                PairOutcome::Success { duration_ms, .. } => Some(duration_ms),
                PairOutcome::Failure { .. } => None,
            })
            .collect();

        if durations.is_empty() {
            None
        } else {
            Some(durations.iter().sum::<u64>() as f64 / durations.len() as f64)
        }
    }
}

/// Runner for the style-transfer benchmark
pub struct BatchRunner {
    openai: OpenAIProvider,
    anthropic: AnthropicProvider,
    prompts: &'static [PromptCase],
    openai_models: &'static [&'static str],
    anthropic_models: &'static [&'static str],
    results_dir: PathBuf,
}

impl BatchRunner {
    /// Create a runner over the built-in dataset
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            openai: OpenAIProvider::new(
                client.clone(),
                config.openai.api_key.clone().unwrap_or_default(),
                config.openai.base_url.clone(),
            ),
            anthropic: AnthropicProvider::new(
                client,
                config.anthropic.api_key.clone().unwrap_or_default(),
                config.anthropic.base_url.clone(),
            ),
            prompts: PROMPT_CASES,
            openai_models: OPENAI_MODELS,
            anthropic_models: ANTHROPIC_MODELS,
            results_dir: config.results_dir.clone(),
        })
    }

    /// Run whatever `mode` selects
    pub async fn run(&self, mode: RunMode) -> Result<Vec<RunReport>> {
        match mode {
            RunMode::SingleTest => self.run_single_test().await,
            RunMode::OpenAiOnly => Ok(vec![self.run_openai_requests().await?]),
            RunMode::AnthropicOnly => Ok(vec![self.run_anthropic_requests().await?]),
            RunMode::All => self.run_all().await,
        }
    }

    /// Send the first prompt to the first model of each provider
    pub async fn run_single_test(&self) -> Result<Vec<RunReport>> {
        let case = &self.prompts[0];
        let timestamp = file_timestamp(Utc::now());
        let targets: [(&dyn Provider, &str); 2] = [
            (&self.openai, self.openai_models[0]),
            (&self.anthropic, self.anthropic_models[0]),
        ];

        let mut files = Vec::with_capacity(targets.len());
        for (provider, model) in targets {
            files.push(ResultsFile::create(
                &self.results_dir,
                provider.name(),
                provider.file_tag(),
                Some(model),
                &timestamp,
            )?);
        }

        let mut reports = Vec::with_capacity(targets.len());
        for ((provider, model), file) in targets.into_iter().zip(files) {
            let mut report = RunReport::new(provider.name(), file.path());
            let outcome = self.run_pair(provider, model, case, &file).await;
            report.records.push(PairRecord {
                model: model.to_string(),
                prompt_index: 0,
                outcome,
            });
            reports.push(report);
        }

        Ok(reports)
    }

    pub async fn run_openai_requests(&self) -> Result<RunReport> {
        self.run_provider_requests(&self.openai, self.openai_models)
            .await
    }

    pub async fn run_anthropic_requests(&self) -> Result<RunReport> {
        self.run_provider_requests(&self.anthropic, self.anthropic_models)
            .await
    }

    /// Full OpenAI run followed by the full Anthropic run
    pub async fn run_all(&self) -> Result<Vec<RunReport>> {
        let openai = self.run_openai_requests().await?;
        let anthropic = self.run_anthropic_requests().await?;
        Ok(vec![openai, anthropic])
    }

    /// Run every prompt against every model of one provider
    async fn run_provider_requests(
        &self,
        provider: &dyn Provider,
        models: &[&str],
    ) -> Result<RunReport> {
        let timestamp = file_timestamp(Utc::now());
        let file = ResultsFile::create(
            &self.results_dir,
            provider.name(),
            provider.file_tag(),
            None,
            &timestamp,
        )?;
        tracing::info!(
            "{} - writing results to {}",
            provider.name(),
            file.path().display()
        );

        let mut report = RunReport::new(provider.name(), file.path());

        let pb = ProgressBar::new((models.len() * self.prompts.len()) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        for model in models {
            file.append_model_heading(provider.name(), model)
                .with_context(|| format!("Failed to write model heading to: {}", file.path().display()))?;
            pb.set_message(model.to_string());

            for (prompt_index, case) in self.prompts.iter().enumerate() {
                let outcome = self.run_pair(provider, model, case, &file).await;
                report.records.push(PairRecord {
                    model: model.to_string(),
                    prompt_index,
                    outcome,
                });
                pb.inc(1);
            }

            file.append_separator()
                .with_context(|| format!("Failed to write separator to: {}", file.path().display()))?;
        }

        pb.finish_with_message(format!("{} complete", provider.name()));

        Ok(report)
    }

    /// Request one pair and record it; failures are logged and never escape
    async fn run_pair(
        &self,
        provider: &dyn Provider,
        model: &str,
        case: &PromptCase,
        file: &ResultsFile,
    ) -> PairOutcome {
        let start = Instant::now();

        match Self::request_and_record(provider, model, case, file, start).await {
            Ok((response, encoded, duration_ms)) => {
                tracing::info!(
                    "{} - Response received for model: {}, prompt: {} ({} ms)",
                    provider.name(),
                    model,
                    prompt_label(case),
                    duration_ms
                );
                PairOutcome::Success {
                    response,
                    encoded,
                    duration_ms,
                }
            }
            Err(e) => {
                tracing::error!(
                    "{} - Error for model: {}, prompt: {}: {}",
                    provider.name(),
                    model,
                    prompt_label(case),
                    e
                );
                PairOutcome::Failure {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn request_and_record(
        provider: &dyn Provider,
        model: &str,
        case: &PromptCase,
        file: &ResultsFile,
        start: Instant,
    ) -> std::result::Result<(Value, String, u64), RequestError> {
        let response = provider.complete(model, case).await?;
        let encoded = serde_json::to_string(&response)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        file.append_row(case, &encoded, duration_ms)?;

        Ok((response, encoded, duration_ms))
    }
}
