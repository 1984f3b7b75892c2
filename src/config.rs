//! Run configuration
//!
//! API keys and endpoint overrides are read from the environment once and
//! validated against the selected run mode before any request is sent.

use crate::error::ConfigError;
use crate::runner::RunMode;
use std::path::PathBuf;

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ANTHROPIC_BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Credentials and endpoint for one provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl ProviderSettings {
    fn new(api_key: Option<String>, base_url: Option<String>, default_url: &str) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| default_url.to_string());
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    fn validate(
        &self,
        provider: &'static str,
        var: &'static str,
    ) -> Result<(), ConfigError> {
        if self.api_key.is_none() {
            return Err(ConfigError::MissingApiKey { provider, var });
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                provider,
                url: self.base_url.clone(),
            });
        }
        Ok(())
    }
}

/// Complete configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct Config {
    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    /// Directory the CSV files are written to
    pub results_dir: PathBuf,
}

impl Config {
    /// Build the configuration from process environment variables
    pub fn from_env(results_dir: impl Into<PathBuf>) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), results_dir)
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, results_dir: impl Into<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            openai: ProviderSettings::new(
                lookup(OPENAI_API_KEY_VAR),
                lookup(OPENAI_BASE_URL_VAR),
                DEFAULT_OPENAI_BASE_URL,
            ),
            anthropic: ProviderSettings::new(
                lookup(ANTHROPIC_API_KEY_VAR),
                lookup(ANTHROPIC_BASE_URL_VAR),
                DEFAULT_ANTHROPIC_BASE_URL,
            ),
            results_dir: results_dir.into(),
        }
    }

    /// Check that every provider the mode talks to is usable
    pub fn validate_for(&self, mode: RunMode) -> Result<(), ConfigError> {
        if mode.uses_openai() {
            self.openai.validate("OpenAI", OPENAI_API_KEY_VAR)?;
        }
        if mode.uses_anthropic() {
            self.anthropic.validate("Anthropic", ANTHROPIC_API_KEY_VAR)?;
        }
        Ok(())
    }
}
