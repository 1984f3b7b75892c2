//! Error types for style-bench

use thiserror::Error;

/// Failure of a single (model, prompt) request
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("API error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A body could not be encoded or decoded as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response JSON lacked the generated text
    #[error("response is missing `{path}`")]
    MissingField { path: &'static str },

    /// The result row could not be appended to the output file
    #[error("failed to write result row: {0}")]
    Write(#[from] csv::Error),
}

/// Configuration errors surfaced once at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An API key required by the selected run mode is not set
    #[error("missing API key for {provider}: set {var}")]
    MissingApiKey {
        provider: &'static str,
        var: &'static str,
    },

    /// A base URL override is not an http(s) URL
    #[error("invalid base URL for {provider}: {url}")]
    InvalidBaseUrl { provider: &'static str, url: String },
}
