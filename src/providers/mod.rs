//! LLM provider adapters
//!
//! Each provider module implements the `Provider` trait: it builds the
//! provider-specific request body, attaches its authentication headers and
//! extracts the generated text from the provider-specific response shape.
//! Sending the request is shared.

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;

use crate::dataset::PromptCase;
use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

/// Instruction sent as the system prompt with every request
pub const SYSTEM_INSTRUCTION: &str = "Change the text using the given style and target.";

/// Provider trait that all LLM providers must implement
#[async_trait]
pub trait Provider: Send + Sync {
    /// Display name, also written into the CSV header
    fn name(&self) -> &str;

    /// Lowercase tag used in output file names
    fn file_tag(&self) -> &str;

    /// Full URL requests are posted to
    fn endpoint(&self) -> String;

    /// HTTP client used to send requests
    fn client(&self) -> &Client;

    /// Attach authentication and versioning headers
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder;

    /// Build the JSON request body for one prompt
    fn build_request(&self, model: &str, case: &PromptCase) -> Result<Value, RequestError>;

    /// Pull the generated text out of a parsed response body
    fn extract_text(&self, body: Value) -> Result<Value, RequestError>;

    /// Send one prompt to `model` and return the extracted response
    async fn complete(&self, model: &str, case: &PromptCase) -> Result<Value, RequestError> {
        let body = self.build_request(model, case)?;

        let response = self
            .authorize(self.client().post(self.endpoint()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let parsed: Value = serde_json::from_slice(&bytes)?;
        tracing::debug!(provider = self.name(), model, "response body: {}", parsed);

        self.extract_text(parsed)
    }
}
