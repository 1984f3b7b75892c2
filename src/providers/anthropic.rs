//! Anthropic provider implementation

use super::{Provider, SYSTEM_INSTRUCTION};
use crate::dataset::PromptCase;
use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

pub const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MAX_TOKENS: u32 = 1000;

const TEXT_PATH: &str = "/content/0/text";

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<UserMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct UserMessage<'a> {
    role: &'a str,
    content: Vec<ContentBlock<'a>>,
}

/// Typed content block; only text blocks are sent
#[derive(Debug, Serialize)]
struct ContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

impl<'a> ContentBlock<'a> {
    fn text(text: &'a str) -> Self {
        Self { kind: "text", text }
    }
}

/// Anthropic messages API provider
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        "Anthropic"
    }

    fn file_tag(&self) -> &str {
        "anthropic"
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
    }

    fn build_request(&self, model: &str, case: &PromptCase) -> Result<Value, RequestError> {
        let request = MessagesRequest {
            model,
            system: SYSTEM_INSTRUCTION,
            messages: vec![UserMessage {
                role: "user",
                content: vec![
                    ContentBlock::text(case.user_message),
                    ContentBlock::text(case.style_target),
                ],
            }],
            max_tokens: MAX_TOKENS,
        };
        Ok(serde_json::to_value(request)?)
    }

    /// Falls back to the whole body when `content[0].text` is absent.
    fn extract_text(&self, body: Value) -> Result<Value, RequestError> {
        match body.pointer(TEXT_PATH) {
            Some(text) => Ok(text.clone()),
            None => {
                tracing::warn!("Anthropic response has no content[0].text, recording raw body");
                Ok(body)
            }
        }
    }
}
