//! OpenAI provider implementation

use super::{Provider, SYSTEM_INSTRUCTION};
use crate::dataset::PromptCase;
use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

const CONTENT_PATH: &str = "/choices/0/message/content";

/// Chat completion request body
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

/// Message in a chat conversation
#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// OpenAI chat completions provider
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI provider
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Get the chat completions endpoint URL
    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Provider for OpenAIProvider {
    fn name(&self) -> &str {
        "OpenAI"
    }

    fn file_tag(&self) -> &str {
        "openai"
    }

    fn endpoint(&self) -> String {
        self.chat_url()
    }

    fn client(&self) -> &Client {
        &self.client
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {}", self.api_key))
    }

    fn build_request(&self, model: &str, case: &PromptCase) -> Result<Value, RequestError> {
        let request = ChatRequest {
            model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                Message {
                    role: "user",
                    content: case.user_message,
                },
                Message {
                    role: "user",
                    content: case.style_target,
                },
            ],
        };
        Ok(serde_json::to_value(request)?)
    }

    // No fallback here: a response without the content path is a failed pair.
    fn extract_text(&self, body: Value) -> Result<Value, RequestError> {
        body.pointer(CONTENT_PATH)
            .cloned()
            .ok_or(RequestError::MissingField {
                path: "choices[0].message.content",
            })
    }
}
