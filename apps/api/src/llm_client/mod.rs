//! LLM Client: the single point of entry for all completion-endpoint calls.
//!
//! No other module talks to the upstream model directly; the plan and kit
//! generators build prompts and hand them to `call_json`.
//!
//! One request per call. There is no retry loop: a failed call is reported
//! to the caller, which decides between retrying and falling back.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::LlmConfig;

pub mod prompts;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Error)]
pub enum LlmError {
    /// Credential absent. Surfaced to the operator, never retried.
    #[error("OpenAI API key not configured")]
    MissingCredentials,

    /// Upstream reachable but answered with a non-success status.
    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// No response at all: connection refused, DNS, timeout.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response received but the payload was not the JSON we asked for.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// One prompt exchange: a system instruction plus one user message.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub user: &'a str,
    pub max_tokens: Option<u32>,
}

/// Wraps an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    pub fn has_credentials(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, CHAT_COMPLETIONS_PATH)
    }

    /// Makes exactly one call to the completion endpoint and returns the envelope.
    pub async fn call(&self, request: CompletionRequest<'_>) -> Result<ChatResponse, LlmError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredentials)?;

        let body = ChatRequest {
            model: request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            // The body is diagnostic only; an unreadable or non-JSON body must not mask the status.
            let raw = response.text().await.unwrap_or_default();
            let body = serde_json::from_str::<OpenAiError>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await?;
        let chat: ChatResponse = serde_json::from_str(&raw)
            .map_err(|e| LlmError::Parse(format!("completion envelope is not valid JSON: {e}")))?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                request.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat)
    }

    /// Calls the endpoint and decodes the message content as JSON into `T`.
    /// The prompt must instruct the model to return a JSON object.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        request: CompletionRequest<'_>,
    ) -> Result<T, LlmError> {
        let response = self.call(request).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;
        let text = strip_json_fences(text);
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }

        serde_json::from_str(text).map_err(|e| LlmError::Parse(e.to_string()))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
pub(crate) mod mock;
