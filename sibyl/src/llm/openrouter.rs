//! OpenRouter chat client: OpenAI-compatible chat completions over the gateway.
//!
//! Field names match the [OpenAI Chat Completions API]
//! (https://platform.openai.com/docs/api-reference/chat); OpenRouter serves the
//! same wire format for every hosted model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::message::Message;

use super::{LlmClient, LlmResponse};

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

fn openrouter_api_url() -> String {
    std::env::var("OPENROUTER_API_URL").unwrap_or_else(|_| OPENROUTER_API_URL.to_string())
}

/// Chat completion request body (OpenAI-compatible).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

/// A single request message: role + content.
#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Chat completion response body; only the fields the oracle needs.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn encode_messages(messages: &[Message]) -> Vec<WireMessage<'_>> {
    messages
        .iter()
        .map(|m| WireMessage {
            role: m.role(),
            content: m.content(),
        })
        .collect()
}

/// Chat completions via the OpenRouter gateway for one selected model.
///
/// One instance per turn; the model id comes from the UI's selector. Requests
/// block until the gateway answers, with no timeout beyond the client default.
pub struct ChatOpenRouter {
    api_key: String,
    model: String,
}

impl ChatOpenRouter {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl LlmClient for ChatOpenRouter {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: encode_messages(messages),
        };
        let client = reqwest::Client::new();
        let res = client
            .post(openrouter_api_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("openrouter request: {e}")))?;
        if !res.status().is_success() {
            let status = res.status();
            let err_body = res.text().await.unwrap_or_default();
            return Err(AgentError::ExecutionFailed(format!(
                "openrouter error {status}: {err_body}"
            )));
        }
        let out: ChatCompletionResponse = res
            .json()
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("openrouter response: {e}")))?;
        let content = out
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AgentError::ExecutionFailed("openrouter returned no choices".into()))?;
        Ok(LlmResponse { content })
    }
}
