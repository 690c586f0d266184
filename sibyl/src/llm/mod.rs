//! LLM client abstraction for the oracle node.
//!
//! The oracle depends on a callable that turns a message list into assistant
//! text; this module defines the trait, a scripted mock, and the OpenRouter
//! gateway client.

mod mock;
mod openrouter;

pub use mock::MockLlm;
pub use openrouter::ChatOpenRouter;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

/// Response from an LLM completion: assistant message text.
///
/// The oracle parses the tool selection out of `content`; there is no
/// native tool-call channel in this design.
#[derive(Debug)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
}

/// LLM client: given messages, returns assistant text.
///
/// Implementations: [`MockLlm`] (scripted responses for tests),
/// [`ChatOpenRouter`] (OpenAI-compatible chat completions via OpenRouter).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one completion: read messages, return assistant content.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}
