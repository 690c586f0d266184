//! Scripted LLM mock for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;

use super::{LlmClient, LlmResponse};

/// LLM client that replays a scripted list of responses and records every
/// prompt it was invoked with.
///
/// Each `invoke` pops the next scripted response; when the script runs dry the
/// last response is repeated. Use [`MockLlm::calls`] to assert on the prompts
/// the oracle built.
pub struct MockLlm {
    responses: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockLlm {
    /// Mock that always returns `content`.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            responses: Mutex::new(VecDeque::new()),
            last: Mutex::new(content),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock that returns the given responses in order, repeating the last one.
    pub fn with_responses(responses: Vec<String>) -> Self {
        let last = responses.last().cloned().unwrap_or_default();
        Self {
            responses: Mutex::new(responses.into()),
            last: Mutex::new(last),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The message lists this mock was invoked with, in order.
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(messages.to_vec());
        let content = match self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
        {
            Some(next) => {
                *self.last.lock().unwrap_or_else(|e| e.into_inner()) = next.clone();
                next
            }
            None => self.last.lock().unwrap_or_else(|e| e.into_inner()).clone(),
        };
        Ok(LlmResponse { content })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_response_repeats() {
        let llm = MockLlm::new("hello");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "hello");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "hello");
    }

    #[tokio::test]
    async fn scripted_responses_pop_in_order_then_repeat_last() {
        let llm = MockLlm::with_responses(vec!["one".into(), "two".into()]);
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "one");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "two");
        assert_eq!(llm.invoke(&[]).await.unwrap().content, "two");
    }

    #[tokio::test]
    async fn records_prompts() {
        let llm = MockLlm::new("x");
        let _ = llm.invoke(&[Message::user("q")]).await.unwrap();
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![Message::user("q")]);
    }
}
