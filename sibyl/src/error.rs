//! Agent execution error types.
//!
//! Used by graph nodes, the LLM client, and the tools. One turn has exactly
//! two failure shapes: a step failed, or the model's tool selection could not
//! be parsed.

use thiserror::Error;

/// Agent execution error.
///
/// Returned by `Node::run`, `LlmClient::invoke`, and `Tool::call`. There is no
/// retry layer; an error propagates out of the turn.
#[derive(Debug, Error)]
pub enum AgentError {
    /// A step failed (LLM call, tool execution, graph routing).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// The model reply contained no parsable tool selection.
    ///
    /// Fatal for the turn: the oracle does not retry and there is no
    /// user-facing fallback.
    #[error("malformed tool selection: {0}")]
    MalformedAction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_variant_message() {
        let err = AgentError::ExecutionFailed("llm call failed".to_string());
        assert!(err.to_string().contains("execution failed"));
        assert!(err.to_string().contains("llm call failed"));

        let err = AgentError::MalformedAction("no JSON object".to_string());
        assert!(err.to_string().contains("malformed tool selection"));
        assert!(err.to_string().contains("no JSON object"));
    }
}
