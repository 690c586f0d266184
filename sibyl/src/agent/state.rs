//! Agent state: everything one turn carries through the graph.

use serde::{Deserialize, Serialize};

use crate::message::Message;

use super::AgentAction;

/// Terminal output of a turn: the answer and its source URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentOutput {
    pub answer: String,
    #[serde(default)]
    pub url: String,
}

/// State threaded through the oracle/tool loop.
///
/// Created at turn start, discarded after the final answer is returned;
/// nothing outlives the turn.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    /// The user message this turn answers.
    pub input: String,
    /// Prior chat turns, oldest first.
    pub chat_history: Vec<Message>,
    /// Accumulated tool selections; completed ones carry `tool_output`.
    pub intermediate_steps: Vec<AgentAction>,
    /// Set by the final_answer tool; ends the turn.
    pub output: Option<AgentOutput>,
    /// Model identifier selected in the UI.
    pub model: String,
}

impl AgentState {
    /// Starts a turn for one user message.
    pub fn new(input: impl Into<String>, chat_history: Vec<Message>, model: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            chat_history,
            intermediate_steps: Vec::new(),
            output: None,
            model: model.into(),
        }
    }

    /// Whether the named tool has been selected at any point this turn.
    pub fn has_used(&self, tool_name: &str) -> bool {
        self.intermediate_steps
            .iter()
            .any(|a| a.tool_name == tool_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn has_used_matches_any_step() {
        let mut state = AgentState::new("q", vec![], "m");
        assert!(!state.has_used("search"));
        state.intermediate_steps.push(AgentAction {
            tool_name: "search".to_string(),
            tool_input: json!({"query": "q"}),
            tool_output: None,
        });
        assert!(state.has_used("search"));
        assert!(!state.has_used("final_answer"));
    }

    #[test]
    fn agent_output_url_defaults_when_absent() {
        let out: AgentOutput = serde_json::from_str(r#"{"answer": "a"}"#).unwrap();
        assert_eq!(out.url, "");
    }
}
