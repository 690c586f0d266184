//! Oracle node: build the prompt, ask the model for the next tool, record it.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::tools::{ToolRegistry, TOOL_SEARCH};

use super::prompt::{
    continue_reminder, render_system_prompt, FORCE_FINAL_ANSWER, ORACLE_SYSTEM_PROMPT,
};
use super::runner::NODE_ORACLE;
use super::scratchpad::build_scratchpad;
use super::{AgentAction, AgentState};

/// Asks the model to choose the next tool.
///
/// Builds system prompt + chat history + original query + scratchpad, invokes
/// the LLM, and appends the parsed [`AgentAction`] to the state. Tool gating:
/// once search has been used, only final_answer is offered and the trailing
/// reminder becomes the forcing instruction.
pub struct OracleNode {
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
}

impl OracleNode {
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<ToolRegistry>) -> Self {
        Self { llm, tools }
    }

    fn build_messages(&self, state: &AgentState) -> Vec<Message> {
        let mut tail = build_scratchpad(&state.intermediate_steps);
        let offered = if tail.is_empty() {
            // First oracle call: all tools on the table.
            self.tools.specs()
        } else {
            if state.has_used(TOOL_SEARCH) {
                // The model tends to keep searching for the same thing;
                // narrow the choice and force the finish.
                tail.push(Message::user(FORCE_FINAL_ANSWER));
                self.tools
                    .specs()
                    .into_iter()
                    .filter(|s| s.name != TOOL_SEARCH)
                    .collect()
            } else {
                tail.push(Message::user(continue_reminder(&state.input)));
                self.tools.specs()
            }
        };

        let mut messages = vec![Message::system(render_system_prompt(
            ORACLE_SYSTEM_PROMPT,
            &offered,
        ))];
        messages.extend(state.chat_history.iter().cloned());
        messages.push(Message::user(state.input.clone()));
        messages.extend(tail);
        messages
    }
}

#[async_trait]
impl Node<AgentState> for OracleNode {
    fn id(&self) -> &str {
        NODE_ORACLE
    }

    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let messages = self.build_messages(&state);
        let response = self.llm.invoke(&messages).await?;
        let action = AgentAction::parse_completion(&response.content)?;
        tracing::debug!(tool = %action.tool_name, "oracle selected tool");
        let mut state = state;
        state.intermediate_steps.push(action);
        Ok((state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::agent::build_tool_registry;
    use crate::llm::MockLlm;
    use crate::search::TavilyClient;

    fn oracle_with(llm: Arc<MockLlm>) -> OracleNode {
        let tools = build_tool_registry(TavilyClient::new("k"));
        OracleNode::new(llm, tools)
    }

    fn completed_search() -> AgentAction {
        AgentAction {
            tool_name: "search".to_string(),
            tool_input: json!({"query": "q"}),
            tool_output: Some("Title: t\nurl: u\nContent:\nc".to_string()),
        }
    }

    #[test]
    fn first_call_offers_both_tools_and_no_scratchpad() {
        let llm = Arc::new(MockLlm::new(""));
        let oracle = oracle_with(llm);
        let state = AgentState::new("my question", vec![Message::user("earlier")], "m");

        let messages = oracle.build_messages(&state);
        // system + history + input, no scratchpad tail.
        assert_eq!(messages.len(), 3);
        let system = messages[0].content();
        assert!(system.contains("\"search\""));
        assert!(system.contains("\"final_answer\""));
        assert!(matches!(&messages[2], Message::User(c) if c == "my question"));
    }

    #[test]
    fn after_search_only_final_answer_is_offered_and_reminder_is_forced() {
        let llm = Arc::new(MockLlm::new(""));
        let oracle = oracle_with(llm);
        let mut state = AgentState::new("my question", vec![], "m");
        state.intermediate_steps.push(completed_search());

        let messages = oracle.build_messages(&state);
        let system = messages[0].content();
        assert!(!system.contains("\"search\""), "search must not be offered");
        assert!(system.contains("\"final_answer\""));
        let last = messages.last().unwrap();
        assert!(matches!(last, Message::User(c) if c == FORCE_FINAL_ANSWER));
    }

    #[test]
    fn scratchpad_is_replayed_between_input_and_reminder() {
        let llm = Arc::new(MockLlm::new(""));
        let oracle = oracle_with(llm);
        let mut state = AgentState::new("q", vec![], "m");
        state.intermediate_steps.push(completed_search());

        let messages = oracle.build_messages(&state);
        // system, input, assistant(invocation), user(output), user(forcing)
        assert_eq!(messages.len(), 5);
        assert!(matches!(&messages[2], Message::Assistant(c) if c.contains("\"search\"")));
        assert!(matches!(&messages[3], Message::User(c) if c.contains("Title: t")));
    }

    #[tokio::test]
    async fn run_appends_parsed_action() {
        let llm = Arc::new(MockLlm::new(
            r#"{"name": "search", "parameters": {"query": "rust"}}"#,
        ));
        let oracle = oracle_with(llm);
        let state = AgentState::new("q", vec![], "m");

        let (state, next) = oracle.run(state).await.unwrap();
        assert_eq!(next, Next::Continue);
        assert_eq!(state.intermediate_steps.len(), 1);
        assert_eq!(state.intermediate_steps[0].tool_name, "search");
    }

    #[tokio::test]
    async fn run_propagates_malformed_reply() {
        let llm = Arc::new(MockLlm::new("no json here"));
        let oracle = oracle_with(llm);
        let state = AgentState::new("q", vec![], "m");

        let err = oracle.run(state).await.unwrap_err();
        assert!(matches!(err, AgentError::MalformedAction(_)), "{err}");
    }
}
