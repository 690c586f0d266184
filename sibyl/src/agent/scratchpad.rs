//! Scratchpad: replay of prior tool calls as synthetic conversation turns.
//!
//! Each completed action becomes an assistant message (the selection as JSON)
//! followed by a user message (the tool's output), so the next oracle call
//! sees its own earlier decisions as conversation.

use crate::message::Message;

use super::AgentAction;

/// One completed action as its synthetic assistant/user message pair.
pub fn action_to_messages(action: &AgentAction) -> [Message; 2] {
    [
        Message::assistant(action.to_invocation_json()),
        Message::user(action.tool_output.clone().unwrap_or_default()),
    ]
}

/// Builds the scratchpad from the accumulated steps.
///
/// Only actions with an output are replayed; the result is exactly 2N
/// messages for N completed actions, in assistant/user alternating order.
pub fn build_scratchpad(steps: &[AgentAction]) -> Vec<Message> {
    steps
        .iter()
        .filter(|a| a.tool_output.is_some())
        .flat_map(|a| action_to_messages(a))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completed(tool: &str, output: &str) -> AgentAction {
        AgentAction {
            tool_name: tool.to_string(),
            tool_input: json!({"query": "q"}),
            tool_output: Some(output.to_string()),
        }
    }

    #[test]
    fn two_messages_per_completed_action_in_order() {
        let steps = vec![completed("search", "first"), completed("search", "second")];
        let pad = build_scratchpad(&steps);
        assert_eq!(pad.len(), 4, "N completed actions produce 2N messages");
        assert!(matches!(&pad[0], Message::Assistant(c) if c.contains("\"search\"")));
        assert!(matches!(&pad[1], Message::User(c) if c == "first"));
        assert!(matches!(&pad[2], Message::Assistant(_)));
        assert!(matches!(&pad[3], Message::User(c) if c == "second"));
    }

    #[test]
    fn actions_without_output_are_skipped() {
        let steps = vec![
            completed("search", "done"),
            AgentAction {
                tool_name: "search".to_string(),
                tool_input: json!({"query": "pending"}),
                tool_output: None,
            },
        ];
        assert_eq!(build_scratchpad(&steps).len(), 2);
    }

    #[test]
    fn empty_steps_produce_empty_scratchpad() {
        assert!(build_scratchpad(&[]).is_empty());
    }
}
