//! Final answer tool: the terminal step of a turn.

use async_trait::async_trait;
use serde_json::json;

use crate::agent::AgentOutput;
use crate::error::AgentError;

use super::{Tool, ToolSpec};

pub const TOOL_FINAL_ANSWER: &str = "final_answer";

/// Returns the natural-language answer to the user.
///
/// Output is the serialized [`AgentOutput`]; the tool node parses it back and
/// stores it as the turn's terminal output.
pub struct FinalAnswerTool;

#[async_trait]
impl Tool for FinalAnswerTool {
    fn name(&self) -> &str {
        TOOL_FINAL_ANSWER
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_FINAL_ANSWER.to_string(),
            description: Some(
                "Returns a natural language response to the user. `answer` is the \
                 final answer to the user's question with as much context as \
                 possible; `url` is the website it came from (if found)."
                    .to_string(),
            ),
            parameters: json!({
                "type": "object",
                "properties": {
                    "answer": { "type": "string" },
                    "url": { "type": "string" }
                },
                "required": ["answer"]
            }),
        }
    }

    async fn call(&self, args: serde_json::Value) -> Result<String, AgentError> {
        let answer = args
            .get("answer")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AgentError::ExecutionFailed("final_answer: missing answer".to_string())
            })?
            .to_string();
        let url = args
            .get("url")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let output = AgentOutput { answer, url };
        serde_json::to_string(&output)
            .map_err(|e| AgentError::ExecutionFailed(format!("final_answer: {e}")))
    }
}
