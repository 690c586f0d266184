//! Tool node: execute the tool the oracle selected and record its output.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::tools::{ToolRegistry, TOOL_FINAL_ANSWER};

use super::{AgentOutput, AgentState};

/// Executes the latest selected tool.
///
/// One instance is registered per tool node id ("search", "final_answer");
/// both look the tool up in the same fixed table. The latest action is
/// mutated once to attach the tool's output. For final_answer the output is
/// also parsed into [`AgentOutput`] and stored as the turn's terminal result.
pub struct ToolNode {
    id: String,
    tools: Arc<ToolRegistry>,
}

impl ToolNode {
    pub fn new(id: impl Into<String>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            id: id.into(),
            tools,
        }
    }
}

#[async_trait]
impl Node<AgentState> for ToolNode {
    fn id(&self) -> &str {
        &self.id
    }

    async fn run(&self, state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let mut state = state;
        let action = state
            .intermediate_steps
            .last_mut()
            .ok_or_else(|| AgentError::ExecutionFailed("no pending tool selection".to_string()))?;
        let tool_name = action.tool_name.clone();
        let tool_args = action.tool_input.clone();
        tracing::debug!(tool = %tool_name, input = %tool_args, "running tool");

        let tool = self
            .tools
            .get(&tool_name)
            .ok_or_else(|| AgentError::ExecutionFailed(format!("unknown tool: {tool_name}")))?;
        let output = tool.call(tool_args).await?;
        action.tool_output = Some(output.clone());

        if tool_name == TOOL_FINAL_ANSWER {
            let output: AgentOutput = serde_json::from_str(&output).map_err(|e| {
                AgentError::ExecutionFailed(format!("final_answer output: {e}"))
            })?;
            state.output = Some(output);
        }
        Ok((state, Next::Continue))
    }
}
