//! Per-turn runner: build the oracle/search/final_answer graph and run it.

use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::search::TavilyClient;
use crate::tools::{FinalAnswerTool, SearchTool, ToolRegistry, TOOL_FINAL_ANSWER, TOOL_SEARCH};

use super::{AgentOutput, AgentState, OracleNode, ToolNode};

/// Node id of the oracle step.
pub const NODE_ORACLE: &str = "oracle";

/// The agent's fixed two-entry tool table.
pub fn build_tool_registry(search: TavilyClient) -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(SearchTool::new(search)));
    registry.register(Arc::new(FinalAnswerTool));
    Arc::new(registry)
}

/// Routes after the oracle: the latest selected tool name, or final_answer
/// when there is no recognizable latest selection.
pub fn route_after_oracle(state: &AgentState) -> String {
    match state.intermediate_steps.last() {
        Some(action) => action.tool_name.clone(),
        None => {
            tracing::debug!("router found no selection, defaulting to final_answer");
            TOOL_FINAL_ANSWER.to_string()
        }
    }
}

/// Builds the turn graph:
///
/// ```text
/// START -> oracle -(tool name)-> search -> oracle
///                             \-> final_answer -> END
/// ```
///
/// The oracle's conditional edge has no path map: the model-chosen tool name
/// is the next node id, so an unrecognized name fails the run.
pub fn build_turn_graph(
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
) -> Result<CompiledStateGraph<AgentState>, AgentError> {
    let mut graph = StateGraph::<AgentState>::new();
    graph.add_node(NODE_ORACLE, Arc::new(OracleNode::new(llm, tools.clone())));
    graph.add_node(TOOL_SEARCH, Arc::new(ToolNode::new(TOOL_SEARCH, tools.clone())));
    graph.add_node(
        TOOL_FINAL_ANSWER,
        Arc::new(ToolNode::new(TOOL_FINAL_ANSWER, tools)),
    );
    graph.add_edge(START, NODE_ORACLE);
    graph.add_conditional_edges(NODE_ORACLE, Arc::new(route_after_oracle), None);
    graph.add_edge(TOOL_SEARCH, NODE_ORACLE);
    graph.add_edge(TOOL_FINAL_ANSWER, END);
    graph
        .compile()
        .map_err(|e| AgentError::ExecutionFailed(format!("graph compile: {e}")))
}

/// Runs one end-to-end turn for a single user message.
///
/// The graph is rebuilt per turn; nothing is shared across turns beyond the
/// tool table and the LLM client handed in.
pub async fn run_turn(
    llm: Arc<dyn LlmClient>,
    tools: Arc<ToolRegistry>,
    input: impl Into<String>,
    chat_history: Vec<Message>,
    model: impl Into<String>,
) -> Result<AgentOutput, AgentError> {
    let graph = build_turn_graph(llm, tools)?;
    let state = AgentState::new(input, chat_history, model);
    let state = graph.invoke(state).await?;
    state
        .output
        .ok_or_else(|| AgentError::ExecutionFailed("turn ended without a final answer".to_string()))
}
