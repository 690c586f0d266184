//! The oracle agent: state, tool-selection parsing, scratchpad, graph nodes,
//! and the per-turn runner.
//!
//! # Main types
//!
//! - [`AgentState`]: one turn's state (input, chat history, accumulated
//!   actions, terminal output, selected model).
//! - [`AgentAction`]: one tool selection, later completed with its output.
//! - [`OracleNode`]: asks the model to choose the next tool.
//! - [`ToolNode`]: executes the chosen tool.
//! - [`run_turn`]: builds the oracle/search/final_answer graph and runs one
//!   user message to a final answer.

mod action;
mod oracle_node;
mod prompt;
mod runner;
mod scratchpad;
mod state;
mod tool_node;

pub use action::AgentAction;
pub use oracle_node::OracleNode;
pub use prompt::{
    continue_reminder, render_system_prompt, FORCE_FINAL_ANSWER, ORACLE_SYSTEM_PROMPT,
};
pub use runner::{build_tool_registry, build_turn_graph, route_after_oracle, run_turn, NODE_ORACLE};
pub use scratchpad::{action_to_messages, build_scratchpad};
pub use state::{AgentOutput, AgentState};
pub use tool_node::ToolNode;
