//! # Sibyl
//!
//! A minimal conversational agent with a state-graph control loop. One user
//! message is one **turn**: an oracle step asks the selected model to pick
//! between a web-search tool and a final-answer tool, optionally runs the
//! search, and loops back until the model produces a final natural-language
//! answer with a source URL.
//!
//! ## Design
//!
//! - **Single state type**: [`AgentState`] flows through every node of the
//!   turn graph; nodes return the updated state plus routing.
//! - **Four-state loop**: oracle → (router) → search → oracle, or
//!   oracle → final_answer → end. Built on [`StateGraph`] with a conditional
//!   edge whose routing key is the model-chosen tool name.
//! - **Two fixed tools**: [`SearchTool`] (Tavily) and [`FinalAnswerTool`];
//!   there is no plugin surface.
//! - **Best-effort parsing**: the oracle extracts the first balanced JSON
//!   object from the model's free-text reply; no parsable object fails the
//!   turn.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`].
//! - [`agent`]: [`AgentState`], [`AgentAction`], [`OracleNode`], [`ToolNode`],
//!   [`run_turn`].
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOpenRouter`].
//! - [`search`]: [`TavilyClient`], [`SearchResult`].
//! - [`tools`]: [`Tool`], [`ToolSpec`], [`ToolRegistry`], the two tools.
//! - [`models`]: static model catalog with display names and costs.
//!
//! Key types are re-exported at the crate root:
//! `use sibyl::{run_turn, AgentState, Message, MockLlm};`.

pub mod agent;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod models;
pub mod search;
pub mod tools;

pub use agent::{
    build_tool_registry, build_turn_graph, route_after_oracle, run_turn, AgentAction, AgentOutput,
    AgentState, OracleNode, ToolNode, NODE_ORACLE,
};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, Next, Node, StateGraph, DEFAULT_STEP_LIMIT, END, START,
};
pub use llm::{ChatOpenRouter, LlmClient, LlmResponse, MockLlm};
pub use message::Message;
pub use models::{ModelCost, ModelInfo, DEFAULT_MODEL};
pub use search::{SearchResult, TavilyClient};
pub use tools::{
    FinalAnswerTool, SearchTool, Tool, ToolRegistry, ToolSpec, TOOL_FINAL_ANSWER, TOOL_SEARCH,
};
