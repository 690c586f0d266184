//! Tools the oracle may select: web search and final answer.
//!
//! Each tool has a name, a spec (description + JSON schema, rendered into the
//! system prompt), and the call logic. The agent's table is fixed at two
//! entries; there is no plugin surface.

mod final_answer;
mod registry;
mod search;
mod r#trait;

pub use final_answer::{FinalAnswerTool, TOOL_FINAL_ANSWER};
pub use registry::ToolRegistry;
pub use search::{SearchTool, TOOL_SEARCH};
pub use r#trait::{Tool, ToolSpec};
