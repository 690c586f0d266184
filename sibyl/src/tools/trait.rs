//! Tool trait and spec shared by the two agent tools.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AgentError;

/// Tool specification: name, description, and JSON schema for arguments.
///
/// Serialized into the oracle's system prompt so the model knows the
/// selectable tools and their argument shapes.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: serde_json::Value,
}

/// A single tool the model can select.
///
/// The tool receives the model-supplied arguments as a JSON value and returns
/// its output as text; the agent attaches that text to the action record.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name; doubles as the graph node id that executes it.
    fn name(&self) -> &str;

    /// Specification rendered into the system prompt.
    fn spec(&self) -> ToolSpec;

    /// Executes the tool with the given arguments.
    async fn call(&self, args: serde_json::Value) -> Result<String, AgentError>;
}
