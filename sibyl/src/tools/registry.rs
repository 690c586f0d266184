//! Fixed tool table: lookup by name, specs in registration order.

use std::sync::Arc;

use super::{Tool, ToolSpec};

/// The agent's tool table.
///
/// Registration order is preserved so the system prompt lists tools in a
/// stable order (search before final_answer).
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool; a tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> &mut Self {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(tool);
        self
    }

    /// Looks a tool up by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    /// Specs of all registered tools, in registration order.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    /// Spec of a single tool by name.
    pub fn spec_of(&self, name: &str) -> Option<ToolSpec> {
        self.get(name).map(|t| t.spec())
    }
}
