//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes and the routing map derived
//! from explicit and conditional edges at compile time.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::error::AgentError;

use super::state_graph::END;
use super::{Next, NextEntry, Node};

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()`. Runs from the first node; after each
/// node the conditional router (when present) picks the next node from state,
/// otherwise the node's returned `Next` and the unconditional edge apply.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (target of the START edge).
    pub(super) first_node_id: String,
    /// Map from node id to how to get the next node.
    pub(super) next_map: HashMap<String, NextEntry<S>>,
    /// Cap on node executions per invoke.
    pub(super) step_limit: usize,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs the graph with the given state and returns the final state.
    ///
    /// - `Next::Continue`: follow the node's outgoing edge, or end if none.
    /// - `Next::Node(id)`: run the node with that id next.
    /// - `Next::End`: stop and return the current state.
    ///
    /// Conditional routers take precedence over the node's `Next`. Routing to
    /// an id that is not a registered node (and not END) fails the run, as
    /// does exceeding the step limit.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        if !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        let mut state = state;
        let mut current_id = self.first_node_id.clone();
        let mut steps = 0usize;
        loop {
            steps += 1;
            if steps > self.step_limit {
                return Err(AgentError::ExecutionFailed(format!(
                    "step limit {} exceeded at node {current_id}",
                    self.step_limit
                )));
            }
            let node = self
                .nodes
                .get(&current_id)
                .ok_or_else(|| AgentError::ExecutionFailed(format!("node not found: {current_id}")))?
                .clone();
            tracing::debug!(node = %current_id, "running node");
            let (new_state, next) = node.run(state).await?;
            state = new_state;

            let next_id = if let Some(NextEntry::Conditional(router)) = self.next_map.get(&current_id)
            {
                let target = router.resolve_next(&state);
                tracing::debug!(from = %current_id, to = %target, "conditional routing");
                Some(target)
            } else {
                match next {
                    Next::End => None,
                    Next::Node(id) => Some(id),
                    Next::Continue => self.next_map.get(&current_id).and_then(|e| match e {
                        NextEntry::Unconditional(id) => Some(id.clone()),
                        NextEntry::Conditional(_) => None,
                    }),
                }
            };

            match next_id {
                None => return Ok(state),
                Some(id) if id == END => return Ok(state),
                Some(id) => current_id = id,
            }
        }
    }
}
