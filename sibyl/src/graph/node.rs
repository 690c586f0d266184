//! Graph node trait: one step in a StateGraph.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// The run loop uses the returned [`Next`] to choose the following node
/// (Continue = outgoing edge, Node(id) = jump, End = stop), unless the node
/// has conditional edges, in which case the router decides from state.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"oracle"`, `"search"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}
