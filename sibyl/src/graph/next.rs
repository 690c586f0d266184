//! Next-step result from a graph node: continue the chain, jump to a node, or end.

/// Next step after running a node.
///
/// - **Continue**: follow the node's outgoing edge (or END when it has none).
/// - **Node(id)**: run the node with the given id next.
/// - **End**: stop; the current state is the final result.
///
/// When the node has conditional edges, the router decides instead and the
/// returned `Next` is ignored.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Next {
    /// Follow the node's outgoing edge; equivalent to End when there is none.
    Continue,
    /// Run the node with the given id next.
    Node(String),
    /// Stop and return the current state.
    End,
}
