//! State graph: nodes plus explicit and conditional edges, compile and invoke.
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit, and `add_conditional_edges` to route
//! to the next node based on state. Then `compile` to get a
//! [`CompiledStateGraph`] and run it with `invoke`.

mod compile_error;
mod compiled;
mod conditional;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, DEFAULT_STEP_LIMIT, END, START};
