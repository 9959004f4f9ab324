//! In-memory graph operations.

pub mod builder;
pub mod keyed_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use keyed_graph::Graph;
pub use traversal::{connected_set, has_cycle, is_two_colourable, shortest_path};
