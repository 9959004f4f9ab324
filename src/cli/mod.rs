//! Command-line support for the `kgraph` binary.

pub mod commands;

pub use commands::{build_graph, parse_edge, summarize, EdgeSpec, GraphSpec, GraphSummary};
