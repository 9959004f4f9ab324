//! Index structures for fast lookup, updated incrementally on every mutation.

pub mod adjacency;

pub use adjacency::AdjacencyIndex;
