//! keygraph: in-memory graphs over arbitrary keys.
//!
//! Vertices are identified by any `Eq + Hash + Clone + Debug` key. A graph is
//! weighted or not, directed or not, and every edge must agree with that
//! classification. On top of the model sit breadth-first connectivity and
//! shortest-path queries, and Prim's minimum spanning tree.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{minimum_spanning_tree, HeapEntry, IndexedMinHeap};
pub use graph::{Graph, GraphBuilder};
pub use index::AdjacencyIndex;
pub use types::{
    Direction, Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId, VertexKey, Weight,
    UNIT_COST,
};
