//! All data types for the keygraph library.

pub mod edge;
pub mod error;
pub mod vertex;
pub mod weight;

pub use edge::{Direction, Edge, EdgeId, VertexId};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;
pub use weight::Weight;

/// Cost of an edge in an unweighted graph when an algorithm needs one.
pub const UNIT_COST: f64 = 1.0;

/// Capabilities a user key needs to identify a vertex.
///
/// Blanket-implemented for every `Eq + Hash + Clone + Debug` type.
pub trait VertexKey: Eq + std::hash::Hash + Clone + std::fmt::Debug {}

impl<T: Eq + std::hash::Hash + Clone + std::fmt::Debug> VertexKey for T {}
