//! Error types for the keygraph library.

use thiserror::Error;

/// All errors that can occur in the keygraph library.
///
/// Keys are rendered with their `Debug` representation so the error type
/// stays independent of the graph's key type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A vertex with this key is already part of the graph.
    #[error("Vertex {0} is already part of the graph")]
    DuplicateVertex(String),

    /// An operation referenced a key that is not part of the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// The call does not match the graph's classification, or an
    /// algorithm precondition is not met.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// The query is not implemented for this kind of graph.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// No path joins the two vertices.
    #[error("Vertices {from} and {to} are not connected")]
    VerticesNotConnected { from: String, to: String },

    /// Internal consistency violation; indicates a construction bug.
    #[error("Graph integrity fault: {0}")]
    GraphIntegrity(String),

    /// Extraction from a heap with no remaining entries.
    #[error("Heap is empty")]
    EmptyHeap,

    /// Malformed edge description on the command line.
    #[error("Invalid edge spec '{0}': expected A-B or A-B:WEIGHT")]
    InvalidEdgeSpec(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Self::VertexNotFound(format!("{key:?}"))
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }

    pub(crate) fn integrity(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::warn!("graph integrity fault: {reason}");
        Self::GraphIntegrity(reason)
    }
}

/// Convenience result type for keygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
