//! Vertices: a user key plus the edges incident to it.

use super::edge::{Edge, EdgeId, VertexId};
use super::error::{GraphError, GraphResult};

/// A vertex wrapping a user key.
///
/// Incident edges are stored as positions in the owning graph's edge list.
/// Two vertices are equal iff their keys are equal.
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    id: VertexId,
    key: K,
    incident: Vec<EdgeId>,
}

impl<K> Vertex<K> {
    pub(crate) fn new(id: VertexId, key: K) -> Self {
        Self {
            id,
            key,
            incident: Vec::new(),
        }
    }

    /// The arena position of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The user key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Incident edges in connection order.
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident
    }

    /// Register an edge on this vertex. The edge must touch it.
    pub(crate) fn attach(&mut self, edge_id: EdgeId, edge: &Edge) -> GraphResult<()> {
        if !edge.touches(self.id) {
            return Err(GraphError::integrity(format!(
                "edge {} does not touch vertex {}",
                edge_id.index(),
                self.id.index()
            )));
        }
        self.incident.push(edge_id);
        Ok(())
    }
}

impl<K: PartialEq> PartialEq for Vertex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq> Eq for Vertex<K> {}
