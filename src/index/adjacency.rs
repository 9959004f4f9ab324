//! Adjacency index: maps each vertex to the neighbors it can reach directly.

use crate::types::VertexId;

/// Per-vertex neighbor lists, in edge-connection order.
///
/// Updated incrementally as edges are connected; never rebuilt from the
/// edge list. Traversal reads this instead of rescanning edges.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<VertexId>>,
}

impl AdjacencyIndex {
    /// Create a new, empty adjacency index.
    pub fn new() -> Self {
        Self {
            neighbors: Vec::new(),
        }
    }

    /// Register a vertex with no neighbors. Returns its slot.
    pub fn add_vertex(&mut self) -> VertexId {
        self.neighbors.push(Vec::new());
        VertexId(self.neighbors.len() - 1)
    }

    /// Record that `to` is reachable from `from`.
    pub fn link(&mut self, from: VertexId, to: VertexId) {
        if let Some(list) = self.neighbors.get_mut(from.0) {
            list.push(to);
        }
    }

    /// Record a link usable in both directions.
    pub fn link_both(&mut self, a: VertexId, b: VertexId) {
        self.link(a, b);
        self.link(b, a);
    }

    /// Neighbors of `vertex`, or `None` if it has no entry.
    pub fn neighbors(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.neighbors.get(vertex.0).map(|v| v.as_slice())
    }

    /// Whether `vertex` has an entry.
    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex.0 < self.neighbors.len()
    }

    /// Number of vertices with an entry.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.neighbors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_directions() {
        let mut idx = AdjacencyIndex::new();
        let a = idx.add_vertex();
        let b = idx.add_vertex();
        let c = idx.add_vertex();

        idx.link(a, b);
        idx.link_both(b, c);

        assert_eq!(idx.neighbors(a), Some(&[b][..]));
        assert_eq!(idx.neighbors(b), Some(&[c][..]));
        assert_eq!(idx.neighbors(c), Some(&[b][..]));
        assert_eq!(idx.neighbors(VertexId(9)), None);
        assert_eq!(idx.len(), 3);
        assert!(idx.contains(c));

        idx.clear();
        assert!(idx.is_empty());
        assert!(!idx.contains(a));
    }
}
