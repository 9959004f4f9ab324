//! Indexed binary min-heap over the vertices of one graph.

use crate::types::{EdgeId, GraphError, GraphResult, VertexId};

/// A heap entry: a vertex and its current priority.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub priority: f64,
}

/// A min-heap over a fixed set of vertices with decrease-key.
///
/// Every vertex of the graph starts in the heap at priority +∞ except the
/// start vertex, which starts at 0. A position map gives O(1) lookup of a
/// vertex's slot. Alongside each priority the heap records the edge that
/// produced it; that record survives extraction so the caller can read the
/// winning edges once the heap is drained. At equal priority an entry with a
/// recorded edge comes before one without, so a vertex reached at +∞ still
/// leaves the heap ahead of vertices nothing has reached yet.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    data: Vec<HeapEntry>,
    /// vertex index -> slot in `data`, `None` once extracted.
    positions: Vec<Option<usize>>,
    /// vertex index -> edge responsible for the current priority.
    best_edges: Vec<Option<EdgeId>>,
}

impl IndexedMinHeap {
    /// Create a heap holding vertices `0..vertex_count`, with `start` at priority 0.
    pub fn new(vertex_count: usize, start: VertexId) -> GraphResult<Self> {
        if start.index() >= vertex_count {
            return Err(GraphError::invalid(format!(
                "start vertex {} outside a heap of {} vertices",
                start.index(),
                vertex_count
            )));
        }

        let data = (0..vertex_count)
            .map(|i| HeapEntry {
                vertex: VertexId(i),
                priority: f64::INFINITY,
            })
            .collect();
        let positions = (0..vertex_count).map(Some).collect();

        let mut heap = Self {
            data,
            positions,
            best_edges: vec![None; vertex_count],
        };
        heap.data[start.index()].priority = 0.0;
        heap.sift_up(start.index());
        Ok(heap)
    }

    /// Number of vertices not yet extracted.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The minimum entry, without removing it.
    pub fn peek(&self) -> Option<HeapEntry> {
        self.data.first().copied()
    }

    /// Current priority of `vertex`, or `None` once it has been extracted.
    pub fn priority(&self, vertex: VertexId) -> Option<f64> {
        self.slot(vertex).map(|pos| self.data[pos].priority)
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.slot(vertex).is_some()
    }

    /// The edge that set `vertex`'s current priority, if any.
    pub fn best_edge(&self, vertex: VertexId) -> Option<EdgeId> {
        self.best_edges.get(vertex.index()).copied().flatten()
    }

    /// All recorded best edges, in vertex order.
    pub fn tree_edges(&self) -> Vec<EdgeId> {
        self.best_edges.iter().flatten().copied().collect()
    }

    /// Remove and return the entry with the lowest priority.
    pub fn extract_min(&mut self) -> GraphResult<HeapEntry> {
        if self.data.is_empty() {
            return Err(GraphError::EmptyHeap);
        }

        let last = self.data.len() - 1;
        self.swap_entries(0, last);

        let entry = self.data.pop().ok_or(GraphError::EmptyHeap)?;
        self.positions[entry.vertex.index()] = None;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(entry)
    }

    /// Lower `vertex`'s priority and record `edge` as responsible for it.
    pub fn decrease_key(
        &mut self,
        vertex: VertexId,
        priority: f64,
        edge: EdgeId,
    ) -> GraphResult<()> {
        let pos = self.slot(vertex).ok_or_else(|| {
            GraphError::invalid(format!("vertex {} is not in the heap", vertex.index()))
        })?;

        let current = self.data[pos].priority;
        if priority.is_nan() || priority > current {
            return Err(GraphError::invalid(format!(
                "priority of vertex {} can only decrease ({} -> {})",
                vertex.index(),
                current,
                priority
            )));
        }

        log::trace!(
            "decrease key of vertex {}: {} -> {} via edge {}",
            vertex.index(),
            current,
            priority,
            edge.index()
        );
        self.data[pos].priority = priority;
        self.best_edges[vertex.index()] = Some(edge);
        self.sift_up(pos);
        Ok(())
    }

    fn slot(&self, vertex: VertexId) -> Option<usize> {
        self.positions.get(vertex.index()).copied().flatten()
    }

    /// Move the entry at `idx` toward the root while its parent is larger.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.precedes(idx, parent) {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `idx` toward the leaves while a child is smaller.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.precedes(left, smallest) {
                smallest = left;
            }
            if right < len && self.precedes(right, smallest) {
                smallest = right;
            }

            if smallest != idx {
                self.swap_entries(idx, smallest);
                idx = smallest;
            } else {
                break;
            }
        }
    }

    /// Whether the entry in slot `a` belongs above the one in slot `b`.
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (x, y) = (&self.data[a], &self.data[b]);
        if x.priority != y.priority {
            return x.priority < y.priority;
        }
        self.best_edge(x.vertex).is_some() && self.best_edge(y.vertex).is_none()
    }

    /// Swap two entries and update the position map.
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].vertex.index()] = Some(a);
        self.positions[self.data[b].vertex.index()] = Some(b);
    }

    /// Whether every parent is no larger than its children.
    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].priority <= self.data[i].priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_vertex_is_root() {
        let heap = IndexedMinHeap::new(5, VertexId(3)).unwrap();
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.peek().unwrap().vertex, VertexId(3));
        assert_eq!(heap.priority(VertexId(3)), Some(0.0));
        assert_eq!(heap.priority(VertexId(0)), Some(f64::INFINITY));
        assert!(heap.is_heap_ordered());
    }

    #[test]
    fn test_start_out_of_range() {
        assert!(IndexedMinHeap::new(2, VertexId(2)).is_err());
    }

    #[test]
    fn test_decrease_key_sifts_toward_root() {
        let mut heap = IndexedMinHeap::new(7, VertexId(0)).unwrap();
        heap.extract_min().unwrap();

        heap.decrease_key(VertexId(6), 4.0, EdgeId(0)).unwrap();
        assert_eq!(heap.peek().unwrap().vertex, VertexId(6));
        heap.decrease_key(VertexId(2), 9.0, EdgeId(1)).unwrap();
        heap.decrease_key(VertexId(5), 1.0, EdgeId(2)).unwrap();
        assert_eq!(heap.peek().unwrap().vertex, VertexId(5));
        assert!(heap.is_heap_ordered());
        assert_eq!(heap.best_edge(VertexId(2)), Some(EdgeId(1)));
    }

    #[test]
    fn test_extract_in_priority_order() {
        let mut heap = IndexedMinHeap::new(5, VertexId(0)).unwrap();
        heap.decrease_key(VertexId(1), 3.0, EdgeId(0)).unwrap();
        heap.decrease_key(VertexId(2), 1.0, EdgeId(1)).unwrap();
        heap.decrease_key(VertexId(3), 2.0, EdgeId(2)).unwrap();

        let order: Vec<f64> = std::iter::from_fn(|| heap.extract_min().ok())
            .map(|e| e.priority)
            .collect();
        assert_eq!(order, vec![0.0, 1.0, 2.0, 3.0, f64::INFINITY]);
        assert!(heap.is_empty());
        assert_eq!(heap.extract_min(), Err(GraphError::EmptyHeap));
    }

    #[test]
    fn test_extracted_vertex_is_absent() {
        let mut heap = IndexedMinHeap::new(3, VertexId(1)).unwrap();
        let top = heap.extract_min().unwrap();
        assert_eq!(top.vertex, VertexId(1));
        assert!(!heap.contains(VertexId(1)));
        assert_eq!(heap.priority(VertexId(1)), None);
        assert!(heap.decrease_key(VertexId(1), 0.0, EdgeId(0)).is_err());
    }

    #[test]
    fn test_increase_rejected() {
        let mut heap = IndexedMinHeap::new(3, VertexId(0)).unwrap();
        heap.decrease_key(VertexId(1), 2.0, EdgeId(0)).unwrap();
        assert!(heap.decrease_key(VertexId(1), 5.0, EdgeId(1)).is_err());
        assert!(heap.decrease_key(VertexId(1), f64::NAN, EdgeId(1)).is_err());
        assert_eq!(heap.priority(VertexId(1)), Some(2.0));
        assert_eq!(heap.best_edge(VertexId(1)), Some(EdgeId(0)));
    }

    #[test]
    fn test_best_edges_survive_extraction() {
        let mut heap = IndexedMinHeap::new(3, VertexId(0)).unwrap();
        heap.decrease_key(VertexId(2), 1.0, EdgeId(4)).unwrap();
        heap.decrease_key(VertexId(1), 1.0, EdgeId(3)).unwrap();
        while !heap.is_empty() {
            heap.extract_min().unwrap();
        }
        assert_eq!(heap.tree_edges(), vec![EdgeId(3), EdgeId(4)]);
    }

    #[test]
    fn test_reached_entry_wins_tie() {
        let mut heap = IndexedMinHeap::new(4, VertexId(0)).unwrap();
        heap.extract_min().unwrap();
        heap.decrease_key(VertexId(3), f64::INFINITY, EdgeId(0)).unwrap();
        assert_eq!(heap.peek().unwrap().vertex, VertexId(3));
        assert!(heap.is_heap_ordered());
    }
}
