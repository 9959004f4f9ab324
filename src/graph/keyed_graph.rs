//! Core graph structure: keyed vertices and edges over an adjacency index.

use std::collections::HashMap;

use crate::engine::prim;
use crate::index::AdjacencyIndex;
use crate::types::{
    Direction, Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId, VertexKey, Weight,
};

use super::traversal;

/// An in-memory graph over user keys.
///
/// Whether the graph is weighted and whether it is directed is fixed at
/// construction; every connect call must agree with it. Vertices and edges
/// live in flat arenas and refer to each other by position.
#[derive(Debug)]
pub struct Graph<K> {
    weighted: bool,
    directed: bool,
    /// All vertices, indexed by `VertexId`.
    vertices: Vec<Vertex<K>>,
    /// Key -> arena position.
    lookup: HashMap<K, VertexId>,
    /// All edges in creation order, indexed by `EdgeId`.
    edges: Vec<Edge>,
    /// Neighbor lists used by traversal.
    adjacency: AdjacencyIndex,
}

impl<K: VertexKey> Graph<K> {
    /// Create a new empty graph with a fixed classification.
    pub fn new(weighted: bool, directed: bool) -> Self {
        Self {
            weighted,
            directed,
            vertices: Vec::new(),
            lookup: HashMap::new(),
            edges: Vec::new(),
            adjacency: AdjacencyIndex::new(),
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.lookup.contains_key(key)
    }

    /// Arena position of `key`, if present.
    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.lookup.get(key).copied()
    }

    pub fn vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.vertex_id(key).and_then(|id| self.vertex_by_id(id))
    }

    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<K>> {
        self.vertices.get(id.index())
    }

    /// The key stored at `id`.
    pub fn key_of(&self, id: VertexId) -> Option<&K> {
        self.vertex_by_id(id).map(Vertex::key)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex<K>] {
        &self.vertices
    }

    /// All edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// The adjacency index driving traversal.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Add a vertex under `key`.
    pub fn add_vertex(&mut self, key: K) -> GraphResult<VertexId> {
        if self.lookup.contains_key(&key) {
            return Err(GraphError::DuplicateVertex(format!("{key:?}")));
        }

        let id = self.adjacency.add_vertex();
        debug_assert_eq!(id.index(), self.vertices.len());
        log::debug!("added vertex {:?} at {}", key, id.index());

        self.lookup.insert(key.clone(), id);
        self.vertices.push(Vertex::new(id, key));
        Ok(id)
    }

    /// Connect two vertices of an unweighted, undirected graph.
    pub fn connect(&mut self, a: &K, b: &K) -> GraphResult<EdgeId> {
        if self.weighted {
            return Err(GraphError::invalid(
                "the graph is weighted and needs weight information",
            ));
        }
        if self.directed {
            return Err(GraphError::invalid(
                "the graph is directed and needs direction information",
            ));
        }
        self.link(a, b, Direction::Undirected, Weight::none())
    }

    /// Connect two vertices of a weighted, undirected graph.
    pub fn connect_weighted(
        &mut self,
        a: &K,
        b: &K,
        weight: impl Into<Weight>,
    ) -> GraphResult<EdgeId> {
        let weight = weight.into();
        self.check_weight(&weight)?;
        if self.directed {
            return Err(GraphError::invalid(
                "the graph is directed and needs direction information",
            ));
        }
        self.link(a, b, Direction::Undirected, weight)
    }

    /// Connect two vertices of an unweighted, directed graph.
    pub fn connect_directed(&mut self, a: &K, b: &K, direction: Direction) -> GraphResult<EdgeId> {
        if self.weighted {
            return Err(GraphError::invalid(
                "the graph is weighted and needs weight information",
            ));
        }
        self.check_direction(direction)?;
        self.link(a, b, direction, Weight::none())
    }

    /// Connect two vertices of a weighted, directed graph.
    pub fn connect_directed_weighted(
        &mut self,
        a: &K,
        b: &K,
        direction: Direction,
        weight: impl Into<Weight>,
    ) -> GraphResult<EdgeId> {
        let weight = weight.into();
        self.check_weight(&weight)?;
        self.check_direction(direction)?;
        self.link(a, b, direction, weight)
    }

    fn check_weight(&self, weight: &Weight) -> GraphResult<()> {
        match (self.weighted, weight.is_none()) {
            (true, true) => Err(GraphError::invalid(
                "the graph is weighted and needs weight information",
            )),
            (false, false) => Err(GraphError::invalid(
                "can't add a weighted edge to an unweighted graph",
            )),
            // Deferred weights are checked when an algorithm reads them.
            _ if weight.is_resolved() && weight.value().is_some_and(f64::is_nan) => {
                Err(GraphError::invalid("edge weight is NaN"))
            }
            _ => Ok(()),
        }
    }

    fn check_direction(&self, direction: Direction) -> GraphResult<()> {
        match (self.directed, direction.is_directed()) {
            (true, false) => Err(GraphError::invalid(
                "the graph is directed and needs direction information",
            )),
            (false, true) => Err(GraphError::invalid(
                "can't add a directed edge to an undirected graph",
            )),
            _ => Ok(()),
        }
    }

    /// Validate, then write the edge. Nothing is written unless every check passes.
    fn link(&mut self, a: &K, b: &K, direction: Direction, weight: Weight) -> GraphResult<EdgeId> {
        let left = self.resolve(a)?;
        let right = self.resolve(b)?;

        if left == right {
            return Err(GraphError::invalid(format!("self-loop on vertex {a:?}")));
        }

        let candidate = Edge::new(left, right, direction, weight);
        for &existing in self.vertices[left.index()].incident_edges() {
            if self.edges[existing.index()].same_link(&candidate)? {
                return Err(GraphError::invalid(format!(
                    "there's already an edge joining {a:?} and {b:?} with that direction"
                )));
            }
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(candidate);

        let edge = &self.edges[id.index()];
        self.vertices[left.index()].attach(id, edge)?;
        self.vertices[right.index()].attach(id, edge)?;

        if edge.is_directed() {
            let (source, target) = edge.endpoints();
            self.adjacency.link(source, target);
        } else {
            self.adjacency.link_both(left, right);
        }

        log::debug!("connected {:?} and {:?} ({})", a, b, direction);
        Ok(id)
    }

    /// Arena position of `key`, or `VertexNotFound`.
    pub(crate) fn resolve(&self, key: &K) -> GraphResult<VertexId> {
        self.vertex_id(key)
            .ok_or_else(|| GraphError::vertex_not_found(key))
    }

    /// Render a vertex for error messages.
    pub(crate) fn describe(&self, id: VertexId) -> String {
        match self.key_of(id) {
            Some(key) => format!("{key:?}"),
            None => format!("#{}", id.index()),
        }
    }

    /// Number of edges incident to `key`.
    pub fn degree(&self, key: &K) -> GraphResult<usize> {
        let id = self.resolve(key)?;
        Ok(self.vertices[id.index()].degree())
    }

    /// Number of arcs leaving `key`. Equals the degree in undirected graphs.
    pub fn out_degree(&self, key: &K) -> GraphResult<usize> {
        let id = self.resolve(key)?;
        Ok(self.directed_degree(id, |(source, _)| source == id))
    }

    /// Number of arcs entering `key`. Equals the degree in undirected graphs.
    pub fn in_degree(&self, key: &K) -> GraphResult<usize> {
        let id = self.resolve(key)?;
        Ok(self.directed_degree(id, |(_, target)| target == id))
    }

    fn directed_degree<F>(&self, id: VertexId, counts: F) -> usize
    where
        F: Fn((VertexId, VertexId)) -> bool,
    {
        let vertex = &self.vertices[id.index()];
        if !self.directed {
            return vertex.degree();
        }
        vertex
            .incident_edges()
            .iter()
            .filter_map(|&e| self.edge(e))
            .filter(|edge| counts(edge.endpoints()))
            .count()
    }

    /// Keys directly reachable from `key`, in connection order.
    pub fn neighbors(&self, key: &K) -> GraphResult<Vec<&K>> {
        let id = self.resolve(key)?;
        let neighbors = self.adjacency.neighbors(id).ok_or_else(|| {
            GraphError::integrity(format!("vertex {key:?} has no adjacency entry"))
        })?;
        Ok(neighbors.iter().filter_map(|&n| self.key_of(n)).collect())
    }

    /// Edges incident to `key`, in connection order.
    pub fn incident_edges(&self, key: &K) -> GraphResult<Vec<&Edge>> {
        let id = self.resolve(key)?;
        Ok(self.vertices[id.index()]
            .incident_edges()
            .iter()
            .filter_map(|&e| self.edge(e))
            .collect())
    }

    /// Sum of all edge weights. Zero for unweighted graphs.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().filter_map(|e| e.weight().value()).sum()
    }

    /// Whether `b` is reachable from `a`.
    pub fn are_connected(&self, a: &K, b: &K) -> GraphResult<bool> {
        let from = self.resolve(a)?;
        let to = self.resolve(b)?;
        Ok(traversal::connected_set(self, from)?.contains(&to))
    }

    /// Keys reachable from `key` (including `key`), in insertion order.
    pub fn connected_component(&self, key: &K) -> GraphResult<Vec<&K>> {
        let start = self.resolve(key)?;
        let reached = traversal::connected_set(self, start)?;
        Ok(self
            .vertices
            .iter()
            .filter(|v| reached.contains(&v.id()))
            .map(Vertex::key)
            .collect())
    }

    /// Whether a search from every vertex reaches all vertices.
    ///
    /// Only implemented for undirected graphs. An empty graph is connected.
    pub fn is_connected(&self) -> GraphResult<bool> {
        if self.directed {
            return Err(GraphError::NotSupported(
                "connectivity of directed graphs".to_string(),
            ));
        }
        for vertex in &self.vertices {
            if traversal::connected_set(self, vertex.id())?.len() != self.order() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether every vertex has the same degree.
    ///
    /// In a directed graph every vertex must have in-degree equal to its
    /// out-degree, and all vertices must share that value.
    pub fn is_regular(&self) -> GraphResult<bool> {
        let first = self
            .vertices
            .first()
            .ok_or_else(|| GraphError::invalid("regularity of an empty graph"))?;

        if !self.directed {
            let degree = first.degree();
            return Ok(self.vertices.iter().all(|v| v.degree() == degree));
        }

        let expected = self.directed_degree(first.id(), |(source, _)| source == first.id());
        Ok(self.vertices.iter().all(|v| {
            let id = v.id();
            self.directed_degree(id, |(source, _)| source == id) == expected
                && self.directed_degree(id, |(_, target)| target == id) == expected
        }))
    }

    /// Whether every pair of distinct vertices is joined (every ordered pair, if directed).
    pub fn is_complete(&self) -> bool {
        let n = self.order();
        let pairs = if self.directed {
            n * n.saturating_sub(1)
        } else {
            n * n.saturating_sub(1) / 2
        };
        // Self-loops and parallel edges are rejected on connect, so the count decides.
        self.size() == pairs
    }

    /// Whether the graph contains a cycle.
    ///
    /// Only implemented for undirected graphs.
    pub fn is_cyclic(&self) -> GraphResult<bool> {
        if self.directed {
            return Err(GraphError::NotSupported(
                "cycle detection on directed graphs".to_string(),
            ));
        }
        traversal::has_cycle(self)
    }

    /// Whether the vertices split into two sides with every edge crossing between them.
    ///
    /// Only implemented for undirected graphs. An empty graph is bipartite.
    pub fn is_bipartite(&self) -> GraphResult<bool> {
        if self.directed {
            return Err(GraphError::NotSupported(
                "bipartiteness of directed graphs".to_string(),
            ));
        }
        traversal::is_two_colourable(self)
    }

    /// Fewest-hop path from `a` to `b`, both inclusive.
    ///
    /// Only for unweighted, undirected graphs.
    pub fn shortest_path(&self, a: &K, b: &K) -> GraphResult<Vec<&K>> {
        if self.weighted || self.directed {
            return Err(GraphError::NotSupported(
                "shortest paths on weighted or directed graphs".to_string(),
            ));
        }
        let from = self.resolve(a)?;
        let to = self.resolve(b)?;

        let path = traversal::shortest_path(self, from, to)?;
        log::debug!("shortest path {:?} -> {:?}: {} hops", a, b, path.len() - 1);

        path.into_iter()
            .map(|id| {
                self.key_of(id).ok_or_else(|| {
                    GraphError::integrity(format!("path visits unknown vertex {}", id.index()))
                })
            })
            .collect()
    }

    /// Build a minimum spanning tree as a new, independent graph.
    pub fn minimum_spanning_tree(&self) -> GraphResult<Graph<K>> {
        prim::minimum_spanning_tree(self)
    }
}
