//! Fluent API for building Graph instances.

use crate::types::{Direction, GraphResult, VertexKey, Weight};

use super::Graph;

enum Step<K> {
    Vertex(K),
    Edge {
        a: K,
        b: K,
        direction: Option<Direction>,
        weight: Option<Weight>,
    },
}

/// Fluent builder for constructing a Graph.
///
/// Steps are recorded as given and replayed through the validated
/// [`Graph`] operations by [`GraphBuilder::build`], which stops at the
/// first failing step.
pub struct GraphBuilder<K> {
    weighted: bool,
    directed: bool,
    steps: Vec<Step<K>>,
}

impl<K: VertexKey> GraphBuilder<K> {
    /// Create a new builder for an unweighted, undirected graph.
    pub fn new() -> Self {
        Self::with_classification(false, false)
    }

    /// Create a new builder with a specific classification.
    pub fn with_classification(weighted: bool, directed: bool) -> Self {
        Self {
            weighted,
            directed,
            steps: Vec::new(),
        }
    }

    /// Make the built graph weighted.
    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    /// Make the built graph directed.
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Add a vertex.
    pub fn vertex(&mut self, key: K) -> &mut Self {
        self.steps.push(Step::Vertex(key));
        self
    }

    /// Add several vertices in order.
    pub fn vertices<I: IntoIterator<Item = K>>(&mut self, keys: I) -> &mut Self {
        self.steps.extend(keys.into_iter().map(Step::Vertex));
        self
    }

    /// Add an unweighted, undirected edge.
    pub fn edge(&mut self, a: K, b: K) -> &mut Self {
        self.push_edge(a, b, None, None)
    }

    /// Add a weighted, undirected edge.
    pub fn weighted_edge(&mut self, a: K, b: K, weight: impl Into<Weight>) -> &mut Self {
        self.push_edge(a, b, None, Some(weight.into()))
    }

    /// Add an unweighted arc from `a` to `b`.
    pub fn directed_edge(&mut self, a: K, b: K) -> &mut Self {
        self.push_edge(a, b, Some(Direction::LeftToRight), None)
    }

    /// Add a weighted arc from `a` to `b`.
    pub fn directed_weighted_edge(&mut self, a: K, b: K, weight: impl Into<Weight>) -> &mut Self {
        self.push_edge(a, b, Some(Direction::LeftToRight), Some(weight.into()))
    }

    fn push_edge(
        &mut self,
        a: K,
        b: K,
        direction: Option<Direction>,
        weight: Option<Weight>,
    ) -> &mut Self {
        self.steps.push(Step::Edge {
            a,
            b,
            direction,
            weight,
        });
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<K>> {
        let mut graph = Graph::new(self.weighted, self.directed);
        for step in self.steps {
            match step {
                Step::Vertex(key) => {
                    graph.add_vertex(key)?;
                }
                Step::Edge {
                    a,
                    b,
                    direction,
                    weight,
                } => {
                    match (direction, weight) {
                        (None, None) => graph.connect(&a, &b)?,
                        (None, Some(w)) => graph.connect_weighted(&a, &b, w)?,
                        (Some(d), None) => graph.connect_directed(&a, &b, d)?,
                        (Some(d), Some(w)) => graph.connect_directed_weighted(&a, &b, d, w)?,
                    };
                }
            }
        }
        Ok(graph)
    }
}

impl<K: VertexKey> Default for GraphBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
