//! Prim's minimum spanning tree.

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, VertexId, VertexKey, Weight, UNIT_COST};

use super::heap::{HeapEntry, IndexedMinHeap};

/// Cost Prim uses for an edge; unweighted edges count as `UNIT_COST`.
///
/// A deferred weight that resolves to NaN has no place in the ordering.
fn edge_cost(edge: &Edge) -> GraphResult<f64> {
    let cost = edge.weight().value().unwrap_or(UNIT_COST);
    if cost.is_nan() {
        return Err(GraphError::invalid(format!(
            "edge {}-{} has a NaN weight",
            edge.left().index(),
            edge.right().index()
        )));
    }
    Ok(cost)
}

/// Build a minimum spanning tree of `graph` as a new graph.
///
/// The input must be undirected and connected. The tree keeps every vertex
/// key and the input's weightedness; it never shares edges with the input.
pub fn minimum_spanning_tree<K: VertexKey>(graph: &Graph<K>) -> GraphResult<Graph<K>> {
    if graph.is_directed() {
        return Err(GraphError::invalid(
            "Prim's algorithm requires an undirected graph",
        ));
    }
    if !graph.is_connected()? {
        return Err(GraphError::invalid(
            "Prim's algorithm requires a connected graph",
        ));
    }

    if graph.order() == 0 {
        return Ok(Graph::new(graph.is_weighted(), false));
    }

    let mut heap = IndexedMinHeap::new(graph.order(), VertexId(0))?;
    let mut visited = vec![false; graph.order()];

    while !heap.is_empty() {
        let HeapEntry { vertex: u, .. } = heap.extract_min()?;
        visited[u.index()] = true;

        let vertex = graph.vertex_by_id(u).ok_or_else(|| {
            GraphError::integrity(format!("heap yielded unknown vertex {}", u.index()))
        })?;

        for &edge_id in vertex.incident_edges() {
            let edge = graph.edge(edge_id).ok_or_else(|| {
                GraphError::integrity(format!("unknown edge {}", edge_id.index()))
            })?;
            let v = edge.opposite(u).ok_or_else(|| {
                GraphError::integrity(format!(
                    "edge {} listed on a vertex it does not touch",
                    edge_id.index()
                ))
            })?;
            if visited[v.index()] {
                continue;
            }

            let cost = edge_cost(edge)?;
            // An unreached vertex takes any edge, even one of infinite cost.
            if let Some(current) = heap.priority(v) {
                if heap.best_edge(v).is_none() || cost < current {
                    heap.decrease_key(v, cost, edge_id)?;
                }
            }
        }
    }

    build_tree(graph, &heap)
}

/// Assemble the result: every vertex first, then the winning edges.
fn build_tree<K: VertexKey>(graph: &Graph<K>, heap: &IndexedMinHeap) -> GraphResult<Graph<K>> {
    let tree_edges = heap.tree_edges();
    if tree_edges.len() + 1 != graph.order() {
        return Err(GraphError::integrity(format!(
            "spanning tree of {} vertices has {} edges",
            graph.order(),
            tree_edges.len()
        )));
    }

    let mut tree = Graph::new(graph.is_weighted(), false);

    for vertex in graph.vertices() {
        tree.add_vertex(vertex.key().clone())?;
    }

    let mut total = 0.0;
    for edge_id in tree_edges {
        let edge = graph.edge(edge_id).ok_or_else(|| {
            GraphError::integrity(format!("unknown edge {}", edge_id.index()))
        })?;
        let (a, b) = match (graph.key_of(edge.left()), graph.key_of(edge.right())) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(GraphError::integrity(format!(
                    "edge {} has an unknown endpoint",
                    edge_id.index()
                )))
            }
        };

        let cost = edge_cost(edge)?;
        total += cost;
        if graph.is_weighted() {
            tree.connect_weighted(a, b, Weight::fixed(cost))?;
        } else {
            tree.connect(a, b)?;
        }
    }

    log::debug!(
        "minimum spanning tree: {} vertices, {} edges, total weight {}",
        tree.order(),
        tree.size(),
        total
    );
    Ok(tree)
}
