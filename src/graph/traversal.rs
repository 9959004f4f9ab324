//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, VertexId, VertexKey};

use super::Graph;

/// Neighbors of `vertex` from the adjacency index; a missing entry means the graph is corrupt.
fn neighbors_of<K: VertexKey>(graph: &Graph<K>, vertex: VertexId) -> GraphResult<&[VertexId]> {
    graph.adjacency().neighbors(vertex).ok_or_else(|| {
        GraphError::integrity(format!(
            "vertex {} has no adjacency entry",
            graph.describe(vertex)
        ))
    })
}

/// Every vertex reachable from `start`, including `start`.
///
/// Level-order traversal over the adjacency index. In an undirected graph
/// this is the connected component containing `start`.
pub fn connected_set<K: VertexKey>(
    graph: &Graph<K>,
    start: VertexId,
) -> GraphResult<HashSet<VertexId>> {
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        log::trace!("bfs visiting {}", graph.describe(current));
        for &neighbor in neighbors_of(graph, current)? {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(visited)
}

/// Fewest-hop path from `from` to `to`, both inclusive.
///
/// Each vertex remembers the vertex that discovered it; since BFS discovers
/// every vertex once, at its minimum hop distance, walking those links back
/// from `to` yields a shortest path. Only valid on unweighted, undirected
/// graphs.
pub fn shortest_path<K: VertexKey>(
    graph: &Graph<K>,
    from: VertexId,
    to: VertexId,
) -> GraphResult<Vec<VertexId>> {
    if graph.is_directed() || graph.is_weighted() {
        return Err(GraphError::invalid(
            "BFS shortest path can only be applied on unweighted undirected graphs",
        ));
    }

    // Validates `from` even when no search is needed.
    neighbors_of(graph, from)?;
    if from == to {
        return Ok(vec![from]);
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    let mut predecessor: HashMap<VertexId, VertexId> = HashMap::new();
    let mut found = false;

    visited.insert(from);
    queue.push_back(from);

    'search: while let Some(current) = queue.pop_front() {
        log::trace!("bfs visiting {}", graph.describe(current));
        for &neighbor in neighbors_of(graph, current)? {
            if !visited.insert(neighbor) {
                continue;
            }
            predecessor.insert(neighbor, current);
            if neighbor == to {
                found = true;
                break 'search;
            }
            queue.push_back(neighbor);
        }
    }

    if !found {
        return Err(GraphError::VerticesNotConnected {
            from: graph.describe(from),
            to: graph.describe(to),
        });
    }

    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = *predecessor.get(&current).ok_or_else(|| {
            GraphError::integrity(format!(
                "broken predecessor chain at {}",
                graph.describe(current)
            ))
        })?;
        path.push(current);
    }
    path.reverse();

    Ok(path)
}

/// Whether an undirected graph contains a cycle.
///
/// Searches every component, remembering the vertex each one was reached
/// from. Meeting an already-visited vertex that is not that parent closes a
/// cycle; without parallel edges or self-loops nothing else can.
pub fn has_cycle<K: VertexKey>(graph: &Graph<K>) -> GraphResult<bool> {
    if graph.is_directed() {
        return Err(GraphError::invalid(
            "BFS cycle detection can only be applied on undirected graphs",
        ));
    }

    let mut parent: HashMap<VertexId, Option<VertexId>> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    for vertex in graph.vertices() {
        let root = vertex.id();
        if parent.contains_key(&root) {
            continue;
        }
        parent.insert(root, None);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let came_from = parent.get(&current).copied().flatten();
            for &neighbor in neighbors_of(graph, current)? {
                if Some(neighbor) == came_from {
                    continue;
                }
                if parent.contains_key(&neighbor) {
                    log::trace!(
                        "cycle closed at {} from {}",
                        graph.describe(neighbor),
                        graph.describe(current)
                    );
                    return Ok(true);
                }
                parent.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    Ok(false)
}

/// Whether an undirected graph can be two-coloured.
///
/// Colours each component level by level; an edge between two vertices of
/// the same colour means an odd cycle.
pub fn is_two_colourable<K: VertexKey>(graph: &Graph<K>) -> GraphResult<bool> {
    if graph.is_directed() {
        return Err(GraphError::invalid(
            "BFS two-colouring can only be applied on undirected graphs",
        ));
    }

    let mut colour: HashMap<VertexId, bool> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    for vertex in graph.vertices() {
        let root = vertex.id();
        if colour.contains_key(&root) {
            continue;
        }
        colour.insert(root, false);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let side = colour.get(&current).copied().unwrap_or(false);
            for &neighbor in neighbors_of(graph, current)? {
                match colour.get(&neighbor) {
                    Some(&other) if other == side => return Ok(false),
                    Some(_) => {}
                    None => {
                        colour.insert(neighbor, !side);
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: u32) -> Graph<u32> {
        let mut g = Graph::new(false, false);
        for k in 0..n {
            g.add_vertex(k).unwrap();
        }
        for k in 1..n {
            g.connect(&(k - 1), &k).unwrap();
        }
        g
    }

    #[test]
    fn test_connected_set_covers_component() {
        let mut g = path_graph(4);
        g.add_vertex(10).unwrap();
        let set = connected_set(&g, VertexId(0)).unwrap();
        assert_eq!(set.len(), 4);
        assert!(!set.contains(&VertexId(4)));
    }

    #[test]
    fn test_missing_adjacency_entry_is_fault() {
        let g = path_graph(2);
        let err = connected_set(&g, VertexId(7)).unwrap_err();
        assert!(matches!(err, GraphError::GraphIntegrity(_)));
    }

    #[test]
    fn test_trivial_path() {
        let g = path_graph(3);
        assert_eq!(
            shortest_path(&g, VertexId(1), VertexId(1)).unwrap(),
            vec![VertexId(1)]
        );
    }

    #[test]
    fn test_path_along_chain() {
        let g = path_graph(5);
        let path = shortest_path(&g, VertexId(4), VertexId(0)).unwrap();
        let expected: Vec<VertexId> = (0..5).rev().map(VertexId).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn test_weighted_graph_rejected() {
        let mut g: Graph<u32> = Graph::new(true, false);
        g.add_vertex(0).unwrap();
        g.add_vertex(1).unwrap();
        g.connect_weighted(&0, &1, 1.0).unwrap();
        assert!(matches!(
            shortest_path(&g, VertexId(0), VertexId(1)),
            Err(GraphError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_path_has_no_cycle() {
        let mut g = path_graph(5);
        assert!(!has_cycle(&g).unwrap());
        assert!(is_two_colourable(&g).unwrap());

        g.connect(&0, &4).unwrap();
        assert!(has_cycle(&g).unwrap());
        assert!(!is_two_colourable(&g).unwrap());
    }

    #[test]
    fn test_cycle_in_later_component() {
        let mut g = path_graph(2);
        for k in 10..13 {
            g.add_vertex(k).unwrap();
        }
        g.connect(&10, &11).unwrap();
        g.connect(&11, &12).unwrap();
        assert!(!has_cycle(&g).unwrap());
        g.connect(&12, &10).unwrap();
        assert!(has_cycle(&g).unwrap());
    }
}
