//! Phase 2 tests: Breadth-first connectivity and shortest paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use keygraph::graph::{self, Graph};
use keygraph::types::{Direction, GraphError};

// ==================== Helpers ====================

fn unweighted(keys: &[u32], edges: &[(u32, u32)]) -> Graph<u32> {
    let mut graph = Graph::new(false, false);
    for &k in keys {
        graph.add_vertex(k).unwrap();
    }
    for &(a, b) in edges {
        graph.connect(&a, &b).unwrap();
    }
    graph
}

/// 1..=7 joined in a ring.
fn seven_ring() -> Graph<u32> {
    let edges: Vec<(u32, u32)> = (1..=7).map(|k| (k, k % 7 + 1)).collect();
    unweighted(&[1, 2, 3, 4, 5, 6, 7], &edges)
}

/// Hop distances between every pair, by repeated relaxation.
fn hop_distances(n: usize, edges: &[(u32, u32)]) -> Vec<Vec<Option<usize>>> {
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for &(a, b) in edges {
        dist[a as usize][b as usize] = Some(1);
        dist[b as usize][a as usize] = Some(1);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    let through = ik + kj;
                    if dist[i][j].map_or(true, |d| through < d) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }
    dist
}

// ==================== Reachability ====================

#[test]
fn test_connected_vertices_both_ways() {
    let graph = unweighted(&[1, 2, 3, 4], &[(1, 2), (2, 3)]);

    assert!(graph.are_connected(&1, &3).unwrap());
    assert!(graph.are_connected(&3, &1).unwrap());
    assert!(!graph.are_connected(&1, &4).unwrap());
    assert!(graph.are_connected(&4, &4).unwrap());
}

#[test]
fn test_reachability_follows_arcs() {
    let mut graph = Graph::new(false, true);
    for k in ["a", "b", "c"] {
        graph.add_vertex(k).unwrap();
    }
    graph.connect_directed(&"a", &"b", Direction::LeftToRight).unwrap();
    graph.connect_directed(&"c", &"b", Direction::RightToLeft).unwrap();

    assert!(graph.are_connected(&"a", &"c").unwrap());
    assert!(!graph.are_connected(&"c", &"a").unwrap());
    assert!(!graph.are_connected(&"b", &"a").unwrap());
}

#[test]
fn test_reachability_missing_vertex() {
    let graph = unweighted(&[1], &[]);
    assert!(matches!(
        graph.are_connected(&1, &2),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_connected_set_by_id() {
    let graph = unweighted(&[1, 2, 3, 4], &[(1, 2), (3, 4)]);
    let start = graph.vertex_id(&3).unwrap();
    let reached = graph::connected_set(&graph, start).unwrap();

    assert_eq!(reached.len(), 2);
    assert!(reached.contains(&graph.vertex_id(&4).unwrap()));
}

#[test]
fn test_connected_component_in_insertion_order() {
    let graph = unweighted(&[5, 1, 9, 3], &[(3, 9), (9, 5)]);
    assert_eq!(graph.connected_component(&3).unwrap(), vec![&5, &9, &3]);
    assert_eq!(graph.connected_component(&1).unwrap(), vec![&1]);
}

// ==================== Connectivity ====================

#[test]
fn test_connected_graph() {
    let graph = unweighted(&[1, 2, 3], &[(1, 2), (2, 3)]);
    assert!(graph.is_connected().unwrap());
}

#[test]
fn test_not_connected_graph() {
    let graph = unweighted(&[1, 2, 3, 4], &[(1, 2), (2, 3)]);
    assert!(!graph.is_connected().unwrap());
}

#[test]
fn test_ring_is_connected() {
    assert!(seven_ring().is_connected().unwrap());
}

#[test]
fn test_empty_graph_is_connected() {
    let graph: Graph<u32> = Graph::new(false, false);
    assert!(graph.is_connected().unwrap());
}

#[test]
fn test_connectivity_of_directed_graph_not_supported() {
    let mut graph = Graph::new(false, true);
    graph.add_vertex(1).unwrap();
    assert!(matches!(
        graph.is_connected(),
        Err(GraphError::NotSupported(_))
    ));
}

// ==================== Cycles & Bipartiteness ====================

#[test]
fn test_odd_ring_is_cyclic_not_bipartite() {
    let graph = seven_ring();
    assert!(graph.is_cyclic().unwrap());
    assert!(!graph.is_bipartite().unwrap());
}

#[test]
fn test_even_ring_is_bipartite() {
    let graph = unweighted(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]);
    assert!(graph.is_cyclic().unwrap());
    assert!(graph.is_bipartite().unwrap());
}

#[test]
fn test_forest_is_acyclic() {
    let graph = unweighted(&[1, 2, 3, 4, 5, 6], &[(1, 2), (1, 3), (3, 4), (5, 6)]);
    assert!(!graph.is_cyclic().unwrap());
    assert!(graph.is_bipartite().unwrap());
}

#[test]
fn test_triangle_in_second_component() {
    let graph = unweighted(&[1, 2, 3, 4, 5], &[(1, 2), (3, 4), (4, 5), (5, 3)]);
    assert!(graph.is_cyclic().unwrap());
    assert!(!graph.is_bipartite().unwrap());
}

#[test]
fn test_empty_graph_is_acyclic_and_bipartite() {
    let graph: Graph<u32> = Graph::new(false, false);
    assert!(!graph.is_cyclic().unwrap());
    assert!(graph.is_bipartite().unwrap());
}

#[test]
fn test_cycles_of_directed_graph_not_supported() {
    let mut graph = Graph::new(false, true);
    graph.add_vertex(1).unwrap();
    graph.add_vertex(2).unwrap();
    graph.connect_directed(&1, &2, Direction::LeftToRight).unwrap();
    assert!(matches!(graph.is_cyclic(), Err(GraphError::NotSupported(_))));
    assert!(matches!(
        graph.is_bipartite(),
        Err(GraphError::NotSupported(_))
    ));
}

#[test]
fn test_acyclic_exactly_when_forest_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x6379);

    for _ in 0..40 {
        let n: u32 = rng.gen_range(1..10);
        let keys: Vec<u32> = (0..n).collect();
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.gen_bool(0.2) {
                    edges.push((a, b));
                }
            }
        }
        let graph = unweighted(&keys, &edges);

        let mut components = 0;
        let mut seen = std::collections::HashSet::new();
        for k in &keys {
            if seen.insert(*k) {
                components += 1;
                for member in graph.connected_component(k).unwrap() {
                    seen.insert(*member);
                }
            }
        }

        let forest = graph.size() + components == graph.order();
        assert_eq!(graph.is_cyclic().unwrap(), !forest, "edges {:?}", edges);
        if forest {
            assert!(graph.is_bipartite().unwrap());
        }
    }
}

// ==================== Shortest Path ====================

#[test]
fn test_shortest_path_around_the_ring() {
    let graph = seven_ring();
    let path = graph.shortest_path(&1, &5).unwrap();
    assert_eq!(path, vec![&1, &7, &6, &5]);
}

#[test]
fn test_shortest_path_to_self() {
    let graph = seven_ring();
    assert_eq!(graph.shortest_path(&4, &4).unwrap(), vec![&4]);
}

#[test]
fn test_shortest_path_between_components() {
    let graph = unweighted(&[1, 2, 3, 4], &[(1, 2), (3, 4)]);
    match graph.shortest_path(&1, &4) {
        Err(GraphError::VerticesNotConnected { from, to }) => {
            assert_eq!(from, "1");
            assert_eq!(to, "4");
        }
        other => panic!("Expected VerticesNotConnected, got {:?}", other),
    }
}

#[test]
fn test_shortest_path_missing_vertex() {
    let graph = seven_ring();
    assert!(matches!(
        graph.shortest_path(&1, &8),
        Err(GraphError::VertexNotFound(_))
    ));
}

#[test]
fn test_shortest_path_rejects_weighted_and_directed() {
    let mut weighted = Graph::new(true, false);
    weighted.add_vertex(1).unwrap();
    weighted.add_vertex(2).unwrap();
    weighted.connect_weighted(&1, &2, 3.0).unwrap();
    assert!(matches!(
        weighted.shortest_path(&1, &2),
        Err(GraphError::NotSupported(_))
    ));

    let mut directed = Graph::new(false, true);
    directed.add_vertex(1).unwrap();
    directed.add_vertex(2).unwrap();
    directed.connect_directed(&1, &2, Direction::LeftToRight).unwrap();
    assert!(matches!(
        directed.shortest_path(&1, &2),
        Err(GraphError::NotSupported(_))
    ));

    let (a, b) = (weighted.vertex_id(&1).unwrap(), weighted.vertex_id(&2).unwrap());
    assert!(matches!(
        graph::shortest_path(&weighted, a, b),
        Err(GraphError::InvalidOperation(_))
    ));
}

#[test]
fn test_queries_do_not_change_the_graph() {
    let graph = seven_ring();
    let first = graph.shortest_path(&2, &6).unwrap();
    let again = graph.shortest_path(&2, &6).unwrap();
    assert_eq!(first, again);
    assert!(graph.is_connected().unwrap());
    assert!(graph.is_connected().unwrap());
    assert_eq!(graph.size(), 7);
}

#[test]
fn test_path_lengths_match_hop_distances_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x6b67);

    for _ in 0..25 {
        let n: u32 = rng.gen_range(2..12);
        let keys: Vec<u32> = (0..n).collect();
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                if rng.gen_bool(0.25) {
                    edges.push((a, b));
                }
            }
        }
        let graph = unweighted(&keys, &edges);
        let dist = hop_distances(n as usize, &edges);

        for a in 0..n {
            for b in 0..n {
                match (dist[a as usize][b as usize], graph.shortest_path(&a, &b)) {
                    (Some(d), Ok(path)) => {
                        assert_eq!(path.len(), d + 1, "path {a} -> {b}");
                        assert_eq!(*path[0], a);
                        assert_eq!(*path[d], b);
                        for pair in path.windows(2) {
                            assert!(graph.neighbors(pair[0]).unwrap().contains(&pair[1]));
                        }
                    }
                    (None, Err(GraphError::VerticesNotConnected { .. })) => {}
                    (expected, got) => {
                        panic!("{a} -> {b}: expected {:?}, got {:?}", expected, got)
                    }
                }
            }
        }
    }
}
