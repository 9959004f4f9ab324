//! CLI command implementations.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{Direction, GraphError, GraphResult};

/// A graph described on the command line.
#[derive(Debug, Clone, Default)]
pub struct GraphSpec {
    /// Arcs instead of links.
    pub directed: bool,
    /// Every edge carries a weight.
    pub weighted: bool,
    /// Vertices to create up front (isolated ones need this).
    pub vertices: Vec<String>,
    /// Edges as `A-B` or `A-B:WEIGHT`.
    pub edges: Vec<String>,
}

/// One parsed edge argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: Option<f64>,
}

/// Parse `A-B` or `A-B:WEIGHT`.
pub fn parse_edge(spec: &str) -> GraphResult<EdgeSpec> {
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());

    let (pair, weight) = match spec.split_once(':') {
        Some((pair, w)) => (pair, Some(w.trim().parse::<f64>().map_err(|_| invalid())?)),
        None => (spec, None),
    };
    let (a, b) = pair.split_once('-').ok_or_else(invalid)?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return Err(invalid());
    }

    Ok(EdgeSpec {
        a: a.to_string(),
        b: b.to_string(),
        weight,
    })
}

/// Build a graph from a command-line description. Vertices are created on first mention.
pub fn build_graph(spec: &GraphSpec) -> GraphResult<Graph<String>> {
    let mut graph = Graph::new(spec.weighted, spec.directed);

    for key in &spec.vertices {
        ensure_vertex(&mut graph, key)?;
    }

    for raw in &spec.edges {
        let edge = parse_edge(raw)?;
        ensure_vertex(&mut graph, &edge.a)?;
        ensure_vertex(&mut graph, &edge.b)?;

        match (spec.directed, edge.weight) {
            (false, None) => graph.connect(&edge.a, &edge.b)?,
            (false, Some(w)) => graph.connect_weighted(&edge.a, &edge.b, w)?,
            (true, None) => graph.connect_directed(&edge.a, &edge.b, Direction::LeftToRight)?,
            (true, Some(w)) => {
                graph.connect_directed_weighted(&edge.a, &edge.b, Direction::LeftToRight, w)?
            }
        };
    }

    Ok(graph)
}

fn ensure_vertex(graph: &mut Graph<String>, key: &str) -> GraphResult<()> {
    let key = key.to_string();
    if !graph.contains_vertex(&key) {
        graph.add_vertex(key)?;
    }
    Ok(())
}

/// Structural facts about a graph, as printed by `info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub order: usize,
    pub size: usize,
    pub weighted: bool,
    pub directed: bool,
    /// `None` for directed graphs, where connectivity is not implemented.
    pub connected: Option<bool>,
    /// `None` for an empty graph.
    pub regular: Option<bool>,
    pub complete: bool,
    /// `None` for directed graphs.
    pub cyclic: Option<bool>,
    /// `None` for directed graphs.
    pub bipartite: Option<bool>,
    pub total_weight: f64,
}

/// Compute the summary shown by `info`.
pub fn summarize(graph: &Graph<String>) -> GraphResult<GraphSummary> {
    let (connected, cyclic, bipartite) = if graph.is_directed() {
        (None, None, None)
    } else {
        (
            Some(graph.is_connected()?),
            Some(graph.is_cyclic()?),
            Some(graph.is_bipartite()?),
        )
    };
    let regular = if graph.order() == 0 {
        None
    } else {
        Some(graph.is_regular()?)
    };

    Ok(GraphSummary {
        order: graph.order(),
        size: graph.size(),
        weighted: graph.is_weighted(),
        directed: graph.is_directed(),
        connected,
        regular,
        complete: graph.is_complete(),
        cyclic,
        bipartite,
        total_weight: graph.total_weight(),
    })
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "n/a",
    }
}

/// Display structural information about a graph.
pub fn cmd_info(spec: &GraphSpec, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    let summary = summarize(&graph)?;

    if json {
        print_json(&summary);
    } else {
        println!("Order: {}", summary.order);
        println!("Size: {}", summary.size);
        println!("Weighted: {}", yes_no(Some(summary.weighted)));
        println!("Directed: {}", yes_no(Some(summary.directed)));
        println!("Connected: {}", yes_no(summary.connected));
        println!("Regular: {}", yes_no(summary.regular));
        println!("Complete: {}", yes_no(Some(summary.complete)));
        println!("Cyclic: {}", yes_no(summary.cyclic));
        println!("Bipartite: {}", yes_no(summary.bipartite));
        if summary.weighted {
            println!("Total weight: {}", summary.total_weight);
        }
    }
    Ok(())
}

/// Report whether `b` is reachable from `a`.
pub fn cmd_connected(spec: &GraphSpec, a: &str, b: &str, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    let connected = graph.are_connected(&a.to_string(), &b.to_string())?;

    if json {
        print_json(&serde_json::json!({
            "from": a,
            "to": b,
            "connected": connected,
        }));
    } else if connected {
        println!("{} and {} are connected", a, b);
    } else {
        println!("{} and {} are not connected", a, b);
    }
    Ok(())
}

/// Print the fewest-hop path between two vertices.
pub fn cmd_path(spec: &GraphSpec, a: &str, b: &str, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    let path = graph.shortest_path(&a.to_string(), &b.to_string())?;

    if json {
        print_json(&serde_json::json!({
            "from": a,
            "to": b,
            "hops": path.len() - 1,
            "path": path,
        }));
    } else {
        let rendered: Vec<&str> = path.iter().map(|k| k.as_str()).collect();
        println!("{}", rendered.join(" -> "));
    }
    Ok(())
}

/// Print every vertex reachable from `key`.
pub fn cmd_component(spec: &GraphSpec, key: &str, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    let component = graph.connected_component(&key.to_string())?;

    if json {
        print_json(&serde_json::json!({
            "start": key,
            "vertices": component,
        }));
    } else {
        for vertex in component {
            println!("{}", vertex);
        }
    }
    Ok(())
}

/// Print a minimum spanning tree.
pub fn cmd_mst(spec: &GraphSpec, json: bool) -> GraphResult<()> {
    let graph = build_graph(spec)?;
    let tree = graph.minimum_spanning_tree()?;

    let mut edges = Vec::with_capacity(tree.size());
    for edge in tree.edges() {
        let (a, b) = match (tree.key_of(edge.left()), tree.key_of(edge.right())) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(GraphError::integrity(format!(
                    "tree edge {}-{} has an unknown endpoint",
                    edge.left().index(),
                    edge.right().index()
                )))
            }
        };
        edges.push((a, b, edge.weight().value()));
    }

    if json {
        let rendered: Vec<serde_json::Value> = edges
            .iter()
            .map(|(a, b, w)| serde_json::json!({"a": a, "b": b, "weight": w}))
            .collect();
        print_json(&serde_json::json!({
            "order": tree.order(),
            "size": tree.size(),
            "total_weight": tree.total_weight(),
            "edges": rendered,
        }));
    } else {
        for (a, b, w) in &edges {
            match w {
                Some(w) => println!("{} - {} ({})", a, b, w),
                None => println!("{} - {}", a, b),
            }
        }
        println!("Edges: {}", tree.size());
        if tree.is_weighted() {
            println!("Total weight: {}", tree.total_weight());
        }
    }
    Ok(())
}
