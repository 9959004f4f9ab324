//! 100K vertex performance demo.

use std::time::Instant;

use keygraph::*;

fn main() -> GraphResult<()> {
    let vertex_count: u64 = 100_000;
    let chords_per_vertex: u64 = 3;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let mut graph = Graph::new(true, false);
    for i in 0..vertex_count {
        graph.add_vertex(i)?;
    }
    println!("  Vertices added in {:?}", start.elapsed());

    // A ring keeps everything connected; chords add shortcuts
    let start = Instant::now();
    for i in 0..vertex_count {
        let next = (i + 1) % vertex_count;
        graph.connect_weighted(&i, &next, (i % 10 + 1) as f64)?;
    }
    for i in 0..vertex_count {
        for j in 1..=chords_per_vertex {
            let target = (i + j * 7_919) % vertex_count;
            // Parallel chords are rejected; that's fine here
            let _ = graph.connect_weighted(&i, &target, (j * 5) as f64);
        }
    }
    println!(
        "  Edges connected in {:?} ({} vertices, {} edges)",
        start.elapsed(),
        graph.order(),
        graph.size()
    );

    // Reachability
    let start = Instant::now();
    let component = graph.connected_component(&0)?;
    println!(
        "  Component of 0: {} vertices in {:?}",
        component.len(),
        start.elapsed()
    );

    // Spanning tree on a slice of the graph; connectivity checks are quadratic
    let slice: u64 = 2_000;
    let mut small = Graph::new(true, false);
    for i in 0..slice {
        small.add_vertex(i)?;
    }
    for edge in graph.edges() {
        if let (Some(&a), Some(&b)) = (graph.key_of(edge.left()), graph.key_of(edge.right())) {
            if a < slice && b < slice {
                small.connect_weighted(&a, &b, edge.weight().value().unwrap_or(UNIT_COST))?;
            }
        }
    }

    let start = Instant::now();
    let tree = small.minimum_spanning_tree()?;
    println!(
        "  Spanning tree of first {} vertices: {} edges, total weight {} in {:?}",
        slice,
        tree.size(),
        tree.total_weight(),
        start.elapsed()
    );

    println!("\nDone!");
    Ok(())
}
