//! Basic build -> query -> spanning tree flow.

use keygraph::*;

fn main() -> GraphResult<()> {
    // Describe a small road network
    let mut builder = GraphBuilder::new().weighted();
    builder
        .vertices(["madrid", "toledo", "segovia", "avila", "guadalajara"])
        .weighted_edge("madrid", "toledo", 72.0)
        .weighted_edge("madrid", "segovia", 91.0)
        .weighted_edge("madrid", "guadalajara", 60.0)
        .weighted_edge("segovia", "avila", 67.0)
        .weighted_edge("avila", "madrid", 110.0)
        // Computed on first read, then cached
        .weighted_edge("toledo", "avila", Weight::deferred(|| 137.0));

    let graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges (total weight {})",
        graph.order(),
        graph.size(),
        graph.total_weight()
    );

    for vertex in graph.vertices() {
        let neighbors = graph.neighbors(vertex.key())?;
        println!("  {} (degree {}): {:?}", vertex.key(), vertex.degree(), neighbors);
    }

    println!("Connected: {}", graph.is_connected()?);
    println!("Regular: {}", graph.is_regular()?);

    // Keep only the cheapest roads that still reach every city
    let tree = graph.minimum_spanning_tree()?;
    println!("Minimum spanning tree ({} edges):", tree.size());
    for edge in tree.edges() {
        if let (Some(a), Some(b)) = (tree.key_of(edge.left()), tree.key_of(edge.right())) {
            println!("  {} - {} ({:?})", a, b, edge.weight());
        }
    }
    println!("Total weight: {}", tree.total_weight());

    // Hop counts need an unweighted graph
    let mut hops: Graph<&str> = Graph::new(false, false);
    for vertex in tree.vertices() {
        hops.add_vertex(*vertex.key())?;
    }
    for edge in tree.edges() {
        if let (Some(a), Some(b)) = (tree.key_of(edge.left()), tree.key_of(edge.right())) {
            hops.connect(a, b)?;
        }
    }
    let path = hops.shortest_path(&"guadalajara", &"avila")?;
    println!("Fewest hops guadalajara -> avila: {:?}", path);

    Ok(())
}
