//! CLI entry point for the `kgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use keygraph::cli::commands::{self, GraphSpec};
use keygraph::GraphError;

#[derive(Parser)]
#[command(
    name = "kgraph",
    about = "kgraph: connectivity, shortest paths and spanning trees over edge lists"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the graph description to stderr before running the command
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// The graph every command operates on.
#[derive(Args)]
struct GraphArgs {
    /// Treat each edge as an arc from its first to its second vertex
    #[arg(long)]
    directed: bool,

    /// Every edge carries a weight (A-B:WEIGHT)
    #[arg(long)]
    weighted: bool,

    /// Add a vertex even if no edge mentions it (repeatable)
    #[arg(long = "vertex")]
    vertices: Vec<String>,

    /// Edges as A-B or A-B:WEIGHT
    edges: Vec<String>,
}

impl GraphArgs {
    fn into_spec(self) -> GraphSpec {
        GraphSpec {
            directed: self.directed,
            weighted: self.weighted,
            vertices: self.vertices,
            edges: self.edges,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Order, size, classification and structural properties
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Whether the second vertex is reachable from the first
    Connected {
        /// Start vertex
        from: String,
        /// Target vertex
        to: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Fewest-hop path (unweighted, undirected graphs only)
    Path {
        /// Start vertex
        from: String,
        /// Target vertex
        to: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Every vertex reachable from a vertex
    Component {
        /// Start vertex
        start: String,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Minimum spanning tree (undirected, connected graphs only)
    Mst {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn describe(spec: &GraphSpec) {
    eprintln!(
        "graph: {} edge(s), {} extra vertex(es), weighted={}, directed={}",
        spec.edges.len(),
        spec.vertices.len(),
        spec.weighted,
        spec.directed
    );
}

/// What to run once the graph is described.
enum Action {
    Info,
    Connected(String, String),
    Path(String, String),
    Component(String),
    Mst,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let (spec, action) = match cli.command {
        Commands::Info { graph } => (graph.into_spec(), Action::Info),
        Commands::Connected { from, to, graph } => (graph.into_spec(), Action::Connected(from, to)),
        Commands::Path { from, to, graph } => (graph.into_spec(), Action::Path(from, to)),
        Commands::Component { start, graph } => (graph.into_spec(), Action::Component(start)),
        Commands::Mst { graph } => (graph.into_spec(), Action::Mst),
    };

    if cli.verbose {
        describe(&spec);
    }

    let result = match action {
        Action::Info => commands::cmd_info(&spec, json),
        Action::Connected(from, to) => commands::cmd_connected(&spec, &from, &to, json),
        Action::Path(from, to) => commands::cmd_path(&spec, &from, &to, json),
        Action::Component(start) => commands::cmd_component(&spec, &start, json),
        Action::Mst => commands::cmd_mst(&spec, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) => 2,
            GraphError::VertexNotFound(_) | GraphError::DuplicateVertex(_) => 4,
            GraphError::VerticesNotConnected { .. } => 6,
            _ => 5,
        };
        process::exit(code);
    }
}
