//! Routemap CLI — build a route graph and query the shortest path
//!
//! Loads an edge list (a built-in demo map, or a JSON file of
//! `[origin, destination, weight]` triples), runs the solver for the two
//! given vertex names, and prints the path and its total cost.

use anyhow::{Context, Result};
use clap::Parser;
use routemap::{shortest_path, GraphError, GraphStore, Vertex};
use std::path::{Path, PathBuf};
use tracing::info;

/// Built-in demo route map used when no edge file is given
const DEMO_EDGES: &[(&str, &str, f64)] = &[
    ("A", "B", 4.0),
    ("A", "C", 2.0),
    ("B", "C", 5.0),
    ("B", "D", 10.0),
    ("C", "E", 3.0),
    ("D", "E", 4.0),
    ("E", "A", 7.0),
];

#[derive(Parser)]
#[command(name = "routemap", version, about = "Shortest-path queries over a weighted route graph")]
struct Cli {
    /// Start vertex name
    start: String,

    /// Goal vertex name
    goal: String,

    /// JSON file holding an array of [origin, destination, weight] edges
    #[arg(long)]
    edges: Option<PathBuf>,

    /// Print every edge in the graph before the result
    #[arg(long)]
    show_graph: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match &cli.edges {
        Some(path) => load_edges(path)?,
        None => demo_graph()?,
    };

    // Vertex names are case-insensitive on the command line
    let start = Vertex::new(cli.start.to_uppercase());
    let goal = Vertex::new(cli.goal.to_uppercase());

    if cli.show_graph {
        println!("Graph ({} vertices, {} edges):", store.vertex_count(), store.edge_count());
        for (origin, destination, weight) in store.edges() {
            println!("  {origin} -> {destination} ({weight})");
        }
        println!();
    }

    let result = match shortest_path(&store, &start, &goal) {
        Ok(result) => result,
        Err(GraphError::VertexNotFound(v)) => {
            anyhow::bail!("vertex {v} is not on the map");
        }
        Err(e) => return Err(e.into()),
    };

    if result.is_reachable() {
        let names: Vec<&str> = result.path.iter().map(Vertex::as_str).collect();
        println!("Shortest path: {}", names.join(" -> "));
        println!("Total cost: {}", result.cost);
    } else {
        println!("No path exists between {start} and {goal}.");
    }

    Ok(())
}

fn demo_graph() -> Result<GraphStore> {
    let mut store = GraphStore::new();
    for &(origin, destination, weight) in DEMO_EDGES {
        store.add_edge(origin, destination, weight)?;
    }
    Ok(store)
}

fn load_edges(path: &Path) -> Result<GraphStore> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading edge file {}", path.display()))?;
    let edges: Vec<(String, String, f64)> =
        serde_json::from_str(&data).context("parsing edge file")?;

    let mut store = GraphStore::new();
    for (origin, destination, weight) in edges {
        store
            .add_edge(origin, destination, weight)
            .context("inserting edge")?;
    }

    info!(
        vertices = store.vertex_count(),
        edges = store.edge_count(),
        "graph loaded"
    );
    Ok(store)
}
