//! Routemap
//!
//! An in-memory weighted directed graph with single-source shortest-path
//! queries, built around Dijkstra's label-setting algorithm with a binary
//! heap and lazy deletion of stale queue entries.
//!
//! Unreachability is a normal result (empty path, infinite cost); asking
//! about a vertex that was never added to the graph is a distinct
//! [`GraphError::VertexNotFound`] condition.
//!
//! ## Example Usage
//!
//! ```rust
//! use routemap::{shortest_path, GraphStore, Vertex};
//!
//! let mut store = GraphStore::new();
//! store.add_edge("A", "B", 4.0).unwrap();
//! store.add_edge("A", "C", 2.0).unwrap();
//! store.add_edge("C", "B", 1.0).unwrap();
//!
//! let result = shortest_path(&store, &Vertex::new("A"), &Vertex::new("B")).unwrap();
//! assert_eq!(result.cost, 3.0);
//! assert_eq!(result.path, vec![Vertex::new("A"), Vertex::new("C"), Vertex::new("B")]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{shortest_path, PathResult};
pub use graph::{GraphError, GraphResult, GraphStore, Vertex, Weight};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
