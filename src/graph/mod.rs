//! Weighted directed graph storage
//!
//! Implements the route-map data model:
//! - Vertices identified by opaque string labels
//! - Directed edges with finite, non-negative weights
//! - Parallel edges between the same ordered pair
//! - In-memory storage with insertion-ordered adjacency lists

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::{Vertex, Weight};
