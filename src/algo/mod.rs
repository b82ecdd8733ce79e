//! Graph algorithms
//!
//! The solver consumes a read-only [`GraphStore`](crate::graph::GraphStore)
//! and returns a pure data result; rendering and reporting are separate
//! consumers operating on the store's edge list and the returned path.

pub mod pathfinding;

pub use pathfinding::{shortest_path, PathResult};
