//! Core type definitions for the route graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight. The solver's correctness guarantee holds only for finite,
/// non-negative weights; the store enforces this at insertion time.
pub type Weight = f64;

/// A named vertex in the graph (e.g., "A", "Lisbon")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Vertex(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Vertex {
    fn from(s: String) -> Self {
        Vertex(s)
    }
}

impl From<&str> for Vertex {
    fn from(s: &str) -> Self {
        Vertex(s.to_string())
    }
}
