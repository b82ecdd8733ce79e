//! In-memory graph storage
//!
//! Directed, weighted adjacency lists. Parallel edges and self-loops are
//! stored as-is and never merged; insertion order is preserved so that
//! queries over the same graph are deterministic.

use super::types::{Vertex, Weight};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex {0} not found")]
    VertexNotFound(Vertex),

    #[error("invalid edge weight {weight}: weights must be finite and non-negative")]
    InvalidWeight { weight: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory weighted directed graph
///
/// Every vertex referenced by any edge (as origin or destination) exists as
/// a key in the adjacency map, even when it has no outgoing edges.
///
/// By default, edges may reference vertices that were never added; they are
/// created on the fly. A store built with [`GraphStore::strict`] instead
/// rejects such edges with [`GraphError::VertexNotFound`].
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Outgoing edges for each vertex, in insertion order
    adjacency: IndexMap<Vertex, Vec<(Vertex, Weight)>>,

    /// Whether `add_edge` creates missing endpoints instead of failing
    auto_create_vertices: bool,

    /// Total number of edges (parallel edges counted individually)
    edge_count: usize,
}

impl GraphStore {
    /// Create an empty store that auto-creates vertices on edge insertion
    pub fn new() -> Self {
        GraphStore {
            adjacency: IndexMap::new(),
            auto_create_vertices: true,
            edge_count: 0,
        }
    }

    /// Create an empty store that rejects edges referencing unknown vertices
    pub fn strict() -> Self {
        GraphStore {
            auto_create_vertices: false,
            ..Self::new()
        }
    }

    /// Insert a vertex with no outgoing edges. Idempotent: inserting a
    /// vertex that already exists is a no-op.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) {
        self.adjacency.entry(vertex.into()).or_default();
    }

    /// Insert a directed edge from `origin` to `destination`.
    ///
    /// The weight must be finite and non-negative. Parallel edges between
    /// the same ordered pair are kept, each considered independently by the
    /// solver. In strict mode, both endpoints must already exist.
    pub fn add_edge(
        &mut self,
        origin: impl Into<Vertex>,
        destination: impl Into<Vertex>,
        weight: Weight,
    ) -> GraphResult<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }

        let origin = origin.into();
        let destination = destination.into();

        if !self.auto_create_vertices {
            if !self.adjacency.contains_key(&origin) {
                return Err(GraphError::VertexNotFound(origin));
            }
            if !self.adjacency.contains_key(&destination) {
                return Err(GraphError::VertexNotFound(destination));
            }
        }

        self.add_vertex(destination.clone());
        self.adjacency
            .entry(origin)
            .or_default()
            .push((destination, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing `(destination, weight)` pairs for `vertex`, in insertion
    /// order. A vertex that was never added is reported as
    /// [`GraphError::VertexNotFound`] so callers can tell "no route exists"
    /// apart from "that place is not on the map".
    pub fn neighbors(&self, vertex: &Vertex) -> GraphResult<&[(Vertex, Weight)]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))
    }

    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertices, in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.adjacency.keys()
    }

    /// All edges as `(origin, destination, weight)` triples, in insertion
    /// order. This is the read-only view a renderer consumes to draw the
    /// full graph.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex, Weight)> {
        self.adjacency.iter().flat_map(|(origin, outgoing)| {
            outgoing
                .iter()
                .map(move |(destination, weight)| (origin, destination, *weight))
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
