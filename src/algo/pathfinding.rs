//! Shortest-path solver
//!
//! Dijkstra's label-setting algorithm over a read-only [`GraphStore`],
//! backed by a binary heap. The heap does not support decrease-key, so
//! improved distances are re-pushed and superseded entries are discarded
//! when popped (lazy deletion).

use crate::graph::{GraphError, GraphResult, GraphStore, Vertex, Weight};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

/// Result of a shortest-path query
///
/// An unreachable goal is a normal outcome, not an error: `path` is empty
/// and `cost` is infinite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub start: Vertex,
    pub goal: Vertex,
    /// Vertices from start to goal inclusive; empty when unreachable
    pub path: Vec<Vertex>,
    /// Sum of edge weights along `path`; infinite when unreachable
    pub cost: Weight,
}

impl PathResult {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Entry in the priority queue
#[derive(Debug, Clone, Copy, PartialEq)]
struct State<'a> {
    cost: Weight,
    /// Discovery sequence number; earlier discoveries win cost ties, so
    /// results are deterministic for a fixed insertion order
    seq: u64,
    vertex: &'a Vertex,
}

impl Eq for State<'_> {}

// BinaryHeap is a max-heap; order is reversed so the cheapest (then
// earliest-discovered) entry pops first. Costs are finite and non-negative
// by the store's insertion invariant, so partial_cmp cannot fail on NaN.
impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the minimum-cost path from `start` to `goal`.
///
/// Both vertices must exist in the store; asking about a vertex that was
/// never added is [`GraphError::VertexNotFound`], distinct from the normal
/// unreachable result. Runs in O((V + E) log V).
pub fn shortest_path(
    store: &GraphStore,
    start: &Vertex,
    goal: &Vertex,
) -> GraphResult<PathResult> {
    if !store.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start.clone()));
    }
    if !store.contains_vertex(goal) {
        return Err(GraphError::VertexNotFound(goal.clone()));
    }

    let mut dist: HashMap<&Vertex, Weight> =
        store.vertices().map(|v| (v, Weight::INFINITY)).collect();
    let mut prev: HashMap<&Vertex, Option<&Vertex>> =
        store.vertices().map(|v| (v, None)).collect();

    dist.insert(start, 0.0);

    let mut seq = 0u64;
    let mut heap = BinaryHeap::new();
    heap.push(State {
        cost: 0.0,
        seq,
        vertex: start,
    });

    while let Some(State { cost, vertex, .. }) = heap.pop() {
        if cost > dist[vertex] {
            // Stale entry: a cheaper path to this vertex was already settled
            continue;
        }

        for (next, weight) in store.neighbors(vertex)? {
            let candidate = cost + weight;
            if candidate < dist[next] {
                dist.insert(next, candidate);
                prev.insert(next, Some(vertex));
                seq += 1;
                heap.push(State {
                    cost: candidate,
                    seq,
                    vertex: next,
                });
            }
        }
    }

    let cost = dist[goal];
    if cost.is_infinite() {
        debug!(%start, %goal, "goal unreachable");
        return Ok(PathResult {
            start: start.clone(),
            goal: goal.clone(),
            path: Vec::new(),
            cost: Weight::INFINITY,
        });
    }

    // Follow predecessor links backward from the goal
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(vertex) = current {
        path.push(vertex.clone());
        current = prev[vertex];
    }
    path.reverse();

    debug!(%start, %goal, cost, hops = path.len() - 1, "shortest path found");
    Ok(PathResult {
        start: start.clone(),
        goal: goal.clone(),
        path,
        cost,
    })
}
