use routemap::{shortest_path, GraphError, GraphStore, Vertex};

fn vertex(name: &str) -> Vertex {
    Vertex::new(name)
}

/// The demo route map: A,B,C,D,E with seven directed edges.
fn demo_store() -> GraphStore {
    let mut store = GraphStore::new();
    for (origin, destination, weight) in [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 5.0),
        ("B", "D", 10.0),
        ("C", "E", 3.0),
        ("D", "E", 4.0),
        ("E", "A", 7.0),
    ] {
        store.add_edge(origin, destination, weight).unwrap();
    }
    store
}

#[test]
fn test_demo_a_to_e() {
    let store = demo_store();
    let result = shortest_path(&store, &vertex("A"), &vertex("E")).unwrap();
    // A->C->E (2+3) beats A->B->D->E (4+10+4)
    assert_eq!(result.path, vec![vertex("A"), vertex("C"), vertex("E")]);
    assert_eq!(result.cost, 5.0);
}

#[test]
fn test_demo_a_to_d_single_route() {
    let store = demo_store();
    let result = shortest_path(&store, &vertex("A"), &vertex("D")).unwrap();
    assert_eq!(result.path, vec![vertex("A"), vertex("B"), vertex("D")]);
    assert_eq!(result.cost, 14.0);
}

#[test]
fn test_demo_d_to_b_unreachable() {
    let store = demo_store();
    let result = shortest_path(&store, &vertex("D"), &vertex("B")).unwrap();
    assert!(!result.is_reachable());
    assert!(result.path.is_empty());
    assert_eq!(result.cost, f64::INFINITY);
}

#[test]
fn test_cost_equals_sum_of_path_weights() {
    let store = demo_store();
    for goal in ["B", "C", "D", "E"] {
        let result = shortest_path(&store, &vertex("A"), &vertex(goal)).unwrap();
        assert!(result.is_reachable());

        let mut sum = 0.0;
        for pair in result.path.windows(2) {
            // Cheapest edge between consecutive path vertices
            let weight = store
                .neighbors(&pair[0])
                .unwrap()
                .iter()
                .filter(|(destination, _)| *destination == pair[1])
                .map(|(_, weight)| *weight)
                .fold(f64::INFINITY, f64::min);
            sum += weight;
        }
        assert_eq!(result.cost, sum, "cost mismatch for A -> {goal}");
    }
}

/// Enumerate every simple path by depth-first search and return the
/// cheapest total cost. With non-negative weights the optimum is simple,
/// so this is a complete oracle for small graphs.
fn brute_force_cost(store: &GraphStore, start: &Vertex, goal: &Vertex) -> f64 {
    fn dfs(
        store: &GraphStore,
        current: &Vertex,
        goal: &Vertex,
        visited: &mut Vec<Vertex>,
        cost: f64,
        best: &mut f64,
    ) {
        if current == goal {
            *best = best.min(cost);
            return;
        }
        for (next, weight) in store.neighbors(current).unwrap() {
            if !visited.contains(next) {
                visited.push(next.clone());
                dfs(store, next, goal, visited, cost + weight, best);
                visited.pop();
            }
        }
    }

    let mut best = f64::INFINITY;
    let mut visited = vec![start.clone()];
    dfs(store, start, goal, &mut visited, 0.0, &mut best);
    best
}

#[test]
fn test_matches_brute_force_on_all_pairs() {
    let store = demo_store();
    let vertices: Vec<Vertex> = store.vertices().cloned().collect();

    for start in &vertices {
        for goal in &vertices {
            let result = shortest_path(&store, start, goal).unwrap();
            let expected = if start == goal {
                0.0
            } else {
                brute_force_cost(&store, start, goal)
            };
            assert_eq!(result.cost, expected, "cost mismatch for {start} -> {goal}");
        }
    }
}

#[test]
fn test_start_equals_goal_for_every_vertex() {
    let store = demo_store();
    for v in ["A", "B", "C", "D", "E"] {
        let result = shortest_path(&store, &vertex(v), &vertex(v)).unwrap();
        assert_eq!(result.path, vec![vertex(v)]);
        assert_eq!(result.cost, 0.0);
    }
}

#[test]
fn test_edge_insertion_is_monotone() {
    let mut store = demo_store();
    let before = shortest_path(&store, &vertex("A"), &vertex("E"))
        .unwrap()
        .cost;

    // An expensive new edge changes nothing
    store.add_edge("A", "E", 100.0).unwrap();
    let after = shortest_path(&store, &vertex("A"), &vertex("E"))
        .unwrap()
        .cost;
    assert_eq!(after, before);

    // A cheap new edge can only lower the cost
    store.add_edge("A", "E", 1.0).unwrap();
    let after = shortest_path(&store, &vertex("A"), &vertex("E"))
        .unwrap()
        .cost;
    assert!(after <= before);
    assert_eq!(after, 1.0);
}

#[test]
fn test_isolated_vertex_is_unreachable_but_known() {
    let mut store = demo_store();
    store.add_vertex("Z");

    let result = shortest_path(&store, &vertex("A"), &vertex("Z")).unwrap();
    assert!(!result.is_reachable());

    // A vertex never added is a distinct condition
    let err = shortest_path(&store, &vertex("A"), &vertex("Q")).unwrap_err();
    assert_eq!(err, GraphError::VertexNotFound(vertex("Q")));
}

#[test]
fn test_parallel_edges_cheapest_wins() {
    let mut store = GraphStore::new();
    store.add_edge("A", "B", 9.0).unwrap();
    store.add_edge("A", "B", 3.0).unwrap();
    store.add_edge("A", "B", 6.0).unwrap();

    let result = shortest_path(&store, &vertex("A"), &vertex("B")).unwrap();
    assert_eq!(result.path, vec![vertex("A"), vertex("B")]);
    assert_eq!(result.cost, 3.0);
}

#[test]
fn test_self_loops_are_harmless() {
    let mut store = demo_store();
    store.add_edge("C", "C", 1.0).unwrap();
    store.add_edge("C", "C", 0.0).unwrap();

    let result = shortest_path(&store, &vertex("A"), &vertex("E")).unwrap();
    assert_eq!(result.path, vec![vertex("A"), vertex("C"), vertex("E")]);
    assert_eq!(result.cost, 5.0);
}

#[test]
fn test_deterministic_across_queries() {
    let store = demo_store();
    let first = shortest_path(&store, &vertex("A"), &vertex("E")).unwrap();
    for _ in 0..10 {
        let again = shortest_path(&store, &vertex("A"), &vertex("E")).unwrap();
        assert_eq!(again, first);
    }
}
