//! Property-level tests of the trace engine: replay independence,
//! distance monotonicity and convergence, and run-to-run determinism.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use stepgraph::graph::{AcceptedSets, AdjacencyIndex, Predecessors, StepTraceEngine, Trace};
use stepgraph::models::{EdgeSpec, GraphSpec, StepKind};

/// The six-vertex demo graph the rendering client ships with.
fn demo_graph() -> GraphSpec {
    GraphSpec::new(
        ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vec![
            EdgeSpec::new("a", "b", 42.0),
            EdgeSpec::new("a", "c", 4.0),
            EdgeSpec::new("a", "d", 10.0),
            EdgeSpec::new("b", "e", 14.0),
            EdgeSpec::new("b", "f", 3.0),
            EdgeSpec::new("c", "d", 3.0),
            EdgeSpec::new("d", "e", 1.0),
            EdgeSpec::new("e", "f", 11.0),
            EdgeSpec::new("e", "a", 9.0),
            EdgeSpec::new("d", "f", 10.0),
        ],
    )
}

fn run(graph: &GraphSpec, start: &str) -> Trace {
    let adjacency = AdjacencyIndex::build(graph);
    StepTraceEngine::new(graph, &adjacency, start)
        .run()
        .expect("run failed")
}

/// Reference Dijkstra over the same symmetric adjacency, heap-based, used
/// only to check the engine's final distances.
fn reference_distances(graph: &GraphSpec, start: &str) -> HashMap<String, f64> {
    #[derive(PartialEq)]
    struct Entry(String, f64);
    impl Eq for Entry {}
    impl Ord for Entry {
        fn cmp(&self, other: &Self) -> Ordering {
            other
                .1
                .partial_cmp(&self.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.0.cmp(&other.0))
        }
    }
    impl PartialOrd for Entry {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    let adjacency = AdjacencyIndex::build(graph);
    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start.to_string(), 0.0);
    heap.push(Entry(start.to_string(), 0.0));

    while let Some(Entry(vertex, distance)) = heap.pop() {
        if distance > *distances.get(&vertex).unwrap_or(&f64::INFINITY) {
            continue;
        }

        for neighbor in adjacency.neighbors(&vertex) {
            let alt = distance + neighbor.weight;
            if alt < *distances.get(&neighbor.to).unwrap_or(&f64::INFINITY) {
                distances.insert(neighbor.to.clone(), alt);
                heap.push(Entry(neighbor.to.clone(), alt));
            }
        }
    }

    distances
}

#[test]
fn final_distances_match_reference_dijkstra() {
    let graph = demo_graph();
    let trace = run(&graph, "a");
    let reference = reference_distances(&graph, "a");

    for vertex in &graph.nodes {
        let expected = reference.get(vertex).copied().unwrap_or(f64::INFINITY);
        let actual = trace.distances[vertex];
        assert!(
            (actual - expected).abs() < 1e-9,
            "distance of {} diverged: {} vs {}",
            vertex,
            actual,
            expected
        );
    }
}

#[test]
fn recorded_distance_updates_are_monotonic() {
    let trace = run(&demo_graph(), "a");

    let mut last: HashMap<String, f64> = HashMap::new();
    for step in &trace.steps {
        if let StepKind::Update { vertex, distance, .. } = &step.kind {
            if let Some(previous) = last.get(vertex) {
                assert!(
                    distance < previous,
                    "distance of {} did not strictly decrease",
                    vertex
                );
            }
            last.insert(vertex.clone(), *distance);
        }
    }

    // Every recorded final value matches the trace's distance map.
    for (vertex, distance) in &last {
        assert_eq!(trace.distances[vertex], *distance);
    }
}

#[test]
fn accepted_sets_are_replay_independent() {
    let graph = demo_graph();
    let trace = run(&graph, "a");

    // Shadow Pre, rebuilt from the tagged step kinds alone.
    let mut pre: Predecessors = graph.nodes.iter().map(|v| (v.clone(), None)).collect();

    for step in &trace.steps {
        match &step.kind {
            StepKind::Update { vertex, via, .. } => {
                pre.insert(vertex.clone(), Some(via.clone()));
            }
            // Path result steps carry the path's own sets, and the init and
            // closing-reset steps carry none; everything else must equal a
            // fresh recomputation from Pre as of this step.
            StepKind::Init | StepKind::PathResult { .. } | StepKind::ResetColors => continue,
            _ => {}
        }

        let recomputed = AcceptedSets::from_predecessors(&pre, "a");
        assert_eq!(
            step.accepted_nodes, recomputed.nodes,
            "accepted nodes diverged at step {}",
            step.id
        );
        assert_eq!(
            step.accepted_edges, recomputed.edges,
            "accepted edges diverged at step {}",
            step.id
        );
    }
}

#[test]
fn traces_are_deterministic_across_runs() {
    let graph = demo_graph();

    let first = run(&graph, "a");
    let second = run(&graph, "a");

    assert_eq!(first.steps.len(), second.steps.len());
    for (left, right) in first.steps.iter().zip(second.steps.iter()) {
        assert_eq!(left.id, right.id);
        assert_eq!(left.pseudocode, right.pseudocode);
        assert_eq!(left.state_snapshot, right.state_snapshot);
        assert_eq!(left.highlight, right.highlight);
        assert_eq!(left.accepted_edges, right.accepted_edges);
    }
}

#[test]
fn every_reachable_vertex_gets_exactly_one_result_step() {
    let graph = demo_graph();
    let trace = run(&graph, "a");

    let mut results: HashMap<String, usize> = HashMap::new();
    for step in &trace.steps {
        if let StepKind::PathResult { vertex, .. } = &step.kind {
            *results.entry(vertex.clone()).or_default() += 1;
        }
    }

    // All six vertices are reachable; the start gets no result step.
    assert_eq!(results.len(), 5);
    assert!(!results.contains_key("a"));
    assert!(results.values().all(|&count| count == 1));
}

#[test]
fn unknown_start_produces_no_steps() {
    let graph = demo_graph();
    let adjacency = AdjacencyIndex::build(&graph);

    let result = StepTraceEngine::new(&graph, &adjacency, "nope").run();
    assert!(result.is_err());
}

#[test]
fn concurrent_runs_share_nothing_but_the_graph() {
    let graph = std::sync::Arc::new(demo_graph());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = std::sync::Arc::clone(&graph);
            std::thread::spawn(move || run(&graph, "a").steps.len())
        })
        .collect();

    let lengths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(lengths.windows(2).all(|w| w[0] == w[1]));
}
