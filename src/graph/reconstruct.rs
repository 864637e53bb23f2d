//! Shortest-path reconstruction steps.
//!
//! After the main loop terminates, every reachable vertex gets one result
//! step describing its start-to-vertex path, followed by two closing steps:
//! a transient-color reset and a full redraw of the accepted tree.

use crate::models::{edge_id, GraphSpec, Highlight, StepKind};

use super::accepted::AcceptedSets;
use super::engine::{fmt_weight, TraceState};
use super::recorder::StepRecorder;

/// Emits one result step per reachable non-start vertex plus the two closing
/// redraw steps. `major` is the last major id of the main loop.
pub fn emit_path_results(
    graph: &GraphSpec,
    state: &TraceState,
    start: &str,
    major: u32,
    recorder: &mut StepRecorder,
) {
    for vertex in &graph.nodes {
        if vertex == start || state.dist_of(vertex).is_infinite() {
            continue;
        }

        let path = walk_back(state, start, vertex);
        let path_edges: Vec<String> = path
            .windows(2)
            .map(|pair| edge_id(&pair[0], &pair[1]))
            .collect();

        let path_text = path.join("-");
        let distance = state.dist_of(vertex);

        recorder.record(
            StepKind::PathResult {
                vertex: vertex.clone(),
                path: path.clone(),
                distance,
            },
            format!("{}.{}", major + 1, vertex),
            format!("Result: {}", path_text),
            format!(
                "Shortest path from {} to {}: {} (total weight = {})",
                start,
                vertex,
                path_text,
                fmt_weight(distance)
            ),
            format!("Dist[{}] = {}", vertex, fmt_weight(distance)),
            "Show the shortest path result",
            Some(Highlight {
                nodes: path.clone(),
                edges: path_edges.clone(),
                removed_edges: vec![],
            }),
            Some(AcceptedSets {
                nodes: path,
                edges: path_edges,
            }),
        );
    }

    recorder.record(
        StepKind::ResetColors,
        format!("{}.5", major),
        "Reset transient colors",
        "Turn all yellow, red and purple edges back to black.",
        "Preparing to show the result.",
        "Reset transient edges",
        Some(Highlight::default()),
        None,
    );

    let accepted = state.accepted(start);
    recorder.record(
        StepKind::FinalTree,
        format!("{}", major + 1),
        "Result: shortest-path tree",
        "Show the complete shortest-path tree in blue.",
        "The tree's edges and vertices are redrawn in order.",
        "Redraw the result",
        Some(Highlight {
            nodes: accepted.nodes.clone(),
            edges: accepted.edges.clone(),
            removed_edges: vec![],
        }),
        Some(accepted),
    );
}

/// Walks the predecessor chain from `vertex` back to `start` and returns the
/// forward start-to-vertex sequence.
fn walk_back(state: &TraceState, start: &str, vertex: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = vertex.to_string();

    let reached_start = loop {
        if current == start {
            break true;
        }
        chain.push(current.clone());
        match state.pre.get(&current).cloned().flatten() {
            Some(p) => current = p,
            None => break false,
        }
    };

    if reached_start {
        chain.push(start.to_string());
    }

    chain.reverse();
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EdgeSpec, Step};

    fn state_with(
        dist: &[(&str, f64)],
        pre: &[(&str, Option<&str>)],
    ) -> TraceState {
        TraceState {
            dist: dist.iter().map(|(v, d)| (v.to_string(), *d)).collect(),
            pre: pre
                .iter()
                .map(|(v, p)| (v.to_string(), p.map(|s| s.to_string())))
                .collect(),
            frontier: vec![],
            finalized: vec![],
            candidates: vec![],
        }
    }

    fn emit(graph: &GraphSpec, state: &TraceState) -> Vec<Step> {
        let mut recorder = StepRecorder::new();
        emit_path_results(graph, state, "a", 3, &mut recorder);
        recorder.into_steps()
    }

    #[test]
    fn test_walk_back_builds_forward_path() {
        let state = state_with(
            &[("a", 0.0), ("b", 1.0), ("c", 2.0)],
            &[("a", None), ("b", Some("a")), ("c", Some("b"))],
        );

        assert_eq!(walk_back(&state, "a", "c"), vec!["a", "b", "c"]);
        assert_eq!(walk_back(&state, "a", "b"), vec!["a", "b"]);
    }

    #[test]
    fn test_unreachable_vertices_get_no_result_step() {
        let graph = GraphSpec::new(
            vec!["a".to_string(), "b".to_string(), "island".to_string()],
            vec![EdgeSpec::new("a", "b", 1.0)],
        );
        let state = state_with(
            &[("a", 0.0), ("b", 1.0), ("island", f64::INFINITY)],
            &[("a", None), ("b", Some("a")), ("island", None)],
        );

        let steps = emit(&graph, &state);

        // One result for b, then reset and final redraw.
        assert_eq!(steps.len(), 3);
        assert!(
            matches!(&steps[0].kind, StepKind::PathResult { vertex, .. } if vertex == "b")
        );
        assert_eq!(steps[1].kind, StepKind::ResetColors);
        assert_eq!(steps[2].kind, StepKind::FinalTree);
    }

    #[test]
    fn test_result_step_carries_path_as_accepted_sets() {
        let graph = GraphSpec::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec![EdgeSpec::new("a", "b", 1.0), EdgeSpec::new("b", "c", 1.0)],
        );
        let state = state_with(
            &[("a", 0.0), ("b", 1.0), ("c", 2.0)],
            &[("a", None), ("b", Some("a")), ("c", Some("b"))],
        );

        let steps = emit(&graph, &state);
        let result_c = steps
            .iter()
            .find(|s| matches!(&s.kind, StepKind::PathResult { vertex, .. } if vertex == "c"))
            .unwrap();

        assert_eq!(result_c.id, "4.c");
        assert_eq!(result_c.accepted_nodes, vec!["a", "b", "c"]);
        assert_eq!(result_c.accepted_edges, vec!["a-b", "b-c"]);
        assert_eq!(result_c.highlight.nodes, vec!["a", "b", "c"]);
        assert!(result_c.explanation.contains("total weight = 2"));
    }

    #[test]
    fn test_closing_step_ids() {
        let graph = GraphSpec::new(vec!["a".to_string()], vec![]);
        let state = state_with(&[("a", 0.0)], &[("a", None)]);

        let steps = emit(&graph, &state);
        assert_eq!(steps[steps.len() - 2].id, "3.5");
        assert_eq!(steps[steps.len() - 1].id, "4");
    }
}
