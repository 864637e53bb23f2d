//! The trace-generating shortest-path engine.
//!
//! Runs textbook Dijkstra over a registered graph while emitting one step
//! record per piece of internal bookkeeping, so a client can replay the
//! algorithm's reasoning. The loop is a deliberate linear frontier scan
//! rather than a heap: selection order (and therefore the trace) must be
//! stable, with distance ties broken by earliest insertion into Q.

#![allow(dead_code)]

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{edge_id, EdgeSpec, GraphSpec, Highlight, Step, StepKind};

use super::accepted::AcceptedSets;
use super::adjacency::AdjacencyIndex;
use super::reconstruct;
use super::recorder::StepRecorder;

/// Tentative distance per vertex.
pub type Distances = BTreeMap<String, f64>;

/// Predecessor per vertex; `None` is the sentinel for "no predecessor yet".
pub type Predecessors = BTreeMap<String, Option<String>>;

/// Errors the engine can surface before emitting any step.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("start vertex '{0}' does not exist in the graph")]
    UnknownStartVertex(String),
}

/// The complete outcome of one run: the ordered step sequence plus the final
/// distance and predecessor maps for callers that want the raw result.
#[derive(Debug)]
pub struct Trace {
    /// Ordered, append-only step sequence.
    pub steps: Vec<Step>,

    /// Final shortest distances (∞ for unreachable vertices).
    pub distances: Distances,

    /// Final predecessor map.
    pub predecessors: Predecessors,
}

/// The algorithm's mutable bookkeeping, threaded explicitly through each
/// phase so phases stay independently testable.
#[derive(Debug, Default)]
pub struct TraceState {
    /// Tentative distances (Dist).
    pub dist: Distances,

    /// Predecessor links (Pre).
    pub pre: Predecessors,

    /// Discovered, not-yet-finalized vertices in insertion order (Q).
    pub frontier: Vec<String>,

    /// Finalized vertices in finalization order (T).
    pub finalized: Vec<String>,

    /// Candidate edges of the current iteration (H); cleared after relaxing.
    pub candidates: Vec<EdgeSpec>,
}

impl TraceState {
    /// Tentative distance of a vertex, ∞ when undiscovered.
    pub fn dist_of(&self, vertex: &str) -> f64 {
        self.dist.get(vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Current accepted shortest-path-tree sets.
    pub fn accepted(&self, start: &str) -> AcceptedSets {
        AcceptedSets::from_predecessors(&self.pre, start)
    }
}

/// Runs the algorithm's phases (init, select, finalize, relax) and drives
/// step emission.
pub struct StepTraceEngine<'a> {
    graph: &'a GraphSpec,
    adjacency: &'a AdjacencyIndex,
    start: &'a str,
}

impl<'a> StepTraceEngine<'a> {
    /// Creates an engine over a graph, its adjacency index, and a start
    /// vertex.
    pub fn new(graph: &'a GraphSpec, adjacency: &'a AdjacencyIndex, start: &'a str) -> Self {
        Self {
            graph,
            adjacency,
            start,
        }
    }

    /// Runs the algorithm to completion, returning the full trace.
    ///
    /// Fails with [`TraceError::UnknownStartVertex`] before emitting any step
    /// when the start vertex is not in the declared vertex set. Once past
    /// validation the run is total and deterministic.
    pub fn run(&self) -> Result<Trace, TraceError> {
        if !self.graph.contains_vertex(self.start) {
            return Err(TraceError::UnknownStartVertex(self.start.to_string()));
        }

        let mut state = TraceState::default();
        let mut recorder = StepRecorder::new();

        let mut major = 1u32;
        self.init(&mut state, &mut recorder, major);

        while !state.frontier.is_empty() {
            major += 1;
            let mut minor = 1u32;

            let t = self.select(&mut state, &mut recorder, major, &mut minor);
            self.finalize(&mut state, &mut recorder, major, &mut minor, &t);
            self.announce_candidates(&mut state, &mut recorder, major, &mut minor, &t);
            self.relax_candidates(&mut state, &mut recorder, major, &mut minor);
            self.clear_candidates(&mut state, &mut recorder, major, &mut minor);
        }

        // The marker only appears when every declared vertex was settled;
        // disconnected graphs end without it.
        if state.finalized.len() == self.graph.nodes.len() {
            recorder.record(
                StepKind::Complete,
                format!("{}.1", major),
                "Dijkstra finished",
                "The algorithm is complete. Every vertex has been finalized.",
                format!("T = {{{}}}", fmt_list(&state.finalized)),
                "Keep the graph as it is, no repaint",
                Some(Highlight::default()),
                Some(state.accepted(self.start)),
            );
        }

        reconstruct::emit_path_results(self.graph, &state, self.start, major, &mut recorder);

        Ok(Trace {
            steps: recorder.into_steps(),
            distances: state.dist,
            predecessors: state.pre,
        })
    }

    /// Initialization phase: T, Dist/Pre, the start distance, Q, and H, one
    /// step each, all under the first major id.
    pub(crate) fn init(&self, state: &mut TraceState, recorder: &mut StepRecorder, major: u32) {
        let id = major.to_string();

        recorder.record(
            StepKind::Init,
            id.clone(),
            "T := {}",
            "Initialize the finalized set T as empty",
            "T = {}",
            "No highlight",
            None,
            None,
        );

        for vertex in &self.graph.nodes {
            state.dist.insert(vertex.clone(), f64::INFINITY);
            state.pre.insert(vertex.clone(), None);
        }
        recorder.record(
            StepKind::Init,
            id.clone(),
            "For v ∈ V: Dist[v] := ∞; Pre[v] := None",
            "Set every Dist to ∞ and every Pre to None",
            format!(
                "Dist = {{{}}}\nPre = {{{}}}",
                fmt_dist(&state.dist),
                fmt_pre(&state.pre)
            ),
            "No highlight",
            None,
            None,
        );

        state.dist.insert(self.start.to_string(), 0.0);
        recorder.record(
            StepKind::Init,
            id.clone(),
            format!("Dist[{}] = 0, Pre[{}] = None", self.start, self.start),
            format!("Set Dist[{}] = 0", self.start),
            format!(
                "Dist = {{{}}}\nPre = {{{}}}",
                fmt_dist(&state.dist),
                fmt_pre(&state.pre)
            ),
            "No highlight",
            Some(Highlight::node(self.start)),
            None,
        );

        state.frontier.push(self.start.to_string());
        recorder.record(
            StepKind::Init,
            id.clone(),
            format!("Q := ∅; put({}, Q)", self.start),
            format!("Initialize the frontier Q = {{{}}}", self.start),
            format!("Q = {{{}}}", fmt_list(&state.frontier)),
            "No highlight",
            Some(Highlight::node(self.start)),
            None,
        );

        recorder.record(
            StepKind::Init,
            id,
            "H := ∅",
            "Initialize the candidate edge set H",
            "H = {}",
            "No highlight",
            None,
            None,
        );
    }

    /// Select phase: removes the minimum-distance frontier member, ties
    /// broken by earliest insertion into Q.
    pub(crate) fn select(
        &self,
        state: &mut TraceState,
        recorder: &mut StepRecorder,
        major: u32,
        minor: &mut u32,
    ) -> String {
        let mut best = 0;
        for index in 1..state.frontier.len() {
            if state.dist_of(&state.frontier[index]) < state.dist_of(&state.frontier[best]) {
                best = index;
            }
        }
        let t = state.frontier.remove(best);

        recorder.record(
            StepKind::Select { vertex: t.clone() },
            next_id(major, minor),
            format!("t := get(min(Dist[Q])) := {}", t),
            format!("Take vertex {} with the smallest Dist out of Q", t),
            format!("Q = {{{}}}", fmt_list(&state.frontier)),
            format!("Color vertex {} red", t),
            Some(Highlight::node(t.clone())),
            Some(state.accepted(self.start)),
        );

        t
    }

    /// Finalize phase: adds t to T, highlights its accepted predecessor edge
    /// and lists stale edges into t for retraction.
    ///
    /// The start vertex has no predecessor, so its finalize step highlights
    /// no edge and retracts nothing (nothing can have been drawn yet).
    pub(crate) fn finalize(
        &self,
        state: &mut TraceState,
        recorder: &mut StepRecorder,
        major: u32,
        minor: &mut u32,
        t: &str,
    ) {
        let predecessor = state.pre.get(t).cloned().flatten();
        state.finalized.push(t.to_string());

        let (highlight, color_hint) = match predecessor {
            Some(ref p) => {
                let stale: Vec<String> = self
                    .graph
                    .edges
                    .iter()
                    .filter(|e| e.to == t && e.from != *p)
                    .map(|e| e.id())
                    .collect();

                (
                    Highlight {
                        nodes: vec![],
                        edges: vec![edge_id(p, t)],
                        removed_edges: stale,
                    },
                    format!(
                        "Turn vertex {} blue (shortest edge {}-{}), retract the losing edges",
                        t, p, t
                    ),
                )
            }
            None => (
                Highlight::default(),
                format!("Turn vertex {} blue", t),
            ),
        };

        recorder.record(
            StepKind::Finalize {
                vertex: t.to_string(),
            },
            next_id(major, minor),
            format!("Append(T, {})", t),
            format!("Finalize vertex {} and add it to T", t),
            format!("T = {{{}}}", fmt_list(&state.finalized)),
            color_hint,
            Some(highlight),
            Some(state.accepted(self.start)),
        );
    }

    /// Candidate phase: materializes H from t's adjacency and emits two
    /// steps over the unchanged set — the discovery announcement and its
    /// deliberate no-op re-announcement. Replay timing depends on both.
    pub(crate) fn announce_candidates(
        &self,
        state: &mut TraceState,
        recorder: &mut StepRecorder,
        major: u32,
        minor: &mut u32,
        t: &str,
    ) {
        state.candidates = self.adjacency.candidate_edges(t);

        let listing = fmt_candidates(&state.candidates);
        let edge_ids: Vec<String> = state.candidates.iter().map(|e| e.id()).collect();

        recorder.record(
            StepKind::CandidatesFound {
                vertex: t.to_string(),
            },
            next_id(major, minor),
            format!("For e ∈ E if e.From = {} → push(H, e)", t),
            format!("Collect the edges leaving {}: {}", t, listing),
            format!("H = {{{}}}", listing),
            format!("Color the edges {{{}}} red", listing),
            Some(Highlight::edges(edge_ids.clone())),
            Some(state.accepted(self.start)),
        );

        recorder.record(
            StepKind::CandidatesRevisit {
                vertex: t.to_string(),
            },
            next_id(major, minor),
            "For e ∈ H",
            "Walk the edges of H one by one",
            format!("H = {{{}}}", listing),
            format!("Keep the edges {{{}}} red", listing),
            Some(Highlight::edges(edge_ids)),
            Some(state.accepted(self.start)),
        );
    }

    /// Relax phase: considers each candidate edge in adjacency order. Edges
    /// into already-finalized vertices are skipped silently, with no step.
    pub(crate) fn relax_candidates(
        &self,
        state: &mut TraceState,
        recorder: &mut StepRecorder,
        major: u32,
        minor: &mut u32,
    ) {
        let candidates = state.candidates.clone();

        for edge in &candidates {
            let (u, v, w) = (&edge.from, &edge.to, edge.weight);

            if state.finalized.iter().any(|f| f == v) {
                continue;
            }

            recorder.record(
                StepKind::Consider {
                    from: u.clone(),
                    to: v.clone(),
                    weight: w,
                },
                next_id(major, minor),
                format!("Consider edge ({},{},{})", u, v, w),
                format!("Examining edge {}->{} (weight {})", u, v, w),
                format!(
                    "Dist = {{{}}}; Pre = {{{}}}",
                    fmt_dist(&state.dist),
                    fmt_pre(&state.pre)
                ),
                format!("Highlight edge {}-{}", u, v),
                Some(Highlight {
                    nodes: vec![v.clone()],
                    edges: vec![edge.id()],
                    removed_edges: vec![],
                }),
                Some(state.accepted(self.start)),
            );

            let du = state.dist_of(u);
            let dv = state.dist_of(v);
            let alt = if du.is_infinite() {
                f64::INFINITY
            } else {
                du + w
            };

            if alt < dv {
                state.dist.insert(v.clone(), alt);
                state.pre.insert(v.clone(), Some(u.clone()));
                if !state.frontier.iter().any(|q| q == v) {
                    state.frontier.push(v.clone());
                }

                recorder.record(
                    StepKind::Update {
                        vertex: v.clone(),
                        via: u.clone(),
                        distance: alt,
                    },
                    next_id(major, minor),
                    format!(
                        "Dist[{}] = min({}, {} + {}) = {}",
                        v,
                        fmt_weight(dv),
                        fmt_weight(du),
                        w,
                        alt
                    ),
                    format!("Update Dist[{}] = {}, Pre[{}] = {}", v, alt, v, u),
                    format!(
                        "Dist = {{{}}}\nPre = {{{}}}\nQ = {{{}}}",
                        fmt_dist(&state.dist),
                        fmt_pre(&state.pre),
                        fmt_list(&state.frontier)
                    ),
                    format!(
                        "Edge {}-{} and vertex {} turn purple (Dist updated)",
                        u, v, v
                    ),
                    Some(Highlight {
                        nodes: vec![v.clone()],
                        edges: vec![edge.id()],
                        removed_edges: vec![],
                    }),
                    Some(state.accepted(self.start)),
                );
            } else {
                recorder.record(
                    StepKind::NoChange { vertex: v.clone() },
                    next_id(major, minor),
                    format!("Dist[{}] ≤ Dist[{}] + {}", v, u, w),
                    format!("No update to Dist[{}]", v),
                    format!(
                        "Dist = {{{}}}\nPre = {{{}}}",
                        fmt_dist(&state.dist),
                        fmt_pre(&state.pre)
                    ),
                    "No edge chosen (back to default)",
                    None,
                    Some(state.accepted(self.start)),
                );
            }
        }
    }

    /// Clears H at the end of an iteration.
    pub(crate) fn clear_candidates(
        &self,
        state: &mut TraceState,
        recorder: &mut StepRecorder,
        major: u32,
        minor: &mut u32,
    ) {
        state.candidates.clear();

        recorder.record(
            StepKind::CandidatesCleared,
            next_id(major, minor),
            "H := ∅",
            "Reset H to empty",
            "H = {}",
            "No highlight",
            None,
            Some(state.accepted(self.start)),
        );
    }
}

fn next_id(major: u32, minor: &mut u32) -> String {
    let id = format!("{}.{}", major, minor);
    *minor += 1;
    id
}

pub(crate) fn fmt_weight(weight: f64) -> String {
    if weight.is_infinite() {
        "∞".to_string()
    } else {
        format!("{}", weight)
    }
}

pub(crate) fn fmt_list(items: &[String]) -> String {
    items.join(", ")
}

fn fmt_dist(dist: &Distances) -> String {
    dist.iter()
        .map(|(vertex, d)| format!("{}:{}", vertex, fmt_weight(*d)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fmt_pre(pre: &Predecessors) -> String {
    pre.iter()
        .map(|(vertex, p)| format!("{}:{}", vertex, p.as_deref().unwrap_or("None")))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fmt_candidates(edges: &[EdgeSpec]) -> String {
    edges
        .iter()
        .map(|e| format!("({},{},{})", e.from, e.to, fmt_weight(e.weight)))
        .collect::<Vec<_>>()
        .join(", ")
}
