//! Step assembly.

#![allow(dead_code)]

use crate::models::{Highlight, Step, StepKind};

use super::accepted::AcceptedSets;

/// Accumulates the ordered step sequence of one run.
///
/// Omitted highlight or accepted payloads become empty collections, never
/// absent fields; the narration reference starts out absent and is attached
/// out of band after the trace is complete.
#[derive(Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
}

impl StepRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one complete step record.
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        &mut self,
        kind: StepKind,
        id: impl Into<String>,
        pseudocode: impl Into<String>,
        explanation: impl Into<String>,
        state_snapshot: impl Into<String>,
        color_hint: impl Into<String>,
        highlight: Option<Highlight>,
        accepted: Option<AcceptedSets>,
    ) {
        let accepted = accepted.unwrap_or_default();

        self.steps.push(Step {
            id: id.into(),
            pseudocode: pseudocode.into(),
            explanation: explanation.into(),
            state_snapshot: state_snapshot.into(),
            color_hint: color_hint.into(),
            highlight: highlight.unwrap_or_default(),
            accepted_nodes: accepted.nodes,
            accepted_edges: accepted.edges,
            narration_ref: None,
            kind,
        });
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the recorder, yielding the ordered step sequence.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
