//! Step trace records.
//!
//! A run of the engine produces an ordered, append-only sequence of [`Step`]
//! records. Each step is self-contained: a rendering client may jump to any
//! index without replaying earlier steps, because every step carries the
//! accepted node/edge sets valid at that point.

#![allow(dead_code)]

use serde::Serialize;

/// What a step *is*, independent of its narration text.
///
/// The wire schema does not carry this tag; it exists so the engine and its
/// tests can reason about the trace without parsing explanation strings, and
/// so the intentionally duplicated candidate announcement is an explicit
/// no-op variant rather than two indistinguishable records.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// One of the five initialization steps.
    Init,

    /// A vertex was removed from the frontier as the minimum-distance member.
    Select { vertex: String },

    /// A vertex was added to the finalized set.
    Finalize { vertex: String },

    /// The candidate edge set H was materialized from the finalized vertex.
    CandidatesFound { vertex: String },

    /// Re-announcement of the same H with no state change. Deliberate no-op:
    /// downstream replay timing depends on both steps existing.
    CandidatesRevisit { vertex: String },

    /// An edge out of the finalized vertex is being considered.
    Consider {
        from: String,
        to: String,
        weight: f64,
    },

    /// A relaxation improved a tentative distance.
    Update {
        vertex: String,
        via: String,
        distance: f64,
    },

    /// A relaxation did not improve the tentative distance.
    NoChange { vertex: String },

    /// H was cleared at the end of an iteration.
    CandidatesCleared,

    /// Terminal marker, emitted only when every vertex was finalized.
    Complete,

    /// One reconstructed shortest path, for a single reachable vertex.
    PathResult {
        vertex: String,
        path: Vec<String>,
        distance: f64,
    },

    /// Clears lingering provisional highlighting before the final redraw.
    ResetColors,

    /// Full redraw of the accepted shortest-path tree.
    FinalTree,
}

/// Rendering hints attached to a step.
///
/// Collections are always present, possibly empty — a consumer never has to
/// handle an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    /// Vertices to highlight.
    pub nodes: Vec<String>,

    /// Edges to highlight, as "from-to" identifiers.
    pub edges: Vec<String>,

    /// Previously drawn edges to visually retract.
    pub removed_edges: Vec<String>,
}

impl Highlight {
    /// Highlight a single vertex.
    pub fn node(id: impl Into<String>) -> Self {
        Self {
            nodes: vec![id.into()],
            ..Self::default()
        }
    }

    /// Highlight a set of edges.
    pub fn edges(edges: Vec<String>) -> Self {
        Self {
            edges,
            ..Self::default()
        }
    }
}

/// One record of the replayable trace.
///
/// The serialized shape is the contract with the rendering client and must
/// stay field-for-field stable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Hierarchical step identifier, e.g. "3.2".
    pub id: String,

    /// Pseudocode line this step corresponds to.
    pub pseudocode: String,

    /// Natural-language explanation of the step.
    pub explanation: String,

    /// Textual snapshot of the algorithm state (Dist, Pre, Q, T, H).
    pub state_snapshot: String,

    /// Short color/action description for the renderer.
    pub color_hint: String,

    /// Rendering hints; collections present even when empty.
    pub highlight: Highlight,

    /// Vertices of the currently accepted shortest-path tree.
    pub accepted_nodes: Vec<String>,

    /// Edges of the currently accepted shortest-path tree.
    pub accepted_edges: Vec<String>,

    /// Optional reference to a generated narration asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration_ref: Option<String>,

    /// Tagged step variant; internal, not part of the wire schema.
    #[serde(skip_serializing)]
    pub kind: StepKind,
}
