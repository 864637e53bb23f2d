//! stepgraph: an instructional shortest-path backend.
//!
//! Runs textbook Dijkstra over small registered graphs and emits a complete,
//! ordered, replayable trace of the algorithm's bookkeeping — tentative
//! distances, predecessor links, frontier and finalized set — annotated with
//! rendering hints, so a client can animate every decision the algorithm
//! makes.

pub mod api;
pub mod graph;
pub mod models;
pub mod registry;
pub mod services;

// Re-export core types
pub use graph::{
    AcceptedSets, AdjacencyIndex, StepRecorder, StepTraceEngine, Trace, TraceError, TraceState,
};
pub use models::{EdgeSpec, GraphSpec, Highlight, Step, StepKind};
pub use registry::{GraphRepository, InMemoryGraphRegistry};
pub use services::{DisabledNarration, NarrationGenerator};
