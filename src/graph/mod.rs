//! The trace-generating shortest-path core.
//!
//! This module provides:
//! - **AdjacencyIndex**: deduplicated, symmetric adjacency over an edge list
//! - **StepTraceEngine**: Dijkstra with a replayable step trace
//! - **AcceptedSets**: shortest-path-tree sets derived from predecessors
//! - **StepRecorder**: self-contained step assembly
//! - **reconstruct**: per-vertex path result steps after the main loop
//!
//! # Example
//!
//! ```ignore
//! use stepgraph::graph::{AdjacencyIndex, StepTraceEngine};
//!
//! let adjacency = AdjacencyIndex::build(&graph);
//! let trace = StepTraceEngine::new(&graph, &adjacency, "a").run()?;
//! for step in &trace.steps {
//!     println!("{}: {}", step.id, step.explanation);
//! }
//! ```

pub mod accepted;
pub mod adjacency;
pub mod engine;
pub mod reconstruct;
pub mod recorder;

// Re-exports
pub use accepted::{accepted_edges, accepted_nodes, AcceptedSets};
pub use adjacency::{AdjacencyIndex, Neighbor, WEIGHT_EPSILON};
pub use engine::{Distances, Predecessors, StepTraceEngine, Trace, TraceError, TraceState};
pub use recorder::StepRecorder;
