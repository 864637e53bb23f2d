pub mod graph;
pub mod step;

pub use graph::{edge_id, EdgeSpec, GraphSpec};
pub use step::{Highlight, Step, StepKind};
