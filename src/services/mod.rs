//! Collaborating services around the trace core.
//!
//! Currently just the narration seam: an optional, out-of-band generator
//! that turns a step's text into a spoken-word asset reference.

pub mod narration;

pub use narration::{attach_narration, narration_text, DisabledNarration, NarrationGenerator};
