//! Narration generation seam.
//!
//! Turning step text into a spoken-word asset happens out of band; the core
//! never blocks on it and every consumer tolerates an absent reference. The
//! trait exists so a deployment can plug in a real synthesizer while tests
//! and the default binary run without one.

use crate::models::Step;

/// Produces an asset reference (e.g. a URL) for a step's narration text, or
/// `None` when narration is unavailable.
pub trait NarrationGenerator: Send + Sync {
    fn generate(&self, text: &str) -> Option<String>;
}

/// Narration disabled: every step keeps an absent `narrationRef`.
#[derive(Debug, Default)]
pub struct DisabledNarration;

impl NarrationGenerator for DisabledNarration {
    fn generate(&self, _text: &str) -> Option<String> {
        None
    }
}

/// The text a generator narrates for one step: id, pseudocode and
/// explanation, concatenated.
pub fn narration_text(step: &Step) -> String {
    format!("Step {}. {}. {}", step.id, step.pseudocode, step.explanation)
}

/// Attaches narration references to a finished trace. Steps the generator
/// declines keep an absent reference.
pub fn attach_narration(steps: &mut [Step], generator: &dyn NarrationGenerator) {
    for step in steps.iter_mut() {
        step.narration_ref = generator.generate(&narration_text(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Highlight, StepKind};

    struct FixedNarration;

    impl NarrationGenerator for FixedNarration {
        fn generate(&self, text: &str) -> Option<String> {
            assert!(text.starts_with("Step "));
            Some("/voices/fixed.wav".to_string())
        }
    }

    fn step() -> Step {
        Step {
            id: "2.1".to_string(),
            pseudocode: "t := a".to_string(),
            explanation: "Take a out of Q".to_string(),
            state_snapshot: "Q = {}".to_string(),
            color_hint: "Color vertex a red".to_string(),
            highlight: Highlight::default(),
            accepted_nodes: vec![],
            accepted_edges: vec![],
            narration_ref: None,
            kind: StepKind::Select {
                vertex: "a".to_string(),
            },
        }
    }

    #[test]
    fn test_disabled_narration_leaves_refs_absent() {
        let mut steps = vec![step()];
        attach_narration(&mut steps, &DisabledNarration);
        assert!(steps[0].narration_ref.is_none());
    }

    #[test]
    fn test_generator_fills_refs() {
        let mut steps = vec![step()];
        attach_narration(&mut steps, &FixedNarration);
        assert_eq!(steps[0].narration_ref.as_deref(), Some("/voices/fixed.wav"));
    }

    #[test]
    fn test_narration_text_concatenates_fields() {
        let text = narration_text(&step());
        assert_eq!(text, "Step 2.1. t := a. Take a out of Q");
    }
}
