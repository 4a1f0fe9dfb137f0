use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::ClassifierError;
use super::model::StyleModel;
use super::types::StyleProbabilities;

/// Deterministic [`StyleModel`] for tests.
#[derive(Debug)]
pub struct MockStyleModel {
    outcome: Result<StyleProbabilities, String>,
    calls: AtomicUsize,
}

impl MockStyleModel {
    /// Always returns `formal_style = formal`, `sensational_style = 1 - formal`.
    pub fn with_formal(formal: f64) -> Self {
        Self::fixed(StyleProbabilities::new(formal, 1.0 - formal))
    }

    pub fn fixed(probabilities: StyleProbabilities) -> Self {
        Self {
            outcome: Ok(probabilities),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails inference with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StyleModel for MockStyleModel {
    fn style_probabilities(&self, _text: &str) -> Result<StyleProbabilities, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(|reason| ClassifierError::InferenceFailed { reason })
    }

    fn backend(&self) -> String {
        "mock".to_string()
    }
}
