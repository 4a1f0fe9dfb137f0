use std::sync::Arc;

use tracing::{debug, error};

use crate::constants::{
    DEFAULT_DECISION_THRESHOLD, DETECTION_PREVIEW_CHARS, FAKE_STYLE_EXPLANATION,
    REAL_STYLE_EXPLANATION, UNCERTAIN_STYLE_EXPLANATION, preview, round_probability,
};

use super::config::ClassifierConfig;
use super::error::ClassifierError;
use super::model::{BertStyleModel, StyleModel};
use super::types::{Detection, StyleLabel, StyleProbabilities};

/// Maps style probabilities to a label, confidence and explanation.
///
/// Sensational wins first; both comparisons are strict, so a probability equal
/// to `threshold` never produces REAL or FAKE.
pub fn classify_style(
    probabilities: &StyleProbabilities,
    threshold: f64,
) -> (StyleLabel, f64, &'static str) {
    if probabilities.sensational_style > threshold {
        (
            StyleLabel::Fake,
            probabilities.sensational_style,
            FAKE_STYLE_EXPLANATION,
        )
    } else if probabilities.formal_style > threshold {
        (
            StyleLabel::Real,
            probabilities.formal_style,
            REAL_STYLE_EXPLANATION,
        )
    } else {
        (
            StyleLabel::Uncertain,
            probabilities.max(),
            UNCERTAIN_STYLE_EXPLANATION,
        )
    }
}

/// Fake news detector: a [`StyleModel`] plus the fixed decision policy.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Clone)]
pub struct StyleDetector {
    model: Arc<dyn StyleModel>,
    threshold: f64,
}

impl std::fmt::Debug for StyleDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleDetector")
            .field("backend", &self.model.backend())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl StyleDetector {
    /// Loads the BERT backend described by `config`.
    pub fn load(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        let model = BertStyleModel::load(config)?;
        Ok(Self::new(Arc::new(model), config.decision_threshold))
    }

    pub fn new(model: Arc<dyn StyleModel>, threshold: f64) -> Self {
        Self { model, threshold }
    }

    pub fn with_default_threshold(model: Arc<dyn StyleModel>) -> Self {
        Self::new(model, DEFAULT_DECISION_THRESHOLD)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn backend(&self) -> String {
        self.model.backend()
    }

    pub fn predict(&self, text: &str) -> Detection {
        let text_preview = preview(text, DETECTION_PREVIEW_CHARS);

        match self.model.style_probabilities(text) {
            Ok(probabilities) => {
                let (label, confidence, explanation) =
                    classify_style(&probabilities, self.threshold);

                debug!(
                    label = %label,
                    formal = probabilities.formal_style,
                    sensational = probabilities.sensational_style,
                    "Style classified"
                );

                Detection::Classified {
                    label,
                    confidence: round_probability(confidence),
                    probabilities: probabilities.rounded(),
                    explanation,
                    text_preview,
                }
            }
            Err(e) => {
                error!(error = %e, "Prediction error");
                Detection::Failed {
                    reason: e.to_string(),
                    text_preview,
                }
            }
        }
    }

    /// Predicts each non-blank text (trimmed), preserving order.
    pub fn predict_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Detection> {
        texts
            .iter()
            .map(|text| text.as_ref().trim())
            .filter(|text| !text.is_empty())
            .map(|text| self.predict(text))
            .collect()
    }
}
