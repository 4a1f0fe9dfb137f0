use serde::Serialize;

use crate::constants::{FORMAL_STYLE_INDEX, NUM_STYLE_LABELS, SENSATIONAL_STYLE_INDEX, round_probability};

use super::error::ClassifierError;

/// Three-way label derived from the style probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleLabel {
    Real,
    Fake,
    Uncertain,
}

impl StyleLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleLabel::Real => "REAL",
            StyleLabel::Fake => "FAKE",
            StyleLabel::Uncertain => "UNCERTAIN",
        }
    }
}

impl std::fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Softmax output of the classification head.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleProbabilities {
    pub formal_style: f64,
    pub sensational_style: f64,
}

impl StyleProbabilities {
    pub const ZERO: Self = Self {
        formal_style: 0.0,
        sensational_style: 0.0,
    };

    pub fn new(formal_style: f64, sensational_style: f64) -> Self {
        Self {
            formal_style,
            sensational_style,
        }
    }

    /// Reads `[formal, sensational]` from a softmax row.
    pub fn from_softmax(probs: &[f32]) -> Result<Self, ClassifierError> {
        if probs.len() != NUM_STYLE_LABELS {
            return Err(ClassifierError::InferenceFailed {
                reason: format!(
                    "expected {} probabilities, got {}",
                    NUM_STYLE_LABELS,
                    probs.len()
                ),
            });
        }

        Ok(Self {
            formal_style: f64::from(probs[FORMAL_STYLE_INDEX]),
            sensational_style: f64::from(probs[SENSATIONAL_STYLE_INDEX]),
        })
    }

    pub fn max(&self) -> f64 {
        self.formal_style.max(self.sensational_style)
    }

    pub fn sum(&self) -> f64 {
        self.formal_style + self.sensational_style
    }

    /// Copy rounded for reporting.
    pub fn rounded(&self) -> Self {
        Self {
            formal_style: round_probability(self.formal_style),
            sensational_style: round_probability(self.sensational_style),
        }
    }
}

/// Outcome of running the detector on one text.
///
/// Inference failures are a value, not an error: the analyzer reports them
/// as an `ERROR` model result and carries on with the other scorers.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    Classified {
        label: StyleLabel,
        /// Rounded to 4 decimals.
        confidence: f64,
        /// Rounded to 4 decimals.
        probabilities: StyleProbabilities,
        explanation: &'static str,
        text_preview: String,
    },
    Failed {
        reason: String,
        text_preview: String,
    },
}

impl Detection {
    pub fn is_failed(&self) -> bool {
        matches!(self, Detection::Failed { .. })
    }

    pub fn text_preview(&self) -> &str {
        match self {
            Detection::Classified { text_preview, .. } | Detection::Failed { text_preview, .. } => {
                text_preview
            }
        }
    }
}
