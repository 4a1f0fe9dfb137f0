use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::StyleLabel;

/// Label a single scorer assigns to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Prediction {
    Real,
    Fake,
    Uncertain,
    /// The scorer could not run (no model loaded).
    Unknown,
    /// The scorer ran and failed.
    Error,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Real => "REAL",
            Prediction::Fake => "FAKE",
            Prediction::Uncertain => "UNCERTAIN",
            Prediction::Unknown => "UNKNOWN",
            Prediction::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StyleLabel> for Prediction {
    fn from(label: StyleLabel) -> Self {
        match label {
            StyleLabel::Real => Prediction::Real,
            StyleLabel::Fake => Prediction::Fake,
            StyleLabel::Uncertain => Prediction::Uncertain,
        }
    }
}

/// Final ensemble verdict (only two outcomes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Real,
    Fake,
}

impl From<Verdict> for Prediction {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Real => Prediction::Real,
            Verdict::Fake => Prediction::Fake,
        }
    }
}

/// A numeric detail value; counts serialize as JSON integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Count(u64),
    Score(f64),
}

impl DetailValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            DetailValue::Count(count) => *count as f64,
            DetailValue::Score(score) => *score,
        }
    }
}

impl From<usize> for DetailValue {
    fn from(count: usize) -> Self {
        DetailValue::Count(count as u64)
    }
}

impl From<f64> for DetailValue {
    fn from(score: f64) -> Self {
        DetailValue::Score(score)
    }
}

pub type ModelDetails = BTreeMap<String, DetailValue>;

/// Verdict of one scorer, tagged with the scorer's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub model_name: String,
    pub prediction: Prediction,
    pub confidence: f64,
    #[serde(default)]
    pub details: ModelDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelResult {
    pub fn new(model_name: impl Into<String>, prediction: Prediction, confidence: f64) -> Self {
        Self {
            model_name: model_name.into(),
            prediction,
            confidence,
            details: ModelDetails::new(),
            explanation: None,
            error: None,
        }
    }

    pub fn with_detail(mut self, key: &str, value: impl Into<DetailValue>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn detail(&self, key: &str) -> Option<f64> {
        self.details.get(key).map(DetailValue::as_f64)
    }
}

/// Body of `POST /analyze`. A missing `text` is treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalysisRequest {
    /// Returns the trimmed text, or `None` when it is missing or blank.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub final_verdict: Verdict,
    pub confidence: f64,
    pub model_results: Vec<ModelResult>,
    pub text_preview: String,
}
