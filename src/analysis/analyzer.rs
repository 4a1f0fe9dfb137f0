use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::classifier::{Detection, StyleDetector, StyleProbabilities};
use crate::constants::{
    CUSTOM_MODEL_NAME, DETECTION_PREVIEW_CHARS, RESPONSE_PREVIEW_CHARS, UNLOADED_MODEL_CONFIDENCE,
    UNLOADED_MODEL_ERROR, preview,
};

use super::aggregate::aggregate;
use super::config::HeuristicsConfig;
use super::error::AnalysisError;
use super::keyword::analyze_keywords;
use super::length::analyze_length;
use super::types::{AnalysisResponse, ModelResult, Prediction};

/// Fans one text out to the custom model and both heuristics, then votes.
///
/// Build it once at startup and share it behind an `Arc`; it holds no
/// per-request state.
#[derive(Debug, Clone)]
pub struct NewsAnalyzer {
    detector: Option<Arc<StyleDetector>>,
    heuristics: Arc<HeuristicsConfig>,
}

impl NewsAnalyzer {
    pub fn new(detector: Option<StyleDetector>, heuristics: HeuristicsConfig) -> Self {
        match &detector {
            Some(d) => info!(backend = %d.backend(), "Custom model loaded successfully"),
            None => warn!("Custom model not loaded, its slot will report UNKNOWN"),
        }

        Self {
            detector: detector.map(Arc::new),
            heuristics: Arc::new(heuristics),
        }
    }

    /// Analyzer with the default heuristics and no custom model.
    pub fn heuristics_only() -> Self {
        Self::new(None, HeuristicsConfig::default())
    }

    pub fn models_loaded(&self) -> usize {
        usize::from(self.detector.is_some())
    }

    /// Runs all three scorers on the trimmed `text` and aggregates them.
    ///
    /// The classifier runs on the blocking pool while the heuristics run here.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResponse, AnalysisError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        info!(preview = %preview(text, DETECTION_PREVIEW_CHARS), "Analyzing text");

        let custom_task = self.detector.clone().map(|detector| {
            let owned = text.to_string();
            tokio::task::spawn_blocking(move || detector.predict(&owned))
        });

        let rule_result = analyze_keywords(text, &self.heuristics.keywords).into_model_result();
        let length_result = analyze_length(text, &self.heuristics.length).into_model_result();

        let custom_result = match custom_task {
            Some(task) => match task.await {
                Ok(detection) => detection_to_result(detection),
                Err(e) => {
                    error!(error = %e, "Error in custom model analysis");
                    ModelResult::new(
                        CUSTOM_MODEL_NAME,
                        Prediction::Unknown,
                        UNLOADED_MODEL_CONFIDENCE,
                    )
                    .with_error(e.to_string())
                }
            },
            None => unloaded_result(),
        };

        let model_results = vec![custom_result, rule_result, length_result];
        let vote = aggregate(&model_results);

        debug!(
            avg_real = vote.avg_real,
            avg_fake = vote.avg_fake,
            "Aggregated model results"
        );
        info!(
            verdict = ?vote.verdict,
            confidence = vote.confidence,
            "Analysis complete"
        );

        Ok(AnalysisResponse {
            final_verdict: vote.verdict,
            confidence: vote.confidence,
            model_results,
            text_preview: preview(text, RESPONSE_PREVIEW_CHARS),
        })
    }
}

fn unloaded_result() -> ModelResult {
    ModelResult::new(
        CUSTOM_MODEL_NAME,
        Prediction::Unknown,
        UNLOADED_MODEL_CONFIDENCE,
    )
    .with_error(UNLOADED_MODEL_ERROR)
}

fn with_probabilities(result: ModelResult, probabilities: &StyleProbabilities) -> ModelResult {
    result
        .with_detail("formal_style", probabilities.formal_style)
        .with_detail("sensational_style", probabilities.sensational_style)
}

/// Converts a detector outcome into the custom model's result slot.
pub fn detection_to_result(detection: Detection) -> ModelResult {
    match detection {
        Detection::Classified {
            label,
            confidence,
            probabilities,
            explanation,
            ..
        } => with_probabilities(
            ModelResult::new(CUSTOM_MODEL_NAME, label.into(), confidence),
            &probabilities,
        )
        .with_explanation(explanation),
        Detection::Failed { reason, .. } => with_probabilities(
            ModelResult::new(CUSTOM_MODEL_NAME, Prediction::Error, 0.0),
            &StyleProbabilities::ZERO,
        )
        .with_explanation(format!("Analysis failed: {reason}"))
        .with_error(reason),
    }
}
