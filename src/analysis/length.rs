//! Length heuristic: word-count buckets.

use crate::constants::TEXT_STRUCTURE_MODEL_NAME;

use super::config::LengthBuckets;
use super::types::{ModelResult, Prediction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthAnalysis {
    pub word_count: usize,
    /// Words per `.`-separated piece (a text without periods is one piece).
    pub avg_sentence_length: f64,
    pub prediction: Prediction,
    pub confidence: f64,
}

impl LengthAnalysis {
    pub fn into_model_result(self) -> ModelResult {
        ModelResult::new(TEXT_STRUCTURE_MODEL_NAME, self.prediction, self.confidence)
            .with_detail("word_count", self.word_count)
            .with_detail("avg_sentence_length", self.avg_sentence_length)
    }
}

pub fn analyze_length(text: &str, buckets: &LengthBuckets) -> LengthAnalysis {
    let word_count = text.split_whitespace().count();
    let sentence_count = text.split('.').count().max(1);
    let avg_sentence_length = word_count as f64 / sentence_count as f64;

    let (prediction, confidence) = if word_count < buckets.short_below {
        (Prediction::Fake, buckets.short_confidence)
    } else if word_count > buckets.long_above {
        (Prediction::Fake, buckets.long_confidence)
    } else if (buckets.typical_min..=buckets.typical_max).contains(&word_count) {
        (Prediction::Real, buckets.typical_confidence)
    } else {
        (Prediction::Real, buckets.fallback_confidence)
    };

    LengthAnalysis {
        word_count,
        avg_sentence_length,
        prediction,
        confidence,
    }
}
