//! Keyword heuristic: suspicious vs. reliable phrase presence.

use crate::constants::RULE_BASED_MODEL_NAME;

use super::config::KeywordRules;
use super::types::{ModelResult, Prediction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordAnalysis {
    /// Number of distinct suspicious phrases present.
    pub suspicious_count: usize,
    /// Number of distinct reliable phrases present.
    pub reliable_count: usize,
    pub score: f64,
    pub prediction: Prediction,
    pub confidence: f64,
}

impl KeywordAnalysis {
    pub fn into_model_result(self) -> ModelResult {
        ModelResult::new(RULE_BASED_MODEL_NAME, self.prediction, self.confidence)
            .with_detail("suspicious_indicators", self.suspicious_count)
            .with_detail("reliable_indicators", self.reliable_count)
    }
}

fn count_present(haystack: &str, phrases: &[String]) -> usize {
    phrases
        .iter()
        .filter(|phrase| haystack.contains(phrase.as_str()))
        .count()
}

pub fn analyze_keywords(text: &str, rules: &KeywordRules) -> KeywordAnalysis {
    let text_lower = text.to_lowercase();

    let suspicious_count = count_present(&text_lower, &rules.suspicious_phrases);
    let reliable_count = count_present(&text_lower, &rules.reliable_phrases);

    let mut score = rules.neutral_score;
    if suspicious_count > rules.suspicious_limit {
        score -= rules.score_shift;
    }
    if reliable_count > 0 {
        score += rules.score_shift;
    }

    let confidence = ((score - rules.neutral_score).abs() * 2.0)
        .clamp(rules.min_confidence, rules.max_confidence);

    let prediction = if score > rules.neutral_score {
        Prediction::Real
    } else {
        Prediction::Fake
    };

    KeywordAnalysis {
        suspicious_count,
        reliable_count,
        score,
        prediction,
        confidence,
    }
}
