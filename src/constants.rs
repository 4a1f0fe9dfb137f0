//! Cross-cutting, shared constants.
//!
//! Every fixed threshold, phrase list and bucket used by the scorers lives here.
//! The runtime configs ([`ClassifierConfig`](crate::classifier::ClassifierConfig),
//! [`HeuristicsConfig`](crate::analysis::HeuristicsConfig)) take their defaults
//! from these values and are built once at startup.

/// Token budget for the classifier input (longer inputs are truncated).
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Number of output labels of the classification head (formal, sensational).
pub const NUM_STYLE_LABELS: usize = 2;

/// Index of the formal-style logit in the head output.
pub const FORMAL_STYLE_INDEX: usize = 0;

/// Index of the sensational-style logit in the head output.
pub const SENSATIONAL_STYLE_INDEX: usize = 1;

/// A style probability must be strictly greater than this to produce REAL/FAKE.
pub const DEFAULT_DECISION_THRESHOLD: f64 = 0.70;

/// Decimal places kept when reporting classifier probabilities.
pub const PROBABILITY_DECIMALS: i32 = 4;

pub const FAKE_STYLE_EXPLANATION: &str =
    "Sensational/informal writing style detected - common in fake news";
pub const REAL_STYLE_EXPLANATION: &str =
    "Formal/professional writing style detected - common in real news";
pub const UNCERTAIN_STYLE_EXPLANATION: &str =
    "Writing style is ambiguous - requires human verification";

/// Phrases whose presence suggests sensational content.
pub const SUSPICIOUS_PHRASES: &[&str] = &["breaking", "shocking", "urgent", "must read", "viral"];

/// Phrases whose presence suggests sourced reporting.
pub const RELIABLE_PHRASES: &[&str] = &[
    "according to sources",
    "official statement",
    "research shows",
];

/// Starting score of the keyword heuristic.
pub const KEYWORD_NEUTRAL_SCORE: f64 = 0.5;

/// Score shift applied by each keyword rule.
pub const KEYWORD_SCORE_SHIFT: f64 = 0.3;

/// The suspicious rule fires when strictly more phrases than this are present.
pub const KEYWORD_SUSPICIOUS_LIMIT: usize = 2;

pub const KEYWORD_MIN_CONFIDENCE: f64 = 0.1;
pub const KEYWORD_MAX_CONFIDENCE: f64 = 0.9;

/// Texts with fewer words than this are labelled FAKE.
pub const LENGTH_SHORT_BELOW: usize = 50;
pub const LENGTH_SHORT_CONFIDENCE: f64 = 0.7;

/// Texts with more words than this are labelled FAKE.
pub const LENGTH_LONG_ABOVE: usize = 1000;
pub const LENGTH_LONG_CONFIDENCE: f64 = 0.6;

/// Inclusive word-count range labelled REAL with high confidence.
pub const LENGTH_TYPICAL_MIN: usize = 100;
pub const LENGTH_TYPICAL_MAX: usize = 800;
pub const LENGTH_TYPICAL_CONFIDENCE: f64 = 0.7;

/// Confidence for lengths that fall between the other buckets.
pub const LENGTH_FALLBACK_CONFIDENCE: f64 = 0.5;

pub const CUSTOM_MODEL_NAME: &str = "Custom AI Model";
pub const RULE_BASED_MODEL_NAME: &str = "Rule-Based Analysis";
pub const TEXT_STRUCTURE_MODEL_NAME: &str = "Text Structure Analysis";

/// Confidence reported for the custom slot when no model is loaded.
pub const UNLOADED_MODEL_CONFIDENCE: f64 = 0.5;
pub const UNLOADED_MODEL_ERROR: &str = "Model not loaded";

/// Characters kept in the response preview.
pub const RESPONSE_PREVIEW_CHARS: usize = 200;

/// Characters kept in the classifier's own preview.
pub const DETECTION_PREVIEW_CHARS: usize = 100;

/// Truncates `text` to `max_chars` characters, appending `...` when cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Rounds to [`PROBABILITY_DECIMALS`] decimal places.
pub fn round_probability(value: f64) -> f64 {
    let scale = 10f64.powi(PROBABILITY_DECIMALS);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
        assert_eq!(preview("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("äöüßé", 2), "äö...");
    }

    #[test]
    fn test_round_probability() {
        assert_eq!(round_probability(0.123456), 0.1235);
        assert_eq!(round_probability(0.7), 0.7);
    }
}
