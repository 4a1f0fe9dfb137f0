use crate::constants::{
    KEYWORD_MAX_CONFIDENCE, KEYWORD_MIN_CONFIDENCE, KEYWORD_NEUTRAL_SCORE, KEYWORD_SCORE_SHIFT,
    KEYWORD_SUSPICIOUS_LIMIT, LENGTH_FALLBACK_CONFIDENCE, LENGTH_LONG_ABOVE,
    LENGTH_LONG_CONFIDENCE, LENGTH_SHORT_BELOW, LENGTH_SHORT_CONFIDENCE, LENGTH_TYPICAL_CONFIDENCE,
    LENGTH_TYPICAL_MAX, LENGTH_TYPICAL_MIN, RELIABLE_PHRASES, SUSPICIOUS_PHRASES,
};

/// Rules of the keyword heuristic.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRules {
    /// Lowercase phrases; matched as substrings of the lowercased text.
    pub suspicious_phrases: Vec<String>,
    pub reliable_phrases: Vec<String>,
    pub neutral_score: f64,
    pub score_shift: f64,
    /// Suspicious rule fires when the count is strictly above this.
    pub suspicious_limit: usize,
    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Default for KeywordRules {
    fn default() -> Self {
        Self {
            suspicious_phrases: SUSPICIOUS_PHRASES.iter().map(|p| p.to_string()).collect(),
            reliable_phrases: RELIABLE_PHRASES.iter().map(|p| p.to_string()).collect(),
            neutral_score: KEYWORD_NEUTRAL_SCORE,
            score_shift: KEYWORD_SCORE_SHIFT,
            suspicious_limit: KEYWORD_SUSPICIOUS_LIMIT,
            min_confidence: KEYWORD_MIN_CONFIDENCE,
            max_confidence: KEYWORD_MAX_CONFIDENCE,
        }
    }
}

/// Word-count buckets of the length heuristic, checked in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthBuckets {
    pub short_below: usize,
    pub short_confidence: f64,
    pub long_above: usize,
    pub long_confidence: f64,
    pub typical_min: usize,
    pub typical_max: usize,
    pub typical_confidence: f64,
    pub fallback_confidence: f64,
}

impl Default for LengthBuckets {
    fn default() -> Self {
        Self {
            short_below: LENGTH_SHORT_BELOW,
            short_confidence: LENGTH_SHORT_CONFIDENCE,
            long_above: LENGTH_LONG_ABOVE,
            long_confidence: LENGTH_LONG_CONFIDENCE,
            typical_min: LENGTH_TYPICAL_MIN,
            typical_max: LENGTH_TYPICAL_MAX,
            typical_confidence: LENGTH_TYPICAL_CONFIDENCE,
            fallback_confidence: LENGTH_FALLBACK_CONFIDENCE,
        }
    }
}

/// Everything the two heuristics need, built once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicsConfig {
    pub keywords: KeywordRules,
    pub length: LengthBuckets,
}
