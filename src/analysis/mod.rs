//! Ensemble analysis: the custom model plus two heuristics, averaged by label.
//!
//! The three scorers are independent; none sees another's output. The
//! [`aggregate`](aggregate::aggregate) vote is unweighted, so the heuristics
//! carry as much weight as the trained model.

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod keyword;
pub mod length;
pub mod types;


pub use aggregate::{AggregateVerdict, aggregate};
pub use analyzer::{NewsAnalyzer, detection_to_result};
pub use config::{HeuristicsConfig, KeywordRules, LengthBuckets};
pub use error::AnalysisError;
pub use keyword::{KeywordAnalysis, analyze_keywords};
pub use length::{LengthAnalysis, analyze_length};
pub use types::{
    AnalysisRequest, AnalysisResponse, DetailValue, ModelDetails, ModelResult, Prediction, Verdict,
};
