//! TruthLens library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`NewsAnalyzer`] - Runs the three scorers and aggregates their votes
//! - [`AnalysisResponse`], [`ModelResult`], [`Prediction`], [`Verdict`] - Wire types
//!
//! ## Classifier
//! - [`StyleDetector`], [`ClassifierConfig`] - Fine-tuned BERT style classifier
//! - [`StyleModel`] - Seam between the decision policy and the network
//!
//! ## Heuristics
//! - [`analyze_keywords`], [`analyze_length`], [`aggregate`]
//!
//! ## HTTP
//! - [`gateway::create_router_with_state`] - Axum router for `/health` and `/analyze`
//!
//! ## Test/Mock Support
//! [`MockStyleModel`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod gateway;

pub use analysis::{
    AggregateVerdict, AnalysisError, AnalysisRequest, AnalysisResponse, HeuristicsConfig,
    KeywordRules, LengthBuckets, ModelResult, NewsAnalyzer, Prediction, Verdict, aggregate,
    analyze_keywords, analyze_length,
};
#[cfg(any(test, feature = "mock"))]
pub use classifier::MockStyleModel;
pub use classifier::{
    BertStyleModel, ClassifierConfig, ClassifierError, Detection, StyleDetector, StyleLabel,
    StyleModel, StyleProbabilities,
};
pub use config::{Config, ConfigError};
pub use gateway::{GatewayError, HandlerState};
