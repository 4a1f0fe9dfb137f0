//! Style classifier: fine-tuned BERT encoder with a two-way head.
//!
//! - [`model`] runs the network and returns [`StyleProbabilities`].
//! - [`detector`] applies the decision policy and turns failures into
//!   [`Detection::Failed`] values.
//!
//! Use [`MockStyleModel`] (behind `cfg(any(test, feature = "mock"))`) when no
//! model files are available.

/// BERT + pooler + linear head.
pub mod bert;
pub mod config;
pub mod detector;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod types;
/// Tokenizer loading.
pub mod utils;


pub use config::ClassifierConfig;
pub use detector::{StyleDetector, classify_style};
pub use error::ClassifierError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockStyleModel;
pub use model::{BertStyleModel, StyleModel};
pub use types::{Detection, StyleLabel, StyleProbabilities};
