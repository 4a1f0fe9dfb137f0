use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between reading the model directory and
/// producing style probabilities.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model directory not found: {}", path.display())]
    ModelNotFound { path: PathBuf },

    /// A required file is absent, or present but unusable.
    #[error("cannot load style classifier: {reason}")]
    ModelLoadFailed { reason: String },

    /// Settings that contradict each other or the model itself.
    #[error("invalid classifier settings: {reason}")]
    InvalidConfig { reason: String },

    #[error("cannot tokenize input: {reason}")]
    TokenizationFailed { reason: String },

    #[error("style inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tensor operation failed: {0}")]
    Tensor(#[from] candle_core::Error),
}
