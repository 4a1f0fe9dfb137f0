use std::path::PathBuf;

use crate::constants::{DEFAULT_DECISION_THRESHOLD, DEFAULT_MAX_SEQ_LEN};

pub const CONFIG_FILE: &str = "config.json";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const DEFAULT_WEIGHTS_FILE: &str = "model.safetensors";

/// Where to find the fine-tuned classifier and how to threshold its output.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Directory with `config.json`, `tokenizer.json` and (by default) the weights.
    pub model_path: PathBuf,

    /// Weights file overriding `<model_path>/model.safetensors`.
    pub weights_path: Option<PathBuf>,

    pub max_seq_len: usize,

    pub decision_threshold: f64,
}

impl ClassifierConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: model_path.into(),
            weights_path: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }

    pub fn with_weights<P: Into<PathBuf>>(mut self, weights_path: P) -> Self {
        self.weights_path = Some(weights_path.into());
        self
    }

    /// Token budget per text. Must not exceed the model's position table.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&threshold),
            "threshold must be between 0.0 and 1.0"
        );
        self.decision_threshold = threshold;
        self
    }

    pub fn config_file(&self) -> PathBuf {
        self.model_path.join(CONFIG_FILE)
    }

    pub fn tokenizer_file(&self) -> PathBuf {
        self.model_path.join(TOKENIZER_FILE)
    }

    pub fn weights_file(&self) -> PathBuf {
        self.weights_path
            .clone()
            .unwrap_or_else(|| self.model_path.join(DEFAULT_WEIGHTS_FILE))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(format!(
                "threshold must be between 0.0 and 1.0, got {}",
                self.decision_threshold
            ));
        }

        if self.max_seq_len == 0 {
            return Err("max_seq_len must be greater than 0".to_string());
        }

        if self.model_path.as_os_str().is_empty() {
            return Err("model_path cannot be empty".to_string());
        }

        Ok(())
    }
}
