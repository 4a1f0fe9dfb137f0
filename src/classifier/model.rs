use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::bert::{BertStyleHead, read_bert_config};
use super::config::ClassifierConfig;
use super::device::select_device;
use super::error::ClassifierError;
use super::types::StyleProbabilities;
use super::utils::load_tokenizer;

/// Source of style probabilities for a text.
///
/// This is the seam between the detector's thresholding and the network that
/// produces the probabilities.
pub trait StyleModel: Send + Sync {
    fn style_probabilities(&self, text: &str) -> Result<StyleProbabilities, ClassifierError>;

    /// Short backend description for logs.
    fn backend(&self) -> String;
}

/// Fine-tuned BERT style classifier running on candle.
pub struct BertStyleModel {
    device: Device,
    model: BertStyleHead,
    tokenizer: Tokenizer,
    max_seq_len: usize,
}

impl std::fmt::Debug for BertStyleModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertStyleModel")
            .field("device", &format!("{:?}", self.device))
            .field("max_seq_len", &self.max_seq_len)
            .finish()
    }
}

impl BertStyleModel {
    pub fn load(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        if let Err(reason) = config.validate() {
            return Err(ClassifierError::InvalidConfig { reason });
        }

        let model_path = &config.model_path;
        if !model_path.exists() {
            return Err(ClassifierError::ModelNotFound {
                path: model_path.clone(),
            });
        }

        let config_path = config.config_file();
        if !config_path.exists() {
            return Err(ClassifierError::ModelLoadFailed {
                reason: format!("Missing config.json in {}", model_path.display()),
            });
        }

        let tokenizer_path = config.tokenizer_file();
        if !tokenizer_path.exists() {
            return Err(ClassifierError::ModelLoadFailed {
                reason: format!("Missing tokenizer.json in {}", model_path.display()),
            });
        }

        let weights_path = config.weights_file();
        if !weights_path.exists() {
            return Err(ClassifierError::ModelLoadFailed {
                reason: format!("Weights file not found: {}", weights_path.display()),
            });
        }

        let bert_config = read_bert_config(&config_path).map_err(|e| {
            ClassifierError::ModelLoadFailed {
                reason: format!("Invalid config.json in {}: {}", model_path.display(), e),
            }
        })?;

        // Position embeddings cannot be indexed past the model's table.
        if config.max_seq_len > bert_config.max_position_embeddings {
            return Err(ClassifierError::InvalidConfig {
                reason: format!(
                    "max_seq_len {} exceeds the model's max_position_embeddings {}",
                    config.max_seq_len, bert_config.max_position_embeddings
                ),
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for classifier");

        info!(
            model_path = %model_path.display(),
            weights_path = %weights_path.display(),
            max_seq_len = config.max_seq_len,
            "Loading style classifier"
        );

        let model = BertStyleHead::load(&bert_config, &weights_path, &device).map_err(|e| {
            ClassifierError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(model_path, config.max_seq_len).map_err(|e| {
            ClassifierError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        info!("Style classifier loaded successfully");

        Ok(Self {
            device,
            model,
            tokenizer,
            max_seq_len: config.max_seq_len,
        })
    }

    fn input_tensor(&self, values: &[u32]) -> Result<Tensor, ClassifierError> {
        Ok(Tensor::new(values, &self.device)?.unsqueeze(0)?)
    }
}

impl StyleModel for BertStyleModel {
    fn style_probabilities(&self, text: &str) -> Result<StyleProbabilities, ClassifierError> {
        let encoding =
            self.tokenizer
                .encode(text, true)
                .map_err(|e| ClassifierError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        debug!(tokens = encoding.get_ids().len(), "Running style classifier");

        let input_ids = self.input_tensor(encoding.get_ids())?;
        let token_type_ids = self.input_tensor(encoding.get_type_ids())?;
        let attention_mask = self.input_tensor(encoding.get_attention_mask())?;

        let logits = self
            .model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))
            .map_err(|e| ClassifierError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let probs = candle_nn::ops::softmax(&logits, candle_core::D::Minus1)?;
        let probs: Vec<f32> = probs.squeeze(0)?.to_vec1()?;

        StyleProbabilities::from_softmax(&probs)
    }

    fn backend(&self) -> String {
        format!("bert({:?})", self.device)
    }
}
