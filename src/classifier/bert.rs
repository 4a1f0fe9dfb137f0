use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

use crate::constants::NUM_STYLE_LABELS;

/// BERT encoder, pooler (dense + tanh over `[CLS]`) and a two-way linear head.
///
/// Tensor names follow the `bert.*` / `classifier.*` layout of a fine-tuned
/// sequence classifier exported to safetensors. Dropout is the identity at
/// inference and has no weights.
struct BertStyleHeadImpl {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
}

impl BertStyleHeadImpl {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        let encoder_vb = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            vb.pp("bert")
        } else {
            vb.clone()
        };

        let bert = BertModel::load(encoder_vb.clone(), config)?;

        let hidden_size = config.hidden_size;
        let pooler = candle_nn::linear(hidden_size, hidden_size, encoder_vb.pp("pooler.dense"))?;
        let classifier = candle_nn::linear(hidden_size, NUM_STYLE_LABELS, vb.pp("classifier"))?;

        Ok(Self {
            bert,
            pooler,
            classifier,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;
        let cls_token = output.i((.., 0, ..))?;
        let pooled = self.pooler.forward(&cls_token)?.tanh()?;
        self.classifier.forward(&pooled)
    }
}

/// Cheaply cloneable handle to the loaded style classifier network.
#[derive(Clone)]
pub struct BertStyleHead(std::sync::Arc<BertStyleHeadImpl>);

/// Parses a BERT `config.json`.
pub fn read_bert_config(config_path: &Path) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path)?;
    serde_json::from_str(&config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))
}

impl BertStyleHead {
    /// Builds the network from a parsed config and safetensors weights.
    pub fn load(config: &Config, weights_path: &Path, device: &Device) -> Result<Self> {
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path.to_path_buf()], DType::F32, device)?
        };

        let model = BertStyleHeadImpl::load(vb, config)?;

        Ok(Self(std::sync::Arc::new(model)))
    }

    /// Returns logits of shape `[batch, 2]`.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }
}
