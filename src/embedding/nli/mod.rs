//! Entailment (NLI) classifier over single hypotheses.
//!
//! Loads a BERT-family sequence classification model and reports the top
//! softmax label. Without a model path it runs in stub mode and answers
//! every hypothesis with a fixed neutral verdict.

pub mod config;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::NliConfig;
pub use error::NliError;
pub use types::{Entailment, EntailmentLabel};

use std::cmp::Ordering;

use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::embedding::EntailmentClassifier;
use crate::embedding::bert::BertClassifier;
use crate::embedding::device::select_device;
use crate::embedding::utils::{load_tokenizer, missing_model_file};

/// Confidence reported by the stub backend.
pub const STUB_CONFIDENCE: f64 = 0.5;

enum NliBackend {
    Model {
        model: BertClassifier,
        tokenizer: Tokenizer,
        labels: Vec<EntailmentLabel>,
    },
    Stub,
}

pub struct NliClassifier {
    device: Device,
    config: NliConfig,
    backend: NliBackend,
}

impl std::fmt::Debug for NliClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NliClassifier")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.is_model_loaded())
            .finish()
    }
}

impl NliClassifier {
    pub fn load(config: NliConfig) -> Result<Self, NliError> {
        if let Err(msg) = config.validate() {
            return Err(NliError::InvalidConfig { reason: msg });
        }

        let device = select_device("nli")?;

        let Some(ref model_path) = config.model_path else {
            info!("No NLI model path configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                backend: NliBackend::Stub,
            });
        };

        if !model_path.exists() {
            return Err(NliError::ModelNotFound {
                path: model_path.clone(),
            });
        }

        if let Some(file) = missing_model_file(model_path) {
            return Err(NliError::ModelLoadFailed {
                reason: format!("Missing {} in {}", file, model_path.display()),
            });
        }

        info!(model_path = %model_path.display(), "Loading NLI model");

        let model =
            BertClassifier::load(model_path, &device).map_err(|e| NliError::ModelLoadFailed {
                reason: format!("Failed to load BERT classifier: {}", e),
            })?;

        let labels = model
            .labels()
            .iter()
            .map(|name| {
                EntailmentLabel::from_model_label(name)
                    .ok_or_else(|| NliError::UnknownLabel {
                        label: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !labels.contains(&EntailmentLabel::Entailment) {
            return Err(NliError::InvalidConfig {
                reason: "model has no entailment label".to_string(),
            });
        }

        let tokenizer = load_tokenizer(model_path, config.max_seq_len).map_err(|e| {
            NliError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        info!(labels = ?labels, "NLI model loaded successfully");

        Ok(Self {
            device,
            config,
            backend: NliBackend::Model {
                model,
                tokenizer,
                labels,
            },
        })
    }

    pub fn stub() -> Result<Self, NliError> {
        Self::load(NliConfig::stub())
    }

    pub fn classify(&self, hypothesis: &str) -> Result<Entailment, NliError> {
        match &self.backend {
            NliBackend::Model {
                model,
                tokenizer,
                labels,
            } => self.classify_with_model(hypothesis, model, tokenizer, labels),
            NliBackend::Stub => {
                debug!(hypothesis_len = hypothesis.len(), "Classifying hypothesis (stub)");
                Ok(Entailment::neutral(STUB_CONFIDENCE))
            }
        }
    }

    fn classify_with_model(
        &self,
        hypothesis: &str,
        model: &BertClassifier,
        tokenizer: &Tokenizer,
        labels: &[EntailmentLabel],
    ) -> Result<Entailment, NliError> {
        let tokens =
            tokenizer
                .encode(hypothesis, true)
                .map_err(|e| NliError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let token_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(tokens.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = model
            .forward(&token_ids, &type_ids, Some(&attention_mask))
            .map_err(|e| NliError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let probabilities = candle_nn::ops::softmax_last_dim(&logits)?
            .squeeze(0)?
            .to_vec1::<f32>()?;

        let (index, confidence) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
            .ok_or_else(|| NliError::InferenceFailed {
                reason: "model produced no logits".to_string(),
            })?;

        let label = labels
            .get(index)
            .copied()
            .ok_or_else(|| NliError::InferenceFailed {
                reason: format!("logit index {} has no label", index),
            })?;

        debug!(
            token_count = tokens.get_ids().len(),
            label = %label,
            confidence,
            "Classified hypothesis"
        );

        Ok(Entailment::new(label, f64::from(confidence)))
    }

    pub fn is_model_loaded(&self) -> bool {
        matches!(self.backend, NliBackend::Model { .. })
    }

    pub fn config(&self) -> &NliConfig {
        &self.config
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl EntailmentClassifier for NliClassifier {
    fn classify(&self, hypothesis: &str) -> Result<Entailment, NliError> {
        NliClassifier::classify(self, hypothesis)
    }

    fn is_stub(&self) -> bool {
        !self.is_model_loaded()
    }
}
