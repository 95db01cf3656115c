use std::path::PathBuf;

use crate::constants::{MAX_SEQ_LEN, STUB_EMBEDDING_DIM};
use crate::embedding::error::EmbeddingError;

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEncoder`](super::SentenceEncoder).
pub struct EncoderConfig {
    /// Sentence-transformer directory (`config.json`, `model.safetensors`,
    /// `tokenizer.json`). `None` selects stub mode.
    pub model_path: Option<PathBuf>,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output size in stub mode (model mode uses the model's hidden size).
    pub stub_dim: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_seq_len: MAX_SEQ_LEN,
            stub_dim: STUB_EMBEDDING_DIM,
        }
    }
}

impl EncoderConfig {
    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self::default()
    }

    /// Validates sizes and the model path when one is given.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than 0".to_string(),
            });
        }

        if self.stub_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "stub_dim must be greater than 0".to_string(),
            });
        }

        if let Some(ref path) = self.model_path {
            if path.as_os_str().is_empty() {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "model_path cannot be empty when provided".to_string(),
                });
            }
            if !path.exists() {
                return Err(EmbeddingError::ModelNotFound { path: path.clone() });
            }
        }

        Ok(())
    }
}
