use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::error::EmbeddingError;

/// Errors from the entailment classifier.
#[derive(Debug, Error)]
pub enum NliError {
    #[error("NLI model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load NLI model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("{device} device unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    #[error("NLI inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid NLI configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("unrecognized NLI label '{label}'")]
    UnknownLabel { label: String },
}

impl From<candle_core::Error> for NliError {
    fn from(err: candle_core::Error) -> Self {
        NliError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for NliError {
    fn from(err: std::io::Error) -> Self {
        NliError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<EmbeddingError> for NliError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::DeviceUnavailable { device, reason } => {
                NliError::DeviceUnavailable { device, reason }
            }
            _ => NliError::InferenceFailed {
                reason: err.to_string(),
            },
        }
    }
}
