use thiserror::Error;

use crate::embedding::{EmbeddingError, NliError};

#[derive(Debug, Error)]
/// Errors returned while scoring a guess.
pub enum ScoringError {
    /// Embedding capability failure.
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Entailment capability failure.
    #[error("classification error: {0}")]
    Classification(#[from] NliError),

    /// Invalid input.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Error message.
        reason: String,
    },

    /// Internal computation error.
    #[error("scoring computation failed: {reason}")]
    ComputationFailed {
        /// Error message.
        reason: String,
    },
}

impl ScoringError {
    /// `true` when a model capability failed (the caller should report the
    /// service as unavailable).
    pub fn is_capability_failure(&self) -> bool {
        matches!(
            self,
            ScoringError::Embedding(_) | ScoringError::Classification(_)
        )
    }
}
