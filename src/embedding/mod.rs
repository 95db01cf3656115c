//! Model capabilities consumed by the scoring core.
//!
//! - [`TextEmbedder`] is the embedding capability; [`encoder`] provides the
//!   model-backed implementation.
//! - [`EntailmentClassifier`] is the single-hypothesis NLI capability;
//!   [`nli`] provides the model-backed implementation.
//!
//! Scorers receive these by reference, so tests can swap in the mocks from
//! `mock` (behind `#[cfg(any(test, feature = "mock"))]`).

/// BERT backbone and sequence-classification head.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder.
pub mod encoder;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Entailment classifier.
pub mod nli;
/// Tokenizer/model loading helpers.
pub mod utils;

pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::{MockClassifier, MockEmbedder};
pub use nli::{Entailment, EntailmentLabel, NliClassifier, NliConfig, NliError};

/// Embedding capability: one equal-length vector per input text.
pub trait TextEmbedder: Send + Sync {
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// `true` when the implementation does not run a real model.
    fn is_stub(&self) -> bool {
        false
    }
}

/// Entailment capability: classifies one hypothesis.
pub trait EntailmentClassifier: Send + Sync {
    fn classify(&self, hypothesis: &str) -> Result<Entailment, NliError>;

    /// `true` when the implementation does not run a real model.
    fn is_stub(&self) -> bool {
        false
    }
}
