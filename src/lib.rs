//! Wordhint library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`SimilarityEngine`], [`SimilarityReport`] - Full guess evaluation
//! - [`ScoreBreakdown`], [`Weights`], [`fuse`] - Signal fusion
//! - [`RelationType`], [`RelationshipResult`] - Relationship classification
//!
//! ## Hints
//! - [`HintSelector`], [`HintLevel`] - Layered hint policy
//!
//! ## Capabilities
//! - [`TextEmbedder`], [`SentenceEncoder`] - Sentence embeddings
//! - [`EntailmentClassifier`], [`NliClassifier`] - Single-hypothesis NLI
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - Process settings from the environment
//! - [`ScoringConfig`] - Weights, templates and hint tables
//!
//! ## Test/Mock Support
//! Mock capabilities are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod hint;
pub mod scoring;
pub mod text;

pub use config::{Config, ConfigError, ScoringConfig};
pub use constants::{MAX_SEQ_LEN, STUB_EMBEDDING_DIM, round_to};
#[cfg(any(test, feature = "mock"))]
pub use embedding::{MockClassifier, MockEmbedder};
pub use embedding::{
    EmbeddingError, EncoderConfig, Entailment, EntailmentClassifier, EntailmentLabel,
    NliClassifier, NliConfig, NliError, SentenceEncoder, TextEmbedder,
};
pub use hint::{CORRECT_HINT, EXACT_MATCH_HINT, HintLevel, HintSelector};
pub use scoring::{
    RelationTemplate, RelationType, RelationshipResult, ScoreBreakdown, ScoringError,
    SimilarityEngine, SimilarityReport, Weights, formative_similarity, fuse,
};
pub use text::{Template, TemplateFields, is_exact_match, normalize};
