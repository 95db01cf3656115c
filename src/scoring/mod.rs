//! Multi-signal similarity between a guess and a hidden answer.
//!
//! Three independent signals are fused into one bounded score:
//! - semantic: embedding cosine similarity remapped to `[0, 1]`;
//! - relational: entailment of relation hypotheses, plus a separate
//!   contradiction probe that penalizes the composite;
//! - formative: jamo-level edit distance of the normalized texts.
//!
//! [`SimilarityEngine`] runs the whole pipeline, including relationship
//! classification and hint selection.

pub mod engine;
pub mod error;
pub mod formative;
pub mod fusion;
pub mod relational;
pub mod relationship;
pub mod semantic;
pub mod types;


pub use engine::SimilarityEngine;
pub use error::ScoringError;
pub use formative::{formative_similarity, levenshtein};
pub use fusion::fuse;
pub use relational::{RelationalScore, RelationalScorer};
pub use relationship::{RelationOutcome, RelationTemplate, RelationshipClassifier, select_best};
pub use semantic::{SemanticScorer, cosine_similarity};
pub use types::{
    FusedScore, RelationType, RelationshipResult, ScoreBreakdown, Signal, SimilarityReport,
    Weights,
};
