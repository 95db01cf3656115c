use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ScoringConfig;
use crate::constants::PERFECT_SCORE;
use crate::embedding::{EntailmentClassifier, TextEmbedder};
use crate::hint::{EXACT_MATCH_HINT, HintSelector, category_match};
use crate::text::{is_exact_match, normalize};

use super::error::ScoringError;
use super::formative::formative_similarity;
use super::fusion::fuse;
use super::relational::RelationalScorer;
use super::relationship::RelationshipClassifier;
use super::semantic::SemanticScorer;
use super::types::{ScoreBreakdown, SimilarityReport};

const WARMUP_GUESS: &str = "워밍업";
const WARMUP_ANSWER: &str = "테스트";

/// Scores guesses against answers with injected model capabilities.
///
/// Holds no per-request state; share it behind an `Arc` across threads.
pub struct SimilarityEngine<E: TextEmbedder + ?Sized, C: EntailmentClassifier + ?Sized> {
    embedder: Arc<E>,
    classifier: Arc<C>,
    config: Arc<ScoringConfig>,
}

impl<E, C> Clone for SimilarityEngine<E, C>
where
    E: TextEmbedder + ?Sized,
    C: EntailmentClassifier + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            embedder: Arc::clone(&self.embedder),
            classifier: Arc::clone(&self.classifier),
            config: Arc::clone(&self.config),
        }
    }
}

impl<E, C> SimilarityEngine<E, C>
where
    E: TextEmbedder + ?Sized,
    C: EntailmentClassifier + ?Sized,
{
    /// `config` is expected to have passed [`ScoringConfig::validate`].
    pub fn new(embedder: Arc<E>, classifier: Arc<C>, config: Arc<ScoringConfig>) -> Self {
        Self {
            embedder,
            classifier,
            config,
        }
    }

    /// Scores `guess` against `answer` and selects a hint.
    pub fn evaluate(&self, guess: &str, answer: &str) -> Result<SimilarityReport, ScoringError> {
        if guess.trim().is_empty() {
            return Err(ScoringError::InvalidInput {
                reason: "guess must not be empty".to_string(),
            });
        }
        if answer.trim().is_empty() {
            return Err(ScoringError::InvalidInput {
                reason: "answer must not be empty".to_string(),
            });
        }

        if is_exact_match(guess, answer) {
            debug!("Exact match, skipping scorers");
            return Ok(SimilarityReport {
                score: PERFECT_SCORE,
                breakdown: ScoreBreakdown::exact_match(),
                hint: EXACT_MATCH_HINT.to_string(),
                relationship: None,
                category_match: true,
                exact_match: true,
            });
        }

        let semantic = SemanticScorer::new(self.embedder.as_ref()).score(guess, answer)?;
        let relational = RelationalScorer::new(self.classifier.as_ref()).score(
            guess,
            answer,
            &self.config.affirmative_templates,
            &self.config.contradiction_templates,
        )?;
        let formative = formative_similarity(&normalize(guess), &normalize(answer));

        let signals = ScoreBreakdown::new(
            semantic,
            relational.relational,
            formative,
            relational.contradiction,
        );
        let fused = fuse(&signals, &self.config.weights);

        let relationship = RelationshipClassifier::new(self.classifier.as_ref()).classify(
            guess,
            answer,
            &self.config.relationship_taxonomy,
        );

        let hint = HintSelector::new(&self.config).select(
            fused.score,
            &fused.breakdown,
            guess,
            &relationship,
        );

        info!(
            score = fused.score,
            semantic = fused.breakdown.semantic,
            relational = fused.breakdown.relational,
            formative = fused.breakdown.formative,
            contradiction = fused.breakdown.contradiction,
            relation = %relationship.relation,
            relation_confidence = relationship.confidence,
            "Guess evaluated"
        );

        Ok(SimilarityReport {
            score: fused.score,
            breakdown: fused.breakdown,
            hint,
            relationship: Some(relationship),
            category_match: category_match(guess, answer),
            exact_match: false,
        })
    }

    /// Runs one throwaway evaluation so the first real request does not pay
    /// for lazy model initialization. Failures are logged and ignored.
    pub fn warm_up(&self) {
        match self.evaluate(WARMUP_GUESS, WARMUP_ANSWER) {
            Ok(report) => info!(score = report.score, "Warm-up evaluation complete"),
            Err(e) => warn!(error = %e, "Warm-up evaluation failed"),
        }
    }

    /// `true` when neither capability is a stub.
    pub fn models_loaded(&self) -> bool {
        !self.embedder.is_stub() && !self.classifier.is_stub()
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
