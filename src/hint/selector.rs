use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::constants::PERFECT_SCORE;
use crate::scoring::{RelationshipResult, ScoreBreakdown, Signal};
use crate::text::TemplateFields;

use super::CORRECT_HINT;
use super::level::{HintLevel, MIN_CONTEXT_CONFIDENCE, MIN_CONTEXT_SCORE};

/// Contradiction above this always yields the opposite-meaning suffix.
const CONTRADICTION_DETAIL: f64 = 0.6;
/// Below this score no detail suffix is given.
const MIN_DETAIL_SCORE: f64 = 20.0;
/// A contextual hint only carries the detail suffix from this score on.
const COMPOSE_DETAIL_SCORE: f64 = 60.0;

const DOMINANT_SIGNAL: f64 = 0.6;
const WEAK_SIGNAL: f64 = 0.3;
const DOMINANT_FORMATIVE: f64 = 0.7;

/// Suffix strings appended when one signal clearly dominates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailSuffixes {
    pub semantic_high: String,
    pub relational_high: String,
    pub formative_high: String,
    pub contradiction: String,
}

impl DetailSuffixes {
    fn for_signal(&self, signal: Signal) -> &str {
        match signal {
            Signal::Semantic => &self.semantic_high,
            Signal::Relational => &self.relational_high,
            Signal::Formative => &self.formative_high,
        }
    }
}

/// Chooses and composes the hint for one evaluation.
pub struct HintSelector<'a> {
    config: &'a ScoringConfig,
}

impl<'a> HintSelector<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    pub fn select(
        &self,
        score: f64,
        breakdown: &ScoreBreakdown,
        guess: &str,
        relationship: &RelationshipResult,
    ) -> String {
        if score == PERFECT_SCORE {
            return CORRECT_HINT.to_string();
        }

        let contextual = self.contextual_hint(relationship, score, guess);
        let detail = self.detail_hint(breakdown, score);
        debug!(
            score,
            relation = %relationship.relation,
            has_contextual = contextual.is_some(),
            has_detail = detail.is_some(),
            "Selecting hint"
        );

        match (contextual, detail) {
            (Some(contextual), Some(detail)) if score >= COMPOSE_DETAIL_SCORE => {
                format!("{}. {}", contextual, detail)
            }
            (Some(contextual), _) => contextual,
            (None, Some(detail)) => format!("{} {}", self.base_hint(score), detail),
            (None, None) => self.base_hint(score).to_string(),
        }
    }

    /// Guess-specific hint for a confident relationship, if one applies.
    pub fn contextual_hint(
        &self,
        relationship: &RelationshipResult,
        score: f64,
        guess: &str,
    ) -> Option<String> {
        if relationship.confidence < MIN_CONTEXT_CONFIDENCE || score < MIN_CONTEXT_SCORE {
            return None;
        }

        let templates = self.config.contextual_hints.get(&relationship.relation)?;
        let level = HintLevel::select(relationship.confidence, score);
        let template = templates.get(level)?;
        Some(template.render(&TemplateFields::input_only(guess)))
    }

    /// Suffix naming the dominant signal, if one qualifies.
    pub fn detail_hint(&self, breakdown: &ScoreBreakdown, score: f64) -> Option<&'a str> {
        let suffixes = &self.config.detail_suffixes;

        if breakdown.contradiction > CONTRADICTION_DETAIL {
            return Some(suffixes.contradiction.as_str());
        }
        if score < MIN_DETAIL_SCORE {
            return None;
        }

        let dominant = dominant_signal(breakdown);
        let qualifies = match dominant {
            Signal::Semantic => {
                breakdown.semantic > DOMINANT_SIGNAL && breakdown.relational < WEAK_SIGNAL
            }
            Signal::Relational => {
                breakdown.relational > DOMINANT_SIGNAL && breakdown.semantic < WEAK_SIGNAL
            }
            Signal::Formative => breakdown.formative > DOMINANT_FORMATIVE,
        };

        qualifies.then(|| suffixes.for_signal(dominant))
    }

    /// Message for the greatest threshold not above `score`.
    pub fn base_hint(&self, score: f64) -> &'a str {
        base_hint(&self.config.hint_thresholds, score)
    }
}

/// Greatest-key lookup over the threshold table; empty if nothing applies.
pub fn base_hint(thresholds: &BTreeMap<u32, String>, score: f64) -> &str {
    thresholds
        .iter()
        .rev()
        .find(|(bound, _)| f64::from(**bound) <= score)
        .map(|(_, message)| message.as_str())
        .unwrap_or_default()
}

/// Highest signal; earlier signals in [`Signal::ALL`] win ties.
pub fn dominant_signal(breakdown: &ScoreBreakdown) -> Signal {
    let mut best = Signal::Semantic;
    for signal in Signal::ALL {
        if breakdown.signal(signal) > breakdown.signal(best) {
            best = signal;
        }
    }
    best
}
