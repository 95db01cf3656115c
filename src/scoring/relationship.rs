//! Relationship-type classification against an ordered taxonomy.
//!
//! A failed classification zeroes that entry only; the other entries are
//! still scored. Ties resolve to the earliest entry.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::embedding::EntailmentClassifier;
use crate::text::{Template, TemplateFields};

use super::types::{RelationType, RelationshipResult};

/// One taxonomy entry: a relation and the hypothesis that expresses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationTemplate {
    pub relation: RelationType,
    pub template: Template,
}

impl RelationTemplate {
    pub fn new(relation: RelationType, template: Template) -> Self {
        Self { relation, template }
    }
}

/// Result of classifying one taxonomy entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationOutcome {
    /// Entailment confidence (`0.0` for any other label).
    Scored(f64),
    /// The classifier failed for this entry.
    Failed { reason: String },
}

impl RelationOutcome {
    /// Failures count as zero.
    pub fn score(&self) -> f64 {
        match self {
            RelationOutcome::Scored(score) => *score,
            RelationOutcome::Failed { .. } => 0.0,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RelationOutcome::Failed { .. })
    }
}

pub struct RelationshipClassifier<'a, C: EntailmentClassifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: EntailmentClassifier + ?Sized> RelationshipClassifier<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    /// Best-matching relation, or [`RelationshipResult::general`].
    pub fn classify(
        &self,
        input: &str,
        answer: &str,
        taxonomy: &[RelationTemplate],
    ) -> RelationshipResult {
        let outcomes = self.analyze(input, answer, taxonomy);
        select_best(&outcomes)
    }

    /// Classifies every entry, in taxonomy order.
    pub fn analyze(
        &self,
        input: &str,
        answer: &str,
        taxonomy: &[RelationTemplate],
    ) -> Vec<(RelationType, RelationOutcome)> {
        let fields = TemplateFields::new(input, answer);

        taxonomy
            .iter()
            .map(|entry| {
                let hypothesis = entry.template.render(&fields);
                let outcome = match self.classifier.classify(&hypothesis) {
                    Ok(verdict) => RelationOutcome::Scored(verdict.entailed_confidence()),
                    Err(e) => {
                        warn!(relation = %entry.relation, error = %e, "Relationship classification failed");
                        RelationOutcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                };
                debug!(relation = %entry.relation, score = outcome.score(), "Relation scored");
                (entry.relation, outcome)
            })
            .collect()
    }
}

/// Picks the highest score; earlier entries win ties. All-zero yields `general`.
pub fn select_best(outcomes: &[(RelationType, RelationOutcome)]) -> RelationshipResult {
    let mut best: Option<(RelationType, f64)> = None;
    for (relation, outcome) in outcomes {
        let score = outcome.score();
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((*relation, score));
        }
    }

    match best {
        Some((relation, score)) => RelationshipResult::new(relation, score),
        None => RelationshipResult::general(),
    }
}
