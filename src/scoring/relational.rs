use tracing::debug;

use crate::constants::NEUTRAL_DISCOUNT;
use crate::embedding::{Entailment, EntailmentClassifier, EntailmentLabel};
use crate::text::{Template, TemplateFields};

use super::error::ScoringError;

/// Relational agreement and the separate contradiction signal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelationalScore {
    /// Mean over affirmative templates.
    pub relational: f64,
    /// Max over contradiction-probe templates.
    pub contradiction: f64,
}

/// Per-template contribution on the affirmative side.
pub fn affirmative_contribution(verdict: &Entailment) -> f64 {
    match verdict.label {
        EntailmentLabel::Entailment => verdict.confidence,
        EntailmentLabel::Neutral => verdict.confidence * NEUTRAL_DISCOUNT,
        EntailmentLabel::Contradiction => 0.0,
    }
}

/// Scores relation hypotheses with the entailment capability.
///
/// Classification errors propagate; nothing is absorbed here.
pub struct RelationalScorer<'a, C: EntailmentClassifier + ?Sized> {
    classifier: &'a C,
}

impl<'a, C: EntailmentClassifier + ?Sized> RelationalScorer<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        Self { classifier }
    }

    pub fn score(
        &self,
        input: &str,
        answer: &str,
        affirmative: &[Template],
        contradiction: &[Template],
    ) -> Result<RelationalScore, ScoringError> {
        let fields = TemplateFields::new(input, answer);

        let mut total = 0.0;
        for template in affirmative {
            let hypothesis = template.render(&fields);
            let verdict = self.classifier.classify(&hypothesis)?;
            debug!(
                hypothesis = %hypothesis,
                label = %verdict.label,
                confidence = verdict.confidence,
                "Affirmative hypothesis classified"
            );
            total += affirmative_contribution(&verdict);
        }
        let relational = if affirmative.is_empty() {
            0.0
        } else {
            total / affirmative.len() as f64
        };

        let mut strongest: f64 = 0.0;
        for template in contradiction {
            let hypothesis = template.render(&fields);
            let verdict = self.classifier.classify(&hypothesis)?;
            debug!(
                hypothesis = %hypothesis,
                label = %verdict.label,
                confidence = verdict.confidence,
                "Contradiction probe classified"
            );
            strongest = strongest.max(verdict.entailed_confidence());
        }

        Ok(RelationalScore {
            relational,
            contradiction: strongest,
        })
    }
}
