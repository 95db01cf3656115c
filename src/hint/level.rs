use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::Template;

/// Minimum relationship confidence for any contextual hint.
pub const MIN_CONTEXT_CONFIDENCE: f64 = 0.3;
/// Minimum composite score for any contextual hint.
pub const MIN_CONTEXT_SCORE: f64 = 15.0;

const HIGH_CONFIDENCE: f64 = 0.7;
const HIGH_SCORE: f64 = 50.0;
const MEDIUM_CONFIDENCE: f64 = 0.5;
const MEDIUM_SCORE: f64 = 30.0;

/// How specific a contextual hint is allowed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintLevel {
    High,
    Medium,
    Low,
}

impl HintLevel {
    /// Level for a relationship `confidence` in `[0, 1]` and a composite `score` in `0..=100`.
    pub fn select(confidence: f64, score: f64) -> Self {
        if confidence >= HIGH_CONFIDENCE && score >= HIGH_SCORE {
            HintLevel::High
        } else if confidence >= MEDIUM_CONFIDENCE || score >= MEDIUM_SCORE {
            HintLevel::Medium
        } else {
            HintLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HintLevel::High => "high",
            HintLevel::Medium => "medium",
            HintLevel::Low => "low",
        }
    }
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contextual templates for one relation type.
///
/// A missing `high` or `low` falls back to `medium`. With no `medium` either,
/// that level has no contextual hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTemplates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<Template>,
}

impl LevelTemplates {
    pub fn new(high: Template, medium: Template, low: Template) -> Self {
        Self {
            high: Some(high),
            medium: Some(medium),
            low: Some(low),
        }
    }

    pub fn get(&self, level: HintLevel) -> Option<&Template> {
        let exact = match level {
            HintLevel::High => self.high.as_ref(),
            HintLevel::Medium => None,
            HintLevel::Low => self.low.as_ref(),
        };
        exact.or(self.medium.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.high
            .iter()
            .chain(self.medium.iter())
            .chain(self.low.iter())
    }
}
