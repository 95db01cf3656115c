use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BREAKDOWN_DECIMALS, DEFAULT_FORMATIVE_WEIGHT, DEFAULT_RELATIONAL_WEIGHT,
    DEFAULT_SEMANTIC_WEIGHT, WEIGHT_SUM_TOLERANCE, round_to,
};

/// Fusion weights. Non-negative and summing to `1.0` (checked at config load).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub semantic: f64,
    pub relational: f64,
    pub formative: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            semantic: DEFAULT_SEMANTIC_WEIGHT,
            relational: DEFAULT_RELATIONAL_WEIGHT,
            formative: DEFAULT_FORMATIVE_WEIGHT,
        }
    }
}

impl Weights {
    pub fn new(semantic: f64, relational: f64, formative: f64) -> Self {
        Self {
            semantic,
            relational,
            formative,
        }
    }

    pub fn sum(&self) -> f64 {
        self.semantic + self.relational + self.formative
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("semantic", self.semantic),
            ("relational", self.relational),
            ("formative", self.formative),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} weight must be a non-negative number, got {}", name, value));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("weights must sum to 1.0, got {}", sum));
        }

        Ok(())
    }
}

/// The three fused signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Semantic,
    Relational,
    Formative,
}

impl Signal {
    /// Declaration order doubles as the tie-break order.
    pub const ALL: [Signal; 3] = [Signal::Semantic, Signal::Relational, Signal::Formative];
}

/// Per-signal scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub semantic: f64,
    pub relational: f64,
    pub formative: f64,
    pub contradiction: f64,
}

impl ScoreBreakdown {
    pub fn new(semantic: f64, relational: f64, formative: f64, contradiction: f64) -> Self {
        Self {
            semantic,
            relational,
            formative,
            contradiction,
        }
    }

    /// Breakdown reported for an exact match.
    pub fn exact_match() -> Self {
        Self::new(1.0, 1.0, 1.0, 0.0)
    }

    pub fn signal(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Semantic => self.semantic,
            Signal::Relational => self.relational,
            Signal::Formative => self.formative,
        }
    }

    /// Clamps every component into `[0, 1]` and rounds to reporting precision.
    pub fn rounded(&self) -> Self {
        let fix = |v: f64| round_to(v.clamp(0.0, 1.0), BREAKDOWN_DECIMALS);
        Self::new(
            fix(self.semantic),
            fix(self.relational),
            fix(self.formative),
            fix(self.contradiction),
        )
    }
}

/// Relationship taxonomy between guess and answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// The answer occurs in the guess's situation.
    Situation,
    /// The guess can cause the answer (often an emotion).
    EmotionCause,
    /// The answer has the guess's characteristics.
    Attribute,
    /// The answer happens at the guess's place.
    Place,
    /// The answer arises between the guess's people.
    People,
    /// The answer is the same kind of thing as the guess.
    SimilarGenre,
    /// The answer is opposed to the guess.
    Opposite,
    /// The answer is part of the guess.
    PartWhole,
    /// The answer happens at the guess's time.
    Time,
    /// The answer results from the guess.
    Result,
    /// No taxonomy entry was entailed.
    General,
}

impl RelationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Situation => "situation",
            Self::EmotionCause => "emotion_cause",
            Self::Attribute => "attribute",
            Self::Place => "place",
            Self::People => "people",
            Self::SimilarGenre => "similar_genre",
            Self::Opposite => "opposite",
            Self::PartWhole => "part_whole",
            Self::Time => "time",
            Self::Result => "result",
            Self::General => "general",
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best-matching relation and its confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelationshipResult {
    #[serde(rename = "type")]
    pub relation: RelationType,
    pub confidence: f64,
}

impl RelationshipResult {
    pub fn new(relation: RelationType, confidence: f64) -> Self {
        Self {
            relation,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Fallback when nothing in the taxonomy was entailed.
    pub fn general() -> Self {
        Self::new(RelationType::General, 0.0)
    }
}

/// Composite score (0–100, two decimals) with its rounded breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusedScore {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Outcome of evaluating one guess against one answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    pub hint: String,
    /// `None` on the exact-match fast path.
    pub relationship: Option<RelationshipResult>,
    pub category_match: bool,
    pub exact_match: bool,
}
