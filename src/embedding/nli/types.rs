use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-way verdict returned by the entailment capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntailmentLabel {
    Entailment,
    Neutral,
    Contradiction,
}

impl EntailmentLabel {
    /// Maps a model's `id2label` name (`ENTAILMENT`, `entailment`, `contradiction`, ...).
    pub fn from_model_label(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        if lower.starts_with("entail") {
            Some(Self::Entailment)
        } else if lower.starts_with("neutral") {
            Some(Self::Neutral)
        } else if lower.starts_with("contradict") {
            Some(Self::Contradiction)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entailment => "entailment",
            Self::Neutral => "neutral",
            Self::Contradiction => "contradiction",
        }
    }
}

impl fmt::Display for EntailmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top label for a single hypothesis and its confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entailment {
    pub label: EntailmentLabel,
    pub confidence: f64,
}

impl Entailment {
    /// Creates a verdict, clamping `confidence` into `[0, 1]`.
    pub fn new(label: EntailmentLabel, confidence: f64) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn entailment(confidence: f64) -> Self {
        Self::new(EntailmentLabel::Entailment, confidence)
    }

    pub fn neutral(confidence: f64) -> Self {
        Self::new(EntailmentLabel::Neutral, confidence)
    }

    pub fn contradiction(confidence: f64) -> Self {
        Self::new(EntailmentLabel::Contradiction, confidence)
    }

    /// Confidence if the label is entailment, else `0.0`.
    pub fn entailed_confidence(&self) -> f64 {
        match self.label {
            EntailmentLabel::Entailment => self.confidence,
            _ => 0.0,
        }
    }
}
