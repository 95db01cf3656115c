//! Game tables: fusion weights, hypothesis templates, relation taxonomy and
//! hint text.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::hint::{DetailSuffixes, LevelTemplates};
use crate::scoring::{RelationTemplate, RelationType, Weights};
use crate::text::{Placeholder, Template};

use super::defaults;
use super::error::ConfigError;

const PAIR: &[Placeholder] = &[Placeholder::Input, Placeholder::Answer];

/// Process-wide, read-only scoring configuration.
///
/// `Default` is the Korean reference configuration. Call [`validate`](Self::validate)
/// once at startup; the engine assumes a validated config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: Weights,
    /// Hypotheses whose entailment supports the relational signal.
    pub affirmative_templates: Vec<Template>,
    /// Hypotheses probing for opposite meaning.
    pub contradiction_templates: Vec<Template>,
    /// Ordered; earlier entries win ties.
    pub relationship_taxonomy: Vec<RelationTemplate>,
    pub contextual_hints: HashMap<RelationType, LevelTemplates>,
    /// Score lower bound to base hint. Must contain `0`.
    pub hint_thresholds: BTreeMap<u32, String>,
    pub detail_suffixes: DetailSuffixes,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            affirmative_templates: defaults::affirmative_templates(),
            contradiction_templates: defaults::contradiction_templates(),
            relationship_taxonomy: defaults::relationship_taxonomy(),
            contextual_hints: defaults::contextual_hints(),
            hint_thresholds: defaults::hint_thresholds(),
            detail_suffixes: defaults::detail_suffixes(),
        }
    }
}

impl ScoringConfig {
    /// Reads a JSON file. Missing sections keep their reference defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ScoringConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "Loaded scoring config");
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|e| ConfigError::ScoringConfigParse { source: e })
    }

    /// Startup validation of every table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate().map_err(invalid)?;

        if !self.hint_thresholds.contains_key(&0) {
            return Err(invalid("hint thresholds must include a 0 entry"));
        }

        if self.affirmative_templates.is_empty() {
            return Err(invalid("at least one affirmative template is required"));
        }
        for template in self
            .affirmative_templates
            .iter()
            .chain(&self.contradiction_templates)
        {
            template.require(PAIR).map_err(invalid)?;
        }

        let mut seen = HashSet::new();
        for entry in &self.relationship_taxonomy {
            if entry.relation == RelationType::General {
                return Err(invalid("'general' is the fallback and cannot be a taxonomy entry"));
            }
            if !seen.insert(entry.relation) {
                return Err(invalid(format!(
                    "duplicate taxonomy entry '{}'",
                    entry.relation
                )));
            }
            entry.template.require(PAIR).map_err(invalid)?;
        }

        for (relation, templates) in &self.contextual_hints {
            for template in templates.iter() {
                template
                    .require(&[Placeholder::Input])
                    .and_then(|_| template.forbid(&[Placeholder::Answer]))
                    .map_err(|e| invalid(format!("contextual hint for '{}': {}", relation, e)))?;
            }
        }

        Ok(())
    }
}

fn invalid(reason: impl ToString) -> ConfigError {
    ConfigError::InvalidScoring {
        reason: reason.to_string(),
    }
}
