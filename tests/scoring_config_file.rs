//! Loading custom scoring tables from disk and scoring with them.

use std::io::Write;
use std::sync::Arc;

use wordhint::embedding::{MockClassifier, MockEmbedder};
use wordhint::{Config, ConfigError, Entailment, RelationType, SimilarityEngine};

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn config_for(file: &tempfile::NamedTempFile) -> Config {
    Config {
        scoring_config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    }
}

#[test]
fn test_english_tables() {
    let file = write_config(
        r#"{
            "weights": { "semantic": 0.4, "relational": 0.4, "formative": 0.2 },
            "affirmative_templates": ["{input} is related to {answer}."],
            "contradiction_templates": ["{input} is the opposite of {answer}."],
            "relationship_taxonomy": [
                { "relation": "place", "template": "{answer} happens at {input}." },
                { "relation": "time", "template": "{answer} happens during {input}." }
            ],
            "contextual_hints": {
                "place": {
                    "high": "Something you experience at {input}",
                    "medium": "Happens somewhere like {input}"
                }
            },
            "hint_thresholds": {
                "0": "Way off.",
                "50": "Getting warmer."
            },
            "detail_suffixes": {
                "semantic_high": "The meaning is close.",
                "relational_high": "The context is right.",
                "formative_high": "The spelling is close.",
                "contradiction": "But it is not the opposite."
            }
        }"#,
    );
    let config = config_for(&file);
    config.validate().unwrap();
    let scoring = config.load_scoring_config().unwrap();

    let classifier = MockClassifier::new()
        .when_contains("happens at", Entailment::entailment(0.9))
        .when_contains("is related to", Entailment::entailment(1.0));
    let engine = SimilarityEngine::new(
        Arc::new(MockEmbedder::new()),
        Arc::new(classifier),
        Arc::new(scoring),
    );

    let report = engine.evaluate("airport", "boarding").unwrap();

    let relationship = report.relationship.unwrap();
    assert_eq!(relationship.relation, RelationType::Place);
    // 0.4 * 1.0 + 0.4 * 1.0 + 0.2 * formative
    assert!(report.score >= 80.0);
    assert_eq!(report.hint, "Something you experience at airport");
    assert_eq!(engine.classifier().call_count(), 4);
}

#[test]
fn test_missing_level_uses_medium() {
    let file = write_config(
        r#"{
            "relationship_taxonomy": [
                { "relation": "place", "template": "{answer} happens at {input}." }
            ],
            "contextual_hints": {
                "place": { "medium": "Happens somewhere like {input}" }
            }
        }"#,
    );
    let scoring = config_for(&file).load_scoring_config().unwrap();

    let classifier = MockClassifier::new().when_contains("happens at", Entailment::entailment(0.9));
    let engine = SimilarityEngine::new(
        Arc::new(MockEmbedder::new()),
        Arc::new(classifier),
        Arc::new(scoring),
    );

    // High level is selected and falls back to medium.
    let report = engine.evaluate("airport", "boarding").unwrap();
    assert_eq!(report.hint, "Happens somewhere like airport");
}

#[test]
fn test_rejects_invalid_tables() {
    let file = write_config(r#"{ "weights": { "semantic": 1.0, "relational": 1.0, "formative": 0.0 } }"#);
    assert!(matches!(
        config_for(&file).load_scoring_config(),
        Err(ConfigError::InvalidScoring { .. })
    ));

    let file = write_config(r#"{ "affirmative_templates": ["{input} only"] }"#);
    assert!(matches!(
        config_for(&file).load_scoring_config(),
        Err(ConfigError::InvalidScoring { .. })
    ));

    let file = write_config("not json");
    assert!(matches!(
        config_for(&file).load_scoring_config(),
        Err(ConfigError::ScoringConfigParse { .. })
    ));
}

#[test]
fn test_unknown_relation_type_is_rejected() {
    let file = write_config(
        r#"{ "relationship_taxonomy": [ { "relation": "weather", "template": "{answer} {input}" } ] }"#,
    );
    assert!(matches!(
        config_for(&file).load_scoring_config(),
        Err(ConfigError::ScoringConfigParse { .. })
    ));
}
