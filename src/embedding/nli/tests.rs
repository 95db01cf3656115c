use super::*;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = NliConfig::default();

    assert!(config.model_path.is_none());
    assert_eq!(config.max_seq_len, crate::constants::MAX_SEQ_LEN);
}

#[test]
fn test_config_new() {
    let config = NliConfig::new("/models/nli");

    assert_eq!(config.model_path, Some(PathBuf::from("/models/nli")));
}

#[test]
fn test_config_validate() {
    assert!(NliConfig::default().validate().is_ok());

    let empty_path = NliConfig::new("");
    assert!(empty_path.validate().is_err());

    let zero_len = NliConfig::stub().with_max_seq_len(0);
    assert!(zero_len.validate().is_err());
}

#[test]
fn test_stub_classifier_creation() {
    let classifier = NliClassifier::stub().unwrap();

    assert!(!classifier.is_model_loaded());
    assert!(EntailmentClassifier::is_stub(&classifier));
}

#[test]
fn test_stub_classifier_is_neutral() {
    let classifier = NliClassifier::stub().unwrap();
    let verdict = classifier.classify("친구은 배신과 관련이 있다.").unwrap();

    assert_eq!(verdict.label, EntailmentLabel::Neutral);
    assert_eq!(verdict.confidence, STUB_CONFIDENCE);
}

#[test]
fn test_load_with_missing_model() {
    let result = NliClassifier::load(NliConfig::new("/nonexistent/path/nli"));

    assert!(matches!(result, Err(NliError::ModelNotFound { .. })));
}

#[test]
fn test_load_with_incomplete_model_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{}").unwrap();

    let result = NliClassifier::load(NliConfig::new(dir.path()));

    assert!(matches!(result, Err(NliError::ModelLoadFailed { .. })));
}

#[test]
fn test_load_invalid_config() {
    let result = NliClassifier::load(NliConfig::stub().with_max_seq_len(0));

    assert!(matches!(result, Err(NliError::InvalidConfig { .. })));
}

#[test]
fn test_label_mapping() {
    assert_eq!(
        EntailmentLabel::from_model_label("ENTAILMENT"),
        Some(EntailmentLabel::Entailment)
    );
    assert_eq!(
        EntailmentLabel::from_model_label("entailed"),
        Some(EntailmentLabel::Entailment)
    );
    assert_eq!(
        EntailmentLabel::from_model_label(" neutral "),
        Some(EntailmentLabel::Neutral)
    );
    assert_eq!(
        EntailmentLabel::from_model_label("CONTRADICTION"),
        Some(EntailmentLabel::Contradiction)
    );
    assert_eq!(EntailmentLabel::from_model_label("LABEL_0"), None);
}

#[test]
fn test_entailment_clamps_confidence() {
    assert_eq!(Entailment::entailment(1.7).confidence, 1.0);
    assert_eq!(Entailment::neutral(-0.2).confidence, 0.0);
}

#[test]
fn test_entailed_confidence() {
    assert_eq!(Entailment::entailment(0.8).entailed_confidence(), 0.8);
    assert_eq!(Entailment::neutral(0.8).entailed_confidence(), 0.0);
    assert_eq!(Entailment::contradiction(0.8).entailed_confidence(), 0.0);
}

#[test]
fn test_error_display() {
    let err = NliError::UnknownLabel {
        label: "LABEL_7".to_string(),
    };
    assert!(err.to_string().contains("LABEL_7"));
}
