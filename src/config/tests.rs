use super::*;
use crate::hint::LevelTemplates;
use crate::scoring::{RelationTemplate, RelationType, Weights};
use crate::text::Template;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_wordhint_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("WORDHINT_PORT");
        env::remove_var("WORDHINT_BIND_ADDR");
        env::remove_var("WORDHINT_ENCODER_PATH");
        env::remove_var("WORDHINT_NLI_PATH");
        env::remove_var("WORDHINT_SCORING_CONFIG");
        env::remove_var("WORDHINT_WARMUP");
        env::remove_var("WORDHINT_TARGET_LATENCY_MS");
    }
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn invalid_reason(config: &ScoringConfig) -> String {
    match config.validate() {
        Err(ConfigError::InvalidScoring { reason }) => reason,
        other => panic!("expected InvalidScoring, got {:?}", other),
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8000);
    assert_eq!(config.bind_addr, IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)));
    assert!(config.encoder_path.is_none());
    assert!(config.nli_path.is_none());
    assert!(config.scoring_config_path.is_none());
    assert!(config.warmup);
    assert_eq!(config.target_latency_ms, 150);
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "0.0.0.0:8000");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_wordhint_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8000);
    assert!(config.warmup);
    assert!(config.encoder_path.is_none());
}

#[test]
#[serial]
fn test_from_env_custom_values() {
    clear_wordhint_env();

    with_env_vars(
        &[
            ("WORDHINT_PORT", "3000"),
            ("WORDHINT_BIND_ADDR", "::1"),
            ("WORDHINT_ENCODER_PATH", "/models/minilm"),
            ("WORDHINT_NLI_PATH", "/models/klue-nli"),
            ("WORDHINT_SCORING_CONFIG", "/etc/wordhint/scoring.json"),
            ("WORDHINT_WARMUP", "false"),
            ("WORDHINT_TARGET_LATENCY_MS", "300"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(config.port, 3000);
            assert_eq!(
                config.bind_addr,
                IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
            );
            assert_eq!(config.encoder_path, Some(PathBuf::from("/models/minilm")));
            assert_eq!(config.nli_path, Some(PathBuf::from("/models/klue-nli")));
            assert_eq!(
                config.scoring_config_path,
                Some(PathBuf::from("/etc/wordhint/scoring.json"))
            );
            assert!(!config.warmup);
            assert_eq!(config.target_latency_ms, 300);
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_path_is_unset() {
    clear_wordhint_env();

    with_env_vars(&[("WORDHINT_NLI_PATH", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.nli_path.is_none());
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_wordhint_env();

    with_env_vars(&[("WORDHINT_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("invalid port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_wordhint_env();

    with_env_vars(&[("WORDHINT_PORT", "not_a_port")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_wordhint_env();

    with_env_vars(&[("WORDHINT_BIND_ADDR", "not.an.ip.address")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_warmup_flag() {
    clear_wordhint_env();

    with_env_vars(&[("WORDHINT_WARMUP", "sometimes")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { name: "WORDHINT_WARMUP", .. }));
    });
}

#[test]
#[serial]
fn test_invalid_latency_uses_default() {
    clear_wordhint_env();

    with_env_vars(&[("WORDHINT_TARGET_LATENCY_MS", "fast")], || {
        let config = Config::from_env().expect("should parse with fallback");
        assert_eq!(config.target_latency_ms, 150);
    });
}

#[test]
fn test_validate_model_paths() {
    let missing = Config {
        encoder_path: Some(PathBuf::from("/nonexistent/encoder")),
        ..Default::default()
    };
    assert!(matches!(missing.validate(), Err(ConfigError::PathNotFound { .. })));

    let file = Config {
        nli_path: Some(manifest_dir().join("Cargo.toml")),
        ..Default::default()
    };
    assert!(matches!(file.validate(), Err(ConfigError::NotADirectory { .. })));
}

#[test]
fn test_validate_scoring_config_path() {
    let dir = Config {
        scoring_config_path: Some(manifest_dir().join("src")),
        ..Default::default()
    };
    assert!(matches!(dir.validate(), Err(ConfigError::NotAFile { .. })));

    let ok = Config {
        encoder_path: Some(manifest_dir().join("src")),
        scoring_config_path: Some(manifest_dir().join("Cargo.toml")),
        ..Default::default()
    };
    assert!(ok.validate().is_ok());
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_reference_scoring_config_is_valid() {
    let config = ScoringConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.weights, Weights::new(0.50, 0.35, 0.15));
    assert_eq!(config.affirmative_templates.len(), 4);
    assert_eq!(config.contradiction_templates.len(), 2);
    assert_eq!(config.relationship_taxonomy.len(), 10);
    assert_eq!(config.contextual_hints.len(), 10);
    assert_eq!(
        config.hint_thresholds.keys().copied().collect::<Vec<_>>(),
        vec![0, 20, 40, 60, 80, 95]
    );
}

#[test]
fn test_reference_taxonomy_order() {
    let order: Vec<_> = ScoringConfig::default()
        .relationship_taxonomy
        .iter()
        .map(|entry| entry.relation)
        .collect();

    assert_eq!(
        order,
        vec![
            RelationType::Situation,
            RelationType::EmotionCause,
            RelationType::Attribute,
            RelationType::Place,
            RelationType::People,
            RelationType::SimilarGenre,
            RelationType::Opposite,
            RelationType::PartWhole,
            RelationType::Time,
            RelationType::Result,
        ]
    );
}

#[test]
fn test_validate_rejects_bad_weights() {
    let config = ScoringConfig {
        weights: Weights::new(0.5, 0.5, 0.5),
        ..Default::default()
    };
    assert!(invalid_reason(&config).contains("sum to 1.0"));
}

#[test]
fn test_validate_requires_zero_threshold() {
    let mut config = ScoringConfig::default();
    config.hint_thresholds.remove(&0);
    assert!(invalid_reason(&config).contains("0 entry"));

    config.hint_thresholds.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_requires_both_placeholders() {
    let mut config = ScoringConfig::default();
    config
        .contradiction_templates
        .push(Template::parse("{input}만 있다").unwrap());
    assert!(invalid_reason(&config).contains("{answer}"));
}

#[test]
fn test_validate_rejects_duplicate_taxonomy() {
    let mut config = ScoringConfig::default();
    config.relationship_taxonomy.push(RelationTemplate::new(
        RelationType::Place,
        Template::parse("{answer} {input}").unwrap(),
    ));
    assert!(invalid_reason(&config).contains("duplicate"));
}

#[test]
fn test_default_templates_parse_strictly() {
    let config = ScoringConfig::default();

    let taxonomy = config.relationship_taxonomy.iter().map(|entry| &entry.template);
    let contextual = config.contextual_hints.values().flat_map(|templates| templates.iter());
    let all: Vec<&Template> = config
        .affirmative_templates
        .iter()
        .chain(&config.contradiction_templates)
        .chain(taxonomy)
        .chain(contextual)
        .collect();

    assert!(!all.is_empty());
    for template in all {
        assert_eq!(
            Template::parse(template.as_str()).as_ref(),
            Ok(template),
            "built-in template does not parse: {}",
            template.as_str()
        );
    }
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_general_in_taxonomy() {
    let mut config = ScoringConfig::default();
    config.relationship_taxonomy.push(RelationTemplate::new(
        RelationType::General,
        Template::parse("{answer} {input}").unwrap(),
    ));
    assert!(invalid_reason(&config).contains("general"));
}

#[test]
fn test_validate_contextual_hints_use_input_only() {
    let mut config = ScoringConfig::default();
    config.contextual_hints.insert(
        RelationType::Time,
        LevelTemplates {
            high: None,
            medium: Some(Template::parse("{answer}를 떠올려 보세요").unwrap()),
            low: None,
        },
    );
    assert!(invalid_reason(&config).contains("time"));
}

#[test]
fn test_scoring_config_contextual_hint_without_medium() {
    let json = r#"{
        "contextual_hints": {
            "place": { "high": "{input}에서 일어나는 일이에요", "low": "{input}와 관련된 장소예요" }
        }
    }"#;

    let config = ScoringConfig::from_json_str(json).unwrap();

    let place = &config.contextual_hints[&RelationType::Place];
    assert!(place.medium.is_none());
    assert_eq!(place.iter().count(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_scoring_config_from_json_partial() {
    let json = r#"{
        "weights": { "semantic": 0.6, "relational": 0.3, "formative": 0.1 },
        "hint_thresholds": { "0": "멀어요", "50": "가까워요" }
    }"#;

    let config = ScoringConfig::from_json_str(json).unwrap();

    assert_eq!(config.weights, Weights::new(0.6, 0.3, 0.1));
    assert_eq!(config.hint_thresholds.len(), 2);
    assert_eq!(config.hint_thresholds[&50], "가까워요");
    // Sections not in the file keep the reference tables.
    assert_eq!(config.relationship_taxonomy.len(), 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_scoring_config_rejects_unknown_placeholder() {
    let json = r#"{ "affirmative_templates": ["{guess} and {answer}"] }"#;
    let err = ScoringConfig::from_json_str(json).unwrap_err();
    assert!(matches!(err, ConfigError::ScoringConfigParse { .. }));
}

#[test]
fn test_scoring_config_json_roundtrip() {
    let config = ScoringConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let parsed = ScoringConfig::from_json_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_scoring_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "detail_suffixes": {{
            "semantic_high": "meaning is close",
            "relational_high": "context is right",
            "formative_high": "spelling is close",
            "contradiction": "but not the opposite"
        }} }}"#
    )
    .unwrap();

    let config = Config {
        scoring_config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let scoring = config.load_scoring_config().unwrap();

    assert_eq!(scoring.detail_suffixes.contradiction, "but not the opposite");
    assert_eq!(scoring.affirmative_templates.len(), 4);
}

#[test]
fn test_scoring_config_from_missing_file() {
    let err = ScoringConfig::from_json_file(std::path::Path::new("/nonexistent/scoring.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::ScoringConfigRead { .. }));
}

#[test]
fn test_load_scoring_config_validates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "hint_thresholds": {{ "10": "only" }} }}"#).unwrap();

    let config = Config {
        scoring_config_path: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    assert!(matches!(
        config.load_scoring_config(),
        Err(ConfigError::InvalidScoring { .. })
    ));
    assert!(Config::default().load_scoring_config().is_ok());
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidPort {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("1 and 65535"));

    let err = ConfigError::InvalidScoring {
        reason: "weights must sum to 1.0, got 1.5".to_string(),
    };
    assert!(err.to_string().contains("invalid scoring config"));
    assert!(err.to_string().contains("1.5"));
}
