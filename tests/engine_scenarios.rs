//! End-to-end evaluations through the public API.

use std::sync::Arc;

use wordhint::embedding::{MockClassifier, MockEmbedder};
use wordhint::{
    CORRECT_HINT, Entailment, EXACT_MATCH_HINT, NliClassifier, RelationType, ScoreBreakdown,
    ScoringConfig, SentenceEncoder, SimilarityEngine,
};

fn stub_engine() -> SimilarityEngine<SentenceEncoder, NliClassifier> {
    SimilarityEngine::new(
        Arc::new(SentenceEncoder::stub().unwrap()),
        Arc::new(NliClassifier::stub().unwrap()),
        Arc::new(ScoringConfig::default()),
    )
}

#[test]
fn test_stub_engine_is_bounded_and_deterministic() {
    let engine = stub_engine();

    for (guess, answer) in [("친구", "배신"), ("라이어", "라이어게임"), ("apple", "사과")] {
        let first = engine.evaluate(guess, answer).unwrap();
        let second = engine.evaluate(guess, answer).unwrap();

        assert!((0.0..=100.0).contains(&first.score));
        assert_eq!(first, second);

        let b = first.breakdown;
        for value in [b.semantic, b.relational, b.formative, b.contradiction] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}

#[test]
fn test_stub_engine_neutral_verdicts() {
    let report = stub_engine().evaluate("친구", "배신").unwrap();

    // Every hypothesis is neutral at 0.5.
    assert_eq!(report.breakdown.relational, 0.25);
    assert_eq!(report.breakdown.contradiction, 0.0);
    let relationship = report.relationship.unwrap();
    assert_eq!(relationship.relation, RelationType::General);
    assert_eq!(relationship.confidence, 0.0);
    assert!(!report.category_match);
}

#[test]
fn test_stub_engine_is_symmetric() {
    let engine = stub_engine();

    let forward = engine.evaluate("친구", "배신").unwrap();
    let backward = engine.evaluate("배신", "친구").unwrap();

    assert_eq!(forward.score, backward.score);
    assert_eq!(forward.breakdown, backward.breakdown);
}

#[test]
fn test_exact_match_shape_matches_general_path() {
    let engine = stub_engine();

    let exact = engine.evaluate("Liar Game", "liargame").unwrap();
    assert_eq!(exact.score, 100.0);
    assert_eq!(exact.breakdown, ScoreBreakdown::new(1.0, 1.0, 1.0, 0.0));
    assert_eq!(exact.hint, EXACT_MATCH_HINT);

    let general = serde_json::to_value(engine.evaluate("친구", "배신").unwrap()).unwrap();
    let exact = serde_json::to_value(exact).unwrap();
    let keys = |v: &serde_json::Value| {
        let mut keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };
    assert_eq!(keys(&exact), keys(&general));
    assert_eq!(keys(&exact["breakdown"]), keys(&general["breakdown"]));
}

#[test]
fn test_near_perfect_score_is_not_celebrated() {
    // Semantic and relational saturate; only formative keeps it below 100.
    let classifier = MockClassifier::new()
        .with_default(Entailment::entailment(1.0))
        .when_contains("반대되는 의미다", Entailment::neutral(1.0))
        .when_contains("서로 상반된다", Entailment::neutral(1.0));
    let engine = SimilarityEngine::new(
        Arc::new(MockEmbedder::new()),
        Arc::new(classifier),
        Arc::new(ScoringConfig::default()),
    );

    let report = engine.evaluate("사과", "사과!?").unwrap();
    assert!(report.exact_match);

    let report = engine.evaluate("ab", "abc").unwrap();
    assert!(!report.exact_match);
    assert!(report.score < 100.0);
    assert_ne!(report.hint, CORRECT_HINT);
}

#[test]
fn test_relationship_uses_taxonomy_order() {
    let classifier = MockClassifier::new()
        .when_contains("비슷한 종류다", Entailment::entailment(0.8))
        .when_contains("결과로 생기는", Entailment::entailment(0.8));
    let engine = SimilarityEngine::new(
        Arc::new(MockEmbedder::new()),
        Arc::new(classifier),
        Arc::new(ScoringConfig::default()),
    );

    let report = engine.evaluate("축구", "야구").unwrap();

    let relationship = report.relationship.unwrap();
    assert_eq!(relationship.relation, RelationType::SimilarGenre);
    assert!(report.hint.starts_with("축구"));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = stub_engine();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.evaluate("친구", "배신").unwrap().score)
        })
        .collect();

    let scores: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] == w[1]));
}
