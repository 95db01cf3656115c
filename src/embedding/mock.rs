//! Scripted capabilities for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{EmbeddingError, Entailment, EntailmentClassifier, NliError, TextEmbedder};

/// Returns a fixed vector per text (or a default), counting calls.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    default: Vec<f32>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            default: vec![1.0, 0.0],
            ..Default::default()
        }
    }

    /// Every text gets `vector` unless overridden with [`with_vector`](Self::with_vector).
    pub fn with_default(mut self, vector: Vec<f32>) -> Self {
        self.default = vector;
        self
    }

    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Every call fails with an inference error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Number of `embed_batch` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextEmbedder for MockEmbedder {
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock embedder failure".to_string(),
            });
        }

        Ok(texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(*text)
                    .cloned()
                    .unwrap_or_else(|| self.default.clone())
            })
            .collect())
    }

    fn is_stub(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Verdict(Entailment),
    Fail(String),
}

/// Answers hypotheses by substring rules, checked in insertion order.
#[derive(Debug)]
pub struct MockClassifier {
    rules: Vec<(String, Outcome)>,
    default: Outcome,
    calls: AtomicUsize,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    /// Defaults to a zero-confidence neutral verdict.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            default: Outcome::Verdict(Entailment::neutral(0.0)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_default(mut self, verdict: Entailment) -> Self {
        self.default = Outcome::Verdict(verdict);
        self
    }

    /// Hypotheses containing `pattern` get `verdict`.
    pub fn when_contains(mut self, pattern: &str, verdict: Entailment) -> Self {
        self.rules
            .push((pattern.to_string(), Outcome::Verdict(verdict)));
        self
    }

    /// Hypotheses containing `pattern` fail with an inference error.
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.rules.push((
            pattern.to_string(),
            Outcome::Fail(format!("mock failure on '{}'", pattern)),
        ));
        self
    }

    /// Every hypothesis fails.
    pub fn failing() -> Self {
        Self {
            default: Outcome::Fail("mock classifier failure".to_string()),
            ..Self::new()
        }
    }

    /// Number of `classify` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EntailmentClassifier for MockClassifier {
    fn classify(&self, hypothesis: &str) -> Result<Entailment, NliError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let outcome = self
            .rules
            .iter()
            .find(|(pattern, _)| hypothesis.contains(pattern.as_str()))
            .map(|(_, outcome)| outcome)
            .unwrap_or(&self.default);

        match outcome {
            Outcome::Verdict(verdict) => Ok(*verdict),
            Outcome::Fail(reason) => Err(NliError::InferenceFailed {
                reason: reason.clone(),
            }),
        }
    }

    fn is_stub(&self) -> bool {
        true
    }
}
