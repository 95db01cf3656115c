use tracing::debug;

use crate::embedding::TextEmbedder;

use super::error::ScoringError;

/// Cosine similarity of two embeddings, `None` if undefined.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return None;
    }
    Some(dot / (norm_a.sqrt() * norm_b.sqrt()))
}

/// Embedding-space similarity remapped to `[0, 1]`.
pub struct SemanticScorer<'a, E: TextEmbedder + ?Sized> {
    embedder: &'a E,
}

impl<'a, E: TextEmbedder + ?Sized> SemanticScorer<'a, E> {
    pub fn new(embedder: &'a E) -> Self {
        Self { embedder }
    }

    /// Embeds both raw texts in one batch and returns `(cos + 1) / 2`.
    pub fn score(&self, input: &str, answer: &str) -> Result<f64, ScoringError> {
        let embeddings = self.embedder.embed_batch(&[input, answer])?;

        let [a, b] = embeddings.as_slice() else {
            return Err(ScoringError::ComputationFailed {
                reason: format!("expected 2 embeddings, got {}", embeddings.len()),
            });
        };

        let cosine = cosine_similarity(a, b).ok_or_else(|| ScoringError::ComputationFailed {
            reason: format!(
                "cosine similarity undefined for embeddings of length {} and {}",
                a.len(),
                b.len()
            ),
        })?;

        let similarity = ((cosine + 1.0) / 2.0).clamp(0.0, 1.0);
        debug!(cosine, similarity, "Semantic similarity computed");

        Ok(similarity)
    }
}
