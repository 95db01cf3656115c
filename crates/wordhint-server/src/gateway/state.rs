use std::sync::Arc;

use wordhint::embedding::{EntailmentClassifier, TextEmbedder};
use wordhint::scoring::SimilarityEngine;

/// Descriptors reported by `/api/config`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ModelInfo {
    pub semantic: String,
    pub nli: String,
}

pub struct HandlerState<E, C>
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    pub engine: SimilarityEngine<E, C>,

    pub models: Arc<ModelInfo>,

    pub target_latency_ms: u64,
}

impl<E, C> Clone for HandlerState<E, C>
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            models: Arc::clone(&self.models),
            target_latency_ms: self.target_latency_ms,
        }
    }
}

impl<E, C> HandlerState<E, C>
where
    E: TextEmbedder + 'static,
    C: EntailmentClassifier + 'static,
{
    pub fn new(engine: SimilarityEngine<E, C>, models: ModelInfo, target_latency_ms: u64) -> Self {
        Self {
            engine,
            models: Arc::new(models),
            target_latency_ms,
        }
    }
}
