use serde::{Deserialize, Serialize};

use wordhint::scoring::{RelationshipResult, ScoreBreakdown, SimilarityReport, Weights};

use super::error::GatewayError;
use super::state::ModelInfo;

/// Body of `POST /api/similarity/calculate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimilarityRequest {
    /// The player's guess.
    pub user_input: String,
    /// The hidden answer.
    pub answer: String,
}

impl SimilarityRequest {
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.user_input.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "user_input must not be empty".to_string(),
            ));
        }
        if self.answer.trim().is_empty() {
            return Err(GatewayError::InvalidRequest(
                "answer must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResponse {
    /// Composite score, `0..=100`.
    pub similarity_score: f64,
    pub hint: String,
    pub category_match: bool,
    pub breakdown: ScoreBreakdown,
    pub relationship: Option<RelationshipResult>,
    pub processing_time_ms: f64,
}

impl SimilarityResponse {
    pub fn from_report(report: SimilarityReport, processing_time_ms: f64) -> Self {
        Self {
            similarity_score: report.score,
            hint: report.hint,
            category_match: report.category_match,
            breakdown: report.breakdown,
            relationship: report.relationship,
            processing_time_ms,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub features: [&'static str; 5],
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models_loaded: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub weights: Weights,
    pub models: &'a ModelInfo,
    pub target_latency_ms: u64,
}
