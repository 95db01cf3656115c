//! Cross-cutting, shared constants.
//!
//! Fusion coefficients and rounding precision are fixed policy; the weight
//! defaults mirror the reference [`ScoringConfig`](crate::config::ScoringConfig).

pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.50;
pub const DEFAULT_RELATIONAL_WEIGHT: f64 = 0.35;
pub const DEFAULT_FORMATIVE_WEIGHT: f64 = 0.15;

/// Allowed drift of the weight sum away from `1.0`.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Composite penalty per unit of contradiction.
pub const CONTRADICTION_PENALTY: f64 = 0.15;

/// Multiplier applied to a neutral verdict's confidence on affirmative templates.
pub const NEUTRAL_DISCOUNT: f64 = 0.5;

/// Upper bound of the composite score.
pub const PERFECT_SCORE: f64 = 100.0;

pub const SCORE_DECIMALS: i32 = 2;
pub const BREAKDOWN_DECIMALS: i32 = 4;

/// Token limit applied to both model tokenizers.
pub const MAX_SEQ_LEN: usize = 512;

/// Output size of the stub sentence encoder.
pub const STUB_EMBEDDING_DIM: usize = 384;

/// Informational latency target exposed by the HTTP layer.
pub const DEFAULT_TARGET_LATENCY_MS: u64 = 150;

/// Rounds `value` to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
