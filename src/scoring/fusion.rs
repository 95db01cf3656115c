use crate::constants::{CONTRADICTION_PENALTY, PERFECT_SCORE, SCORE_DECIMALS, round_to};

use super::types::{FusedScore, ScoreBreakdown, Weights};

/// Weighted sum of the three signals, minus the contradiction penalty,
/// clamped to `[0, 1]` and scaled to `0..=100`.
///
/// The reported contradiction is the raw signal; the penalty only touches
/// the composite.
pub fn fuse(signals: &ScoreBreakdown, weights: &Weights) -> FusedScore {
    let weighted = signals.semantic * weights.semantic
        + signals.relational * weights.relational
        + signals.formative * weights.formative;

    let penalized = weighted - signals.contradiction * CONTRADICTION_PENALTY;
    let raw = penalized.clamp(0.0, 1.0);

    FusedScore {
        score: round_to(raw * PERFECT_SCORE, SCORE_DECIMALS),
        breakdown: signals.rounded(),
    }
}
