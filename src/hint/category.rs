//! Category/domain gating.
//!
//! Not implemented: every guess is reported as outside the answer's category
//! except an exact match, which the engine reports directly.

/// Always `false`.
pub fn category_match(_guess: &str, _answer: &str) -> bool {
    false
}
