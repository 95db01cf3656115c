//! Hint selection: turns a score, its breakdown and the relationship
//! classification into one user-facing sentence.
//!
//! The policy is layered:
//! - a perfect score gets the celebratory hint;
//! - a confident relationship gets a contextual hint built from the guess;
//! - otherwise the base hint comes from the threshold table;
//! - a dominant signal may append a detail suffix.

pub mod category;
pub mod level;
pub mod selector;


pub use category::category_match;
pub use level::{HintLevel, LevelTemplates};
pub use selector::{DetailSuffixes, HintSelector};

/// Returned when the composite score is perfect.
pub const CORRECT_HINT: &str = "정답입니다! 🎉";

/// Returned by the exact-match fast path.
pub const EXACT_MATCH_HINT: &str = "정답과 완전히 동일한 단어예요!";
