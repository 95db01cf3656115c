//! Text utilities shared by the scorers and the hint selector.
//!
//! - [`normalize`] canonicalizes guesses for the exact-match fast path and
//!   formative comparison.
//! - [`hangul`] decomposes precomposed Hangul syllables into conjoining jamo
//!   via canonical (NFD) decomposition.
//! - [`template`] renders hypothesis and hint templates with named fields.

/// Hangul syllable decomposition.
pub mod hangul;
/// Guess/answer canonicalization.
pub mod normalize;
/// Named-placeholder templates.
pub mod template;


pub use hangul::{decompose, decompose_str, is_jamo, is_syllable};
pub use normalize::{is_exact_match, normalize};
pub use template::{Placeholder, Template, TemplateError, TemplateFields};
