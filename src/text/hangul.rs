//! Hangul block membership and canonical decomposition.
//!
//! Precomposed syllables (U+AC00..=U+D7A3) decompose canonically into a
//! leading consonant, a vowel and an optional trailing consonant from the
//! conjoining jamo block (U+1100..). Compound vowels and compound finals stay
//! single code points.

use unicode_normalization::UnicodeNormalization;

/// Returns `true` for characters in the precomposed Hangul Syllables block.
pub fn is_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

/// Returns `true` for conjoining and compatibility jamo.
pub fn is_jamo(c: char) -> bool {
    matches!(
        c,
        '\u{1100}'..='\u{11FF}'
            | '\u{3130}'..='\u{318F}'
            | '\u{A960}'..='\u{A97F}'
            | '\u{D7B0}'..='\u{D7FF}'
    )
}

/// Appends the phonetic components of `c` to `out`.
///
/// Non-syllable characters are appended unchanged.
pub fn decompose(c: char, out: &mut Vec<char>) {
    if is_syllable(c) {
        out.extend(std::iter::once(c).nfd());
    } else {
        out.push(c);
    }
}

/// Decomposes a whole string into its ordered unit sequence.
pub fn decompose_str(text: &str) -> Vec<char> {
    let mut units = Vec::with_capacity(text.len());
    for c in text.chars() {
        decompose(c, &mut units);
    }
    units
}
