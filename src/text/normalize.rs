use unicode_normalization::UnicodeNormalization;

use super::hangul;

/// Canonicalizes raw guess/answer text.
///
/// Composes to NFC, lowercases, drops all whitespace, then keeps only ASCII
/// word characters (`[A-Za-z0-9_]`) and Hangul (syllables and jamo). The kept
/// text is composed again so jamo left adjacent by filtering join into
/// syllables. Total and idempotent; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    text.nfc()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace())
        .filter(|&c| is_kept(c))
        .nfc()
        .collect()
}

/// Returns `true` when both strings normalize to the same text.
pub fn is_exact_match(guess: &str, answer: &str) -> bool {
    normalize(guess) == normalize(answer)
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || hangul::is_syllable(c) || hangul::is_jamo(c)
}
