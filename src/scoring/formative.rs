//! Orthographic/phonetic similarity over decomposed unit sequences.

use crate::text::hangul::decompose_str;

/// Similarity in `[0, 1]` from the jamo-level edit distance of `a` and `b`.
///
/// Callers pass normalized text. Two empty inputs are identical (`1.0`).
pub fn formative_similarity(a: &str, b: &str) -> f64 {
    let units_a = decompose_str(a);
    let units_b = decompose_str(b);

    let max_len = units_a.len().max(units_b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(&units_a, &units_b);
    (1.0 - distance as f64 / max_len as f64).max(0.0)
}

/// Unit-cost Levenshtein distance (two-row dynamic programming).
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let substitution = previous[j] + usize::from(x != y);
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            current[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}
