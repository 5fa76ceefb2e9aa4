//! # soundalike-distance
//!
//! **Tier 1 (String Distances)**
//!
//! Thin, deterministic adapters over `strsim`. Every length and distance here
//! is measured in Unicode scalar values, never bytes.

#![forbid(unsafe_code)]

/// Jaro-Winkler similarity in `[0, 1]`, where `1.0` means identical.
///
/// Two empty strings are identical; an empty string against a non-empty one
/// has similarity `0.0`.
#[must_use]
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    strsim::jaro_winkler(a, b)
}

/// Levenshtein edit distance counted in characters.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Number of Unicode scalar values in `s`.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Edit distance divided by the length of the longer string.
///
/// Returns a value in `[0, 1]`. Two empty strings have no length to
/// normalize by and are treated as identical (`0.0`).
#[must_use]
pub fn normalized_edit_distance(a: &str, b: &str) -> f64 {
    let longest = char_len(a).max(char_len(b));
    if longest == 0 {
        return 0.0;
    }
    levenshtein(a, b) as f64 / longest as f64
}
