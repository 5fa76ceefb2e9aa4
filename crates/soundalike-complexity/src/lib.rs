//! Per-name complexity estimation.
//!
//! Complexity is the plain sum of independent signals:
//! 1. Length, saturating at 10 characters
//! 2. Vowel-run ("syllable") count over 5
//! 3. Characters outside `a-z` (after lower-casing) over 3, not clamped
//! 4. Spelling distance from the baseline word `"standard"`
//! 5. Phonetic density, reserved and currently always zero
//!
//! The sum is deliberately left unclamped; consumers clamp the aggregate.

use serde::Serialize;
use soundalike_distance::{char_len, jaro_winkler};
use soundalike_math::cap_one;

/// Baseline word that "ordinary" names are compared against.
pub const BASELINE_WORD: &str = "standard";

/// Character count at which the length signal saturates.
const LENGTH_SATURATION: f64 = 10.0;
const SYLLABLE_DIVISOR: f64 = 5.0;
const NON_STANDARD_DIVISOR: f64 = 3.0;

/// Individual signals that make up a name's complexity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityBreakdown {
    pub length_factor: f64,
    pub syllable_factor: f64,
    pub non_standard_factor: f64,
    pub ortho_neighbor_factor: f64,
    /// Reserved signal. Always `0.0`.
    pub phonetic_density_factor: f64,
}

impl ComplexityBreakdown {
    /// Unclamped sum of all factors.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.length_factor
            + self.syllable_factor
            + self.non_standard_factor
            + self.ortho_neighbor_factor
            + self.phonetic_density_factor
    }
}

/// Compute the complexity score for a single name.
#[must_use]
pub fn compute(name: &str) -> f64 {
    breakdown(name).total()
}

/// Compute every complexity signal for `name` without summing them.
#[must_use]
pub fn breakdown(name: &str) -> ComplexityBreakdown {
    ComplexityBreakdown {
        length_factor: cap_one(char_len(name) as f64 / LENGTH_SATURATION),
        syllable_factor: count_vowel_runs(name) as f64 / SYLLABLE_DIVISOR,
        non_standard_factor: count_non_standard(name) as f64 / NON_STANDARD_DIVISOR,
        ortho_neighbor_factor: 1.0 - jaro_winkler(name, BASELINE_WORD),
        phonetic_density_factor: phonetic_density(name),
    }
}

/// Reserved for a future phonetic-density signal.
fn phonetic_density(_name: &str) -> f64 {
    0.0
}

fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'A' | 'E' | 'I' | 'O' | 'U' | 'Y'
    )
}

/// Count maximal runs of `[aeiouy]` (either case).
fn count_vowel_runs(name: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in name.chars() {
        let vowel = is_vowel(c);
        if vowel && !in_run {
            runs += 1;
        }
        in_run = vowel;
    }
    runs
}

/// Count characters whose lower-cased form is not a single `a-z` letter.
///
/// Digits, whitespace, punctuation and diacritics all count.
fn count_non_standard(name: &str) -> usize {
    name.chars()
        .filter(|c| {
            let mut lower = c.to_lowercase();
            !matches!(
                (lower.next(), lower.next()),
                (Some('a'..='z'), None)
            )
        })
        .count()
}
