//! Orthographic diversity of a group of names.
//!
//! Diversity is the mean normalized edit distance over every unordered pair
//! drawn from a fixed-size prefix of the group. The prefix is taken in the
//! given order, so results depend only on the first [`SAMPLE_SIZE`] names.

#![forbid(unsafe_code)]

use soundalike_distance::normalized_edit_distance;
use soundalike_math::mean;

/// Number of leading names considered.
pub const SAMPLE_SIZE: usize = 5;

/// Mean pairwise normalized edit distance across the first [`SAMPLE_SIZE`] names.
///
/// Returns `0.0` when fewer than two names are available.
#[must_use]
pub fn diversity<S: AsRef<str>>(names: &[S]) -> f64 {
    let sample = &names[..names.len().min(SAMPLE_SIZE)];
    if sample.len() < 2 {
        return 0.0;
    }

    let mut distances = Vec::with_capacity(sample.len() * (sample.len() - 1) / 2);
    for (i, left) in sample.iter().enumerate() {
        for right in &sample[i + 1..] {
            distances.push(normalized_edit_distance(left.as_ref(), right.as_ref()));
        }
    }
    mean(&distances)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_are_zero() {
        let empty: [&str; 0] = [];
        assert_eq!(diversity(&empty), 0.0);
        assert_eq!(diversity(&["Katherine"]), 0.0);
    }

    #[test]
    fn pair_is_normalized_edit_distance() {
        // Katherine -> Catherine is a single substitution over 9 chars.
        assert_eq!(diversity(&["Katherine", "Catherine"]), 1.0 / 9.0);
    }

    #[test]
    fn identical_names_have_zero_diversity() {
        assert_eq!(diversity(&["Ann", "Ann", "Ann"]), 0.0);
    }

    #[test]
    fn names_past_the_sample_are_ignored() {
        let base = ["Jon", "John", "Jonn", "Jhon", "Joan"];
        let mut extended = base.to_vec();
        extended.push("Giovanni");
        assert_eq!(diversity(&base), diversity(&extended));
    }

    #[test]
    fn accepts_owned_strings() {
        let names = vec!["ab".to_string(), "cd".to_string()];
        assert_eq!(diversity(&names), 1.0);
    }
}
