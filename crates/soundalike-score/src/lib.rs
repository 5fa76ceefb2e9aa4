//! # soundalike-score
//!
//! **Tier 2 (Confusion Scoring)**
//!
//! Combines four bounded signals into one confusion score:
//!
//! | factor | formula | weight |
//! |---|---|---|
//! | size penalty | `min(1, n / 5)` | 0.30 |
//! | complexity | `min(1, max complexity)` | 0.40 |
//! | value spread | `1 - min / max` (0 when max is 0) | 0.20 |
//! | orthographic diversity | see `soundalike-diversity` | 0.10 |

use serde::Serialize;
use soundalike_diversity::diversity;
use soundalike_math::{cap_one, safe_div};
use soundalike_types::NameRecord;

pub const SIZE_WEIGHT: f64 = 0.30;
pub const COMPLEXITY_WEIGHT: f64 = 0.40;
pub const SPREAD_WEIGHT: f64 = 0.20;
pub const DIVERSITY_WEIGHT: f64 = 0.10;

/// Group size at which the size penalty saturates.
const SIZE_SATURATION: f64 = 5.0;

/// Per-factor view of a confusion score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub size_penalty: f64,
    pub complexity_factor: f64,
    pub value_spread: f64,
    pub ortho_diversity: f64,
}

impl ScoreBreakdown {
    /// Weighted sum of the factors.
    #[must_use]
    pub fn score(&self) -> f64 {
        SIZE_WEIGHT * self.size_penalty
            + COMPLEXITY_WEIGHT * self.complexity_factor
            + SPREAD_WEIGHT * self.value_spread
            + DIVERSITY_WEIGHT * self.ortho_diversity
    }
}

/// Confusion score for a group of records.
#[must_use]
pub fn score(members: &[NameRecord]) -> f64 {
    breakdown(members).score()
}

/// Compute every factor of the confusion score for `members`.
#[must_use]
pub fn breakdown(members: &[NameRecord]) -> ScoreBreakdown {
    let names: Vec<&str> = members.iter().map(NameRecord::name).collect();
    ScoreBreakdown {
        size_penalty: cap_one(members.len() as f64 / SIZE_SATURATION),
        complexity_factor: cap_one(max_complexity(members)),
        value_spread: value_spread(members),
        ortho_diversity: diversity(&names),
    }
}

fn max_complexity(members: &[NameRecord]) -> f64 {
    members
        .iter()
        .map(NameRecord::complexity)
        .fold(0.0, f64::max)
}

/// `1 - min / max` over member values.
///
/// A group whose values are all zero has no spread to report and yields
/// `0.0` instead of dividing by zero.
#[must_use]
pub fn value_spread(members: &[NameRecord]) -> f64 {
    let Some(max) = members.iter().map(NameRecord::value).max() else {
        return 0.0;
    };
    if max == 0 {
        return 0.0;
    }
    let min = members.iter().map(NameRecord::value).min().unwrap_or(max);
    1.0 - safe_div(min as f64, max as f64)
}
