//! BDD-style scenario tests for `soundalike-score`.

use soundalike_score::{breakdown, score};
use soundalike_types::NameRecord;

fn group(values: &[u64]) -> Vec<NameRecord> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| NameRecord::new(format!("name{i}"), *v, 0.5))
        .collect()
}

// ===========================================================================
// Scenario: Uniform values
// ===========================================================================
#[test]
fn scenario_uniform_values_have_zero_spread() {
    // Given: three members with the same value
    let members = group(&[5, 5, 5]);

    // When: the score is broken down
    let b = breakdown(&members);

    // Then: spread is exactly zero
    assert_eq!(b.value_spread, 0.0);
}

// ===========================================================================
// Scenario: All-zero values
// ===========================================================================
#[test]
fn scenario_all_zero_values_use_fallback() {
    // Given: two members whose values are both zero
    let members = group(&[0, 0]);

    // When: the group is scored
    let b = breakdown(&members);
    let s = score(&members);

    // Then: the fallback spread is used and the score stays finite
    assert_eq!(b.value_spread, 0.0);
    assert!(s.is_finite());
}

// ===========================================================================
// Scenario: Members beyond the diversity sample
// ===========================================================================
#[test]
fn scenario_reordering_tail_keeps_score() {
    // Given: seven members where only the tail is permuted
    let a = group(&[1, 2, 3, 4, 5, 6, 7]);
    let mut b = a.clone();
    b.swap(5, 6);

    // Then: the numeric score is unchanged
    assert_eq!(score(&a), score(&b));
}
