//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Divide and guard division by zero, returning `0.0` for a zero denominator.
#[must_use]
pub fn safe_div(numer: f64, denom: f64) -> f64 {
    if denom == 0.0 { 0.0 } else { numer / denom }
}

/// Arithmetic mean of a slice, `0.0` when empty.
///
/// Summation runs left to right so the result is reproducible for a given
/// input order.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Arithmetic mean of unsigned integers, `0.0` when empty.
#[must_use]
pub fn mean_u64(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: u128 = values.iter().map(|v| u128::from(*v)).sum();
    sum as f64 / values.len() as f64
}

/// Cap a value at `1.0` from above. Values below are passed through untouched.
#[must_use]
pub fn cap_one(value: f64) -> f64 {
    value.min(1.0)
}
