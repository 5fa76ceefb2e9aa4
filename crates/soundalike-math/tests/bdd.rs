use soundalike_math::{cap_one, mean, mean_u64, round_f64, safe_div};

#[test]
fn given_zero_denominator_when_dividing_then_result_is_zero() {
    let got = safe_div(99.0, 0.0);
    assert_eq!(got, 0.0);
    assert!(!got.is_nan());
}

#[test]
fn given_zero_over_zero_when_dividing_then_result_is_zero_not_nan() {
    let got = safe_div(0.0, 0.0);
    assert_eq!(got, 0.0);
}

#[test]
fn given_three_values_when_averaging_then_mean_is_exact_fraction() {
    let got = mean_u64(&[10, 7, 3]);
    assert_eq!(got, 20.0 / 3.0);
}

#[test]
fn given_fraction_when_rounding_then_requested_precision_is_applied() {
    let got = round_f64(12.34567, 3);
    assert_eq!(got, 12.346);
}

#[test]
fn given_unbounded_sum_when_capping_then_result_is_one() {
    let got = cap_one(mean(&[1.8, 2.2]));
    assert_eq!(got, 1.0);
}
