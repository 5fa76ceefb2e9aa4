//! Fuzz target for per-name complexity.
//!
//! Any UTF-8 string is a valid name; the score must be finite, non-negative
//! and equal to the sum of its breakdown.

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let score = soundalike_complexity::compute(name);
        assert!(score.is_finite());
        assert!(score >= 0.0);
        assert_eq!(score, soundalike_complexity::breakdown(name).total());
    }
});
