//! Fuzz target for orthographic diversity.
//!
//! Splits the input on newlines into a name list.

#![no_main]
use libfuzzer_sys::fuzz_target;
use soundalike_diversity::diversity;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let names: Vec<&str> = s.split('\n').collect();
        let d = diversity(&names);
        assert!((0.0..=1.0).contains(&d));
        assert_eq!(d, diversity(&names));
        if names.len() < 2 {
            assert_eq!(d, 0.0);
        }
    }
});
