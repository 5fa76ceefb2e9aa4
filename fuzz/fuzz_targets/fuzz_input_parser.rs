//! Fuzz target for name list parsing.
//!
//! The first byte picks the delimiter; the rest is the file body. Only
//! panics matter, parse errors are expected.

#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((first, rest)) = data.split_first() else {
        return;
    };
    let delimiter = if first.is_ascii_graphic() || *first == b'\t' {
        *first as char
    } else {
        ','
    };
    if let Ok(text) = std::str::from_utf8(rest)
        && let Ok(records) = soundalike_input::parse_str(text, delimiter)
    {
        assert!(records.iter().all(|r| !r.name.is_empty()));
    }
});
