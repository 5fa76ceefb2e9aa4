//! Fuzz target for `soundalike.toml` parsing.

#![no_main]
use libfuzzer_sys::fuzz_target;
use soundalike_config::UserConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = UserConfig::from_toml(s);
    }
});
