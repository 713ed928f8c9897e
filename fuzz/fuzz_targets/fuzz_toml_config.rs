//! Fuzz target for `tokdup.toml` parsing.
//!
//! Only panics and hangs matter here, not whether the input parses.

#![no_main]
use libfuzzer_sys::fuzz_target;
use tokdup_config::TomlConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = TomlConfig::parse(s);
    }
});
