//! Fuzz target for the JSON entrypoint.
//!
//! Whatever the arguments, `run_json` must answer with a parseable envelope.

#![no_main]

use libfuzzer_sys::fuzz_target;

const MAX_INPUT_SIZE: usize = 4 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(args) = std::str::from_utf8(data) else {
        return;
    };

    let mode = if data.first().is_some_and(|b| b & 1 == 1) {
        "version"
    } else {
        "cluster"
    };
    let response = tokdup_core::ffi::run_json(mode, args);
    let envelope: serde_json::Value =
        serde_json::from_str(&response).expect("run_json must return valid JSON");
    assert!(envelope["ok"].is_boolean());
});
