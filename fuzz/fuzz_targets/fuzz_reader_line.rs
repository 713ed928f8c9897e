//! Fuzz target for input line handling.
//!
//! Feeds arbitrary bytes through the full reader and checks that every
//! record it yields has an id and at least one non-empty token.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tokdup_reader::{InputReader, Line, parse_line};

const MAX_INPUT_SIZE: usize = 8 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }

    let text = String::from_utf8_lossy(data);
    for raw in text.lines() {
        match parse_line(raw) {
            Line::Blank => assert!(raw.trim_end().is_empty()),
            Line::MissingTokens { id } => assert!(!id.contains('\t')),
            Line::Record { id, .. } => assert!(!id.contains('\t')),
        }
    }

    let force_tab = data.first().is_some_and(|b| b & 1 == 1);
    let mut reader = InputReader::new(force_tab);
    if reader.read_from("fuzz", data).is_err() {
        return;
    }
    let outcome = reader.finish();
    for record in &outcome.records {
        assert!(!record.tokens.is_empty());
        assert!(record.tokens.iter().all(|t| !t.is_empty()));
    }
});
