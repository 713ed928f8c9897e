//! # tokdup-reader
//!
//! **Tier 2 (I/O)**
//!
//! Reads sample files: one record per line, `<id> TAB <tokens>`.
//!
//! ## What belongs here
//! * Line parsing, token delimiter detection, stdin/file fan-in
//! * Per-line and per-file warnings
//!
//! ## What does NOT belong here
//! * Sample validation (see `tokdup-model`)
//! * Tokenizing source code

mod line;
mod split;

pub use line::{Line, parse_line};
pub use split::{Delimiter, TokenSplitter};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// One parsed input record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: String,
    pub tokens: Vec<String>,
}

impl Record {
    pub fn new(id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }
}

/// Everything collected from the inputs of one run.
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    pub records: Vec<Record>,
    pub warnings: Vec<String>,
    /// Names of the inputs that were read, `stdin` included.
    pub sources: Vec<String>,
    pub files_skipped: usize,
    /// Delimiter in effect when reading finished.
    pub delimiter: Delimiter,
}

/// Accumulates records across any number of inputs.
///
/// The token delimiter is shared by all inputs, so a switch to TAB made while
/// reading one file holds for every file after it.
#[derive(Debug)]
pub struct InputReader {
    splitter: TokenSplitter,
    out: ReadOutcome,
}

pub const STDIN_NAME: &str = "stdin";

impl InputReader {
    /// `force_tab` disables auto-detection and splits on TAB from the start.
    pub fn new(force_tab: bool) -> Self {
        Self {
            splitter: TokenSplitter::new(force_tab),
            out: ReadOutcome::default(),
        }
    }

    /// Read every line of `reader`, naming it `source` in warnings.
    /// Returns the number of records taken from it.
    pub fn read_from<R: BufRead>(&mut self, source: &str, mut reader: R) -> Result<usize> {
        tracing::info!(target: "tokdup::reader", "processing {source}");
        self.out.sources.push(source.to_string());

        let mut buf = Vec::new();
        let mut line_nr = 0usize;
        let mut taken = 0usize;
        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("Failed to read {source}"))?;
            if n == 0 {
                break;
            }
            line_nr += 1;

            let text = String::from_utf8_lossy(&buf);
            match parse_line(&text) {
                Line::Blank => {}
                Line::MissingTokens { id } => {
                    self.warn(format!(
                        "{source}: line {line_nr} with id `{id}` has no tokens; skipped"
                    ));
                }
                Line::Record { id, tokens } => {
                    let tokens = self
                        .splitter
                        .split(tokens)
                        .map(str::to_string)
                        .collect::<Vec<_>>();
                    self.out.records.push(Record::new(id, tokens));
                    taken += 1;
                }
            }
        }
        Ok(taken)
    }

    /// Open and read one file.
    pub fn read_path(&mut self, path: &Path) -> Result<usize> {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        self.read_from(&path.display().to_string(), BufReader::new(file))
    }

    /// Read all `paths` in order; no paths, or `-`, means stdin.
    ///
    /// A file that cannot be opened is skipped with a warning. Errors while
    /// reading an opened input abort the run.
    pub fn read_inputs(&mut self, paths: &[PathBuf]) -> Result<()> {
        if paths.is_empty() {
            return self.read_stdin().map(|_| ());
        }
        for path in paths {
            if path.as_os_str() == "-" {
                self.read_stdin()?;
                continue;
            }
            match File::open(path) {
                Ok(file) => {
                    self.read_from(&path.display().to_string(), BufReader::new(file))?;
                }
                Err(err) => {
                    self.out.files_skipped += 1;
                    self.warn(format!("cannot read file {}: {err}", path.display()));
                }
            }
        }
        Ok(())
    }

    fn read_stdin(&mut self) -> Result<usize> {
        let stdin = std::io::stdin();
        self.read_from(STDIN_NAME, stdin.lock())
    }

    fn warn(&mut self, message: String) {
        tracing::warn!(target: "tokdup::reader", "{message}");
        self.out.warnings.push(message);
    }

    pub fn records(&self) -> &[Record] {
        &self.out.records
    }

    pub fn delimiter(&self) -> Delimiter {
        self.splitter.delimiter()
    }

    pub fn finish(mut self) -> ReadOutcome {
        self.out.delimiter = self.splitter.delimiter();
        self.out
    }
}

/// Read `paths` (or stdin) with a fresh reader.
pub fn read_inputs(paths: &[PathBuf], force_tab: bool) -> Result<ReadOutcome> {
    let mut reader = InputReader::new(force_tab);
    reader.read_inputs(paths)?;
    Ok(reader.finish())
}
