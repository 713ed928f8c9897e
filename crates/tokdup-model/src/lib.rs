//! # tokdup-model
//!
//! **Tier 1 (Model)**
//!
//! Turns raw `(id, tokens)` records into [`Sample`]s: an order-preserving
//! token-id sequence plus a sparse, id-sorted frequency bag. Token strings are
//! interned once per run by a [`Vocabulary`] owned by the [`SampleSet`].

mod sample;
mod vocabulary;

pub use sample::{Sample, TokenCount};
pub use vocabulary::{TokenId, Vocabulary};

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Why a record did not become a sample. All variants are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("non-unique id {id}; sample discarded")]
    DuplicateId { id: String },

    #[error("sample {id} has {tokens} tokens, less than {minimum}; discarded")]
    TooFewTokens {
        id: String,
        tokens: usize,
        minimum: usize,
    },

    #[error("sample {id} has no tokens; discarded")]
    Empty { id: String },
}

/// All valid samples of a run, in input order, plus the run's vocabulary.
#[derive(Debug, Default)]
pub struct SampleSet {
    vocab: Vocabulary,
    samples: Vec<Sample>,
    known_ids: FxHashSet<String>,
    min_tokens: usize,
    discarded: usize,
    duplicate_ids: usize,
}

impl SampleSet {
    /// Create an empty set that discards records with fewer than `min_tokens` tokens.
    pub fn new(min_tokens: usize) -> Self {
        Self {
            min_tokens,
            ..Default::default()
        }
    }

    /// Build a sample from one record and append it.
    ///
    /// Returns the new sample's position. Tokens of a record that is discarded
    /// for being too short are still interned.
    pub fn ingest<S: AsRef<str>>(&mut self, id: &str, tokens: &[S]) -> Result<usize, Rejection> {
        match self.try_ingest(id, tokens) {
            Ok(index) => Ok(index),
            Err(rejection) => {
                tracing::warn!(target: "tokdup::model", "{rejection}");
                Err(rejection)
            }
        }
    }

    fn try_ingest<S: AsRef<str>>(&mut self, id: &str, tokens: &[S]) -> Result<usize, Rejection> {
        if self.known_ids.contains(id) {
            self.duplicate_ids += 1;
            return Err(Rejection::DuplicateId { id: id.to_string() });
        }

        let positions = sample::index_positions(tokens, &mut self.vocab);

        if tokens.is_empty() {
            self.discarded += 1;
            return Err(Rejection::Empty { id: id.to_string() });
        }
        if tokens.len() < self.min_tokens {
            self.discarded += 1;
            return Err(Rejection::TooFewTokens {
                id: id.to_string(),
                tokens: tokens.len(),
                minimum: self.min_tokens,
            });
        }

        let sample = Sample::assemble(id.to_string(), tokens.len(), positions);
        self.known_ids.insert(id.to_string());
        self.samples.push(sample);
        Ok(self.samples.len() - 1)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn min_tokens(&self) -> usize {
        self.min_tokens
    }

    /// Records dropped for having too few tokens.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Records dropped because their id was already taken.
    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }
}
