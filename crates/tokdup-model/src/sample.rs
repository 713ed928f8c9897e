//! The dual sequence/bag representation of one record.

use rustc_hash::FxHashMap;

use crate::vocabulary::{TokenId, Vocabulary};

/// One entry of a token bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenCount {
    pub id: TokenId,
    pub freq: u32,
}

/// A record as token ids, kept both in order and as a sorted multiset.
///
/// Invariants: `bag` is strictly ascending by id, holds one entry per distinct
/// id of `seq`, and its frequencies sum to `seq.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    id: String,
    seq: Vec<TokenId>,
    bag: Vec<TokenCount>,
}

/// Intern `tokens` in order and collect the positions of every id.
pub(crate) fn index_positions<S: AsRef<str>>(
    tokens: &[S],
    vocab: &mut Vocabulary,
) -> FxHashMap<TokenId, Vec<usize>> {
    let mut positions: FxHashMap<TokenId, Vec<usize>> = FxHashMap::default();
    for (pos, token) in tokens.iter().enumerate() {
        let id = vocab.intern(token.as_ref());
        positions.entry(id).or_default().push(pos);
    }
    positions
}

impl Sample {
    /// Build a sample from token strings, interning them in `vocab`.
    pub fn from_tokens<S: AsRef<str>>(
        id: impl Into<String>,
        tokens: &[S],
        vocab: &mut Vocabulary,
    ) -> Self {
        let positions = index_positions(tokens, vocab);
        Self::assemble(id.into(), tokens.len(), positions)
    }

    /// Build a sample from already-interned ids.
    pub fn from_ids(id: impl Into<String>, ids: &[TokenId]) -> Self {
        let mut positions: FxHashMap<TokenId, Vec<usize>> = FxHashMap::default();
        for (pos, &tok) in ids.iter().enumerate() {
            positions.entry(tok).or_default().push(pos);
        }
        Self::assemble(id.into(), ids.len(), positions)
    }

    pub(crate) fn assemble(
        id: String,
        len: usize,
        positions: FxHashMap<TokenId, Vec<usize>>,
    ) -> Self {
        let mut entries: Vec<(TokenId, Vec<usize>)> = positions.into_iter().collect();
        entries.sort_unstable_by_key(|(tok, _)| *tok);

        let mut seq = vec![0; len];
        let mut bag = Vec::with_capacity(entries.len());
        for (tok, at) in &entries {
            for &pos in at {
                seq[pos] = *tok;
            }
            bag.push(TokenCount {
                id: *tok,
                freq: at.len() as u32,
            });
        }

        Self { id, seq, bag }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Token ids in input order.
    pub fn seq(&self) -> &[TokenId] {
        &self.seq
    }

    /// `(id, frequency)` pairs sorted by id.
    pub fn bag(&self) -> &[TokenCount] {
        &self.bag
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Number of distinct token ids.
    pub fn distinct(&self) -> usize {
        self.bag.len()
    }
}
