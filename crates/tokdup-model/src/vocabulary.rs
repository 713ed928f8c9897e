//! Append-only interning of token strings.

use rustc_hash::FxHashMap;

/// Dense token identifier, assigned in first-occurrence order.
pub type TokenId = u32;

/// Maps token text to a dense [`TokenId`].
///
/// Ids come from the number of distinct tokens at insertion time, so they
/// depend only on the order in which tokens are first seen.
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    ids: FxHashMap<Box<str>, TokenId>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `text`, assigning the next one if it is new.
    pub fn intern(&mut self, text: &str) -> TokenId {
        if let Some(&id) = self.ids.get(text) {
            return id;
        }
        let id = self.ids.len() as TokenId;
        self.ids.insert(text.into(), id);
        id
    }

    /// Look up `text` without interning it.
    pub fn get(&self, text: &str) -> Option<TokenId> {
        self.ids.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
