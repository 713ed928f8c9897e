//! Fuzz target for the similarity metrics.
//!
//! Bytes before the first 0xff form sample A, the rest sample B; each byte is
//! a token id. Checks ranges and symmetry of every metric.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tokdup_model::{Sample, TokenId};
use tokdup_similarity::{cosine, jaccard, lcs_length, lcs_ratio, lcs_upper_bound};

const MAX_INPUT_SIZE: usize = 2048;
const SPLIT_BYTE: u8 = 0xff;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }

    let mut parts = data.splitn(2, |b| *b == SPLIT_BYTE);
    let ids = |bytes: &[u8]| -> Vec<TokenId> { bytes.iter().map(|b| TokenId::from(*b)).collect() };
    let a = Sample::from_ids("a", &ids(parts.next().unwrap_or_default()));
    let b = Sample::from_ids("b", &ids(parts.next().unwrap_or_default()));

    let j = jaccard(a.bag(), b.bag());
    assert!((0.0..=1.0).contains(&j.set));
    assert!((0.0..=1.0).contains(&j.multiset));
    assert_eq!(j, jaccard(b.bag(), a.bag()));

    let c = cosine(a.bag(), b.bag());
    assert!((0.0..=1.0).contains(&c));
    assert_eq!(c, cosine(b.bag(), a.bag()));

    let common = lcs_length(a.seq(), b.seq());
    assert_eq!(common, lcs_length(b.seq(), a.seq()));
    assert!(common <= a.len().min(b.len()));
    assert!(common <= lcs_upper_bound(a.bag(), b.bag()));

    let ratio = lcs_ratio(a.seq(), b.seq());
    assert!((0.0..=1.0).contains(&ratio));

    if !a.is_empty() {
        assert_eq!(jaccard(a.bag(), a.bag()).set, 1.0);
        assert_eq!(cosine(a.bag(), a.bag()), 1.0);
        assert_eq!(lcs_length(a.seq(), a.seq()), a.len());
    }
});
