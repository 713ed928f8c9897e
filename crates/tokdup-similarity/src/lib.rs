//! # tokdup-similarity
//!
//! **Tier 1 (Metrics)**
//!
//! Pairwise similarity between two samples. Bag metrics walk both sorted bags
//! once in lock-step; LCS runs a two-row dynamic program over the sequences.
//!
//! ## What belongs here
//! * Jaccard (set and multiset), cosine, LCS length and its cheap upper bound
//!
//! ## What does NOT belong here
//! * Thresholds and acceptance (see `tokdup-cluster`)
//! * Sample construction (see `tokdup-model`)

#![forbid(unsafe_code)]

mod lcs;
mod merge;

pub use lcs::{lcs_length, lcs_ratio, lcs_upper_bound};

use merge::{MergeJoin, Step};
use tokdup_model::TokenCount;

/// Jaccard scores of two bags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jaccard {
    /// Shared distinct ids over all distinct ids.
    pub set: f64,
    /// Shared multiplicity over total multiplicity.
    pub multiset: f64,
}

/// Set and multiset Jaccard similarity. Two empty bags score `(0, 0)`.
pub fn jaccard(a: &[TokenCount], b: &[TokenCount]) -> Jaccard {
    let mut shared_ids = 0u64;
    let mut union_ids = 0u64;
    let mut min_sum = 0u64;
    let mut max_sum = 0u64;

    for step in MergeJoin::new(a, b) {
        union_ids += 1;
        match step {
            Step::Left(f) | Step::Right(f) => max_sum += u64::from(f),
            Step::Both(f1, f2) => {
                shared_ids += 1;
                min_sum += u64::from(f1.min(f2));
                max_sum += u64::from(f1.max(f2));
            }
        }
    }

    Jaccard {
        set: ratio(shared_ids, union_ids),
        multiset: ratio(min_sum, max_sum),
    }
}

/// Cosine similarity of two frequency vectors, in `[0, 1]`.
///
/// Returns 0 when either bag is empty.
pub fn cosine(a: &[TokenCount], b: &[TokenCount]) -> f64 {
    let mut dot = 0u64;
    let mut norm_a = 0u64;
    let mut norm_b = 0u64;

    for step in MergeJoin::new(a, b) {
        match step {
            Step::Left(f) => norm_a += u64::from(f) * u64::from(f),
            Step::Right(f) => norm_b += u64::from(f) * u64::from(f),
            Step::Both(f1, f2) => {
                let (f1, f2) = (u64::from(f1), u64::from(f2));
                dot += f1 * f2;
                norm_a += f1 * f1;
                norm_b += f2 * f2;
            }
        }
    }

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }
    let value = dot as f64 / (norm_a as f64 * norm_b as f64).sqrt();
    value.min(1.0)
}

fn ratio(numer: u64, denom: u64) -> f64 {
    if denom == 0 {
        0.0
    } else {
        numer as f64 / denom as f64
    }
}
