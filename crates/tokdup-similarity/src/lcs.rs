//! Longest common subsequence over token-id sequences.

use tokdup_model::{TokenCount, TokenId};

use crate::merge::{MergeJoin, Step};

/// Size of the multiset intersection of two bags. Never less than the LCS.
pub fn lcs_upper_bound(a: &[TokenCount], b: &[TokenCount]) -> usize {
    MergeJoin::new(a, b)
        .map(|step| match step {
            Step::Both(f1, f2) => f1.min(f2) as usize,
            Step::Left(_) | Step::Right(_) => 0,
        })
        .sum()
}

/// Length of the longest common subsequence.
///
/// Uses two rows of width `b.len() + 1`.
pub fn lcs_length(a: &[TokenId], b: &[TokenId]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &x in a {
        for (j, &y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// LCS length relative to the length of `anchor`.
pub fn lcs_ratio(anchor: &[TokenId], other: &[TokenId]) -> f64 {
    if anchor.is_empty() {
        return 0.0;
    }
    lcs_length(anchor, other) as f64 / anchor.len() as f64
}
