//! Metric dispatch and acceptance rules.

use tokdup_math::round_f64;
use tokdup_model::Sample;
use tokdup_similarity::{cosine, jaccard, lcs_length, lcs_upper_bound};
use tokdup_types::{ClusterParams, MemberScore, MetricMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Verdict {
    Accept(MemberScore),
    Reject,
    /// The LCS bound already fell short; the DP was skipped.
    Pruned,
}

pub(crate) struct Scorer {
    mode: MetricMode,
    threshold_0: f64,
    threshold_1: f64,
}

impl Scorer {
    pub(crate) fn new(params: &ClusterParams) -> Self {
        Self {
            mode: params.mode,
            threshold_0: params.threshold_0,
            threshold_1: params.threshold_1,
        }
    }

    /// Compare `candidate` against `anchor`. Acceptance uses exact values;
    /// recorded scores are rounded to 4 decimals.
    pub(crate) fn score(&self, anchor: &Sample, candidate: &Sample) -> Verdict {
        match self.mode {
            MetricMode::Jaccard => {
                let j = jaccard(anchor.bag(), candidate.bag());
                if j.set >= self.threshold_0 && j.multiset >= self.threshold_1 {
                    Verdict::Accept(MemberScore::Jaccard {
                        set: round_f64(j.set, 4),
                        multiset: round_f64(j.multiset, 4),
                    })
                } else {
                    Verdict::Reject
                }
            }
            MetricMode::Lcs => {
                let needed = anchor.len() as f64 * self.threshold_0;
                if (lcs_upper_bound(anchor.bag(), candidate.bag()) as f64) < needed {
                    return Verdict::Pruned;
                }
                let common = lcs_length(anchor.seq(), candidate.seq());
                if common as f64 >= needed {
                    let ratio = if anchor.is_empty() {
                        0.0
                    } else {
                        common as f64 / anchor.len() as f64
                    };
                    Verdict::Accept(MemberScore::Lcs {
                        common,
                        ratio: round_f64(ratio, 4),
                    })
                } else {
                    Verdict::Reject
                }
            }
            MetricMode::Cosine => {
                let c = cosine(anchor.bag(), candidate.bag());
                if c >= self.threshold_0 {
                    Verdict::Accept(MemberScore::Cosine {
                        cosine: round_f64(c, 4),
                    })
                } else {
                    Verdict::Reject
                }
            }
        }
    }
}
