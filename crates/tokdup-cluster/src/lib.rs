//! Anchor-based near-duplicate clustering.
//!
//! Samples are visited in input order. Each sample not yet absorbed becomes an
//! anchor and absorbs every later, unabsorbed sample that:
//! 1. deviates from the anchor's length by at most [`SIZE_TOLERANCE_PCT`] percent
//! 2. passes the selected metric's threshold(s) against the anchor
//!
//! Absorbed samples never anchor or join another group, so the result is a
//! partition of the input into clusters and singletons.

mod scorer;

use std::time::Instant;

use thiserror::Error;
use tokdup_math::{relative_deviation_pct, safe_ratio};
use tokdup_model::{Sample, SampleSet};
use tokdup_types::{
    ClusterMember, ClusterParams, ClusterRecord, ClusterStats, ScanStats, SingletonRow,
};

use scorer::{Scorer, Verdict};

/// Maximum length deviation of a candidate, in percent of the anchor's length.
pub const SIZE_TOLERANCE_PCT: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    #[error(
        "cluster partition mismatch: {grouped} grouped + {singletons} singletons != {samples} samples"
    )]
    PartitionMismatch {
        grouped: usize,
        singletons: usize,
        samples: usize,
    },
}

/// Result of one clustering sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOutcome {
    pub clusters: Vec<ClusterRecord>,
    pub singletons: Vec<SingletonRow>,
    pub stats: ClusterStats,
    pub scan: ScanStats,
}

/// Cluster the samples of a [`SampleSet`], folding its discard counters and
/// vocabulary size into the statistics.
pub fn cluster_sample_set(
    set: &SampleSet,
    params: &ClusterParams,
) -> Result<ClusterOutcome, ClusterError> {
    let mut outcome = cluster(set.samples(), params)?;
    outcome.stats.discarded = set.discarded();
    outcome.stats.duplicate_ids = set.duplicate_ids();
    outcome.stats.vocabulary = set.vocabulary().len();
    Ok(outcome)
}

/// Partition `samples` into clusters and singletons.
pub fn cluster(samples: &[Sample], params: &ClusterParams) -> Result<ClusterOutcome, ClusterError> {
    let start = Instant::now();
    let scorer = Scorer::new(params);

    let mut clustered = vec![false; samples.len()];
    let mut clusters: Vec<ClusterRecord> = Vec::new();
    let mut singletons: Vec<SingletonRow> = Vec::new();
    let mut scan = ScanStats::default();

    for (i, anchor) in samples.iter().enumerate() {
        if clustered[i] {
            continue;
        }

        let mut members: Vec<ClusterMember> = Vec::new();
        for (j, candidate) in samples.iter().enumerate().skip(i + 1) {
            if clustered[j] {
                continue;
            }
            if relative_deviation_pct(anchor.len(), candidate.len()) > params.size_tolerance_pct {
                scan.size_filtered += 1;
                continue;
            }

            match scorer.score(anchor, candidate) {
                Verdict::Pruned => scan.bound_pruned += 1,
                Verdict::Reject => scan.compared += 1,
                Verdict::Accept(score) => {
                    scan.compared += 1;
                    scan.accepted += 1;
                    clustered[j] = true;
                    members.push(ClusterMember {
                        id: candidate.id().to_string(),
                        tokens: candidate.len(),
                        score,
                    });
                }
            }
        }

        if members.is_empty() {
            singletons.push(SingletonRow {
                index: i,
                id: anchor.id().to_string(),
                tokens: anchor.len(),
            });
        } else {
            clusters.push(ClusterRecord {
                index: i,
                anchor: anchor.id().to_string(),
                anchor_tokens: anchor.len(),
                members,
            });
        }
    }

    let stats = summarize(&clusters, singletons.len(), samples.len())?;
    scan.clustering_ms = start.elapsed().as_millis() as u64;

    tracing::debug!(
        target: "tokdup::cluster",
        mode = %params.mode,
        samples = stats.samples,
        clusters = stats.clusters,
        compared = scan.compared,
        size_filtered = scan.size_filtered,
        bound_pruned = scan.bound_pruned,
        elapsed_ms = scan.clustering_ms,
        "clustering finished"
    );

    Ok(ClusterOutcome {
        clusters,
        singletons,
        stats,
        scan,
    })
}

fn summarize(
    clusters: &[ClusterRecord],
    singletons: usize,
    samples: usize,
) -> Result<ClusterStats, ClusterError> {
    let total_cluster_size: usize = clusters.iter().map(ClusterRecord::size).sum();
    let max_cluster_size = clusters.iter().map(ClusterRecord::size).max().unwrap_or(0);
    check_partition(total_cluster_size, singletons, samples)?;

    let redundant = total_cluster_size - clusters.len();
    Ok(ClusterStats {
        samples,
        clusters: clusters.len(),
        singletons,
        max_cluster_size,
        total_cluster_size,
        unique: samples - redundant,
        average_cluster_size: safe_ratio(total_cluster_size, clusters.len()),
        duplication_factor: safe_ratio(redundant, samples),
        ..ClusterStats::default()
    })
}

fn check_partition(grouped: usize, singletons: usize, samples: usize) -> Result<(), ClusterError> {
    if grouped + singletons == samples {
        Ok(())
    } else {
        Err(ClusterError::PartitionMismatch {
            grouped,
            singletons,
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokdup_types::{MemberScore, MetricMode};

    fn params(mode: MetricMode, t0: f64, t1: f64) -> ClusterParams {
        ClusterParams {
            mode,
            threshold_0: t0,
            threshold_1: t1,
            min_tokens: 1,
            size_tolerance_pct: SIZE_TOLERANCE_PCT,
        }
    }

    #[test]
    fn identical_pair_forms_one_cluster() {
        let seq = [1, 1, 2, 3, 3, 3, 4, 4, 5];
        let samples = vec![Sample::from_ids("a", &seq), Sample::from_ids("b", &seq)];
        let out = cluster(&samples, &params(MetricMode::Jaccard, 0.9, 0.8)).unwrap();

        assert_eq!(out.clusters.len(), 1);
        assert_eq!(out.clusters[0].anchor, "a");
        assert_eq!(
            out.clusters[0].members[0].score,
            MemberScore::Jaccard { set: 1.0, multiset: 1.0 }
        );
        assert!(out.singletons.is_empty());
        assert_eq!(out.stats.max_cluster_size, 2);
        assert_eq!(out.stats.unique, 1);
        assert_eq!(out.stats.duplication_factor, 0.5);
    }

    #[test]
    fn size_filter_separates_nine_from_seven() {
        let samples = vec![
            Sample::from_ids("a", &[1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Sample::from_ids("b", &[1, 2, 3, 4, 5, 6, 7]),
        ];
        let out = cluster(&samples, &params(MetricMode::Jaccard, 0.0, 0.0)).unwrap();
        assert!(out.clusters.is_empty());
        assert_eq!(out.singletons.len(), 2);
        assert_eq!(out.scan.size_filtered, 1);
        assert_eq!(out.scan.compared, 0);
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        let out = cluster(&[], &params(MetricMode::Cosine, 0.9, 0.8)).unwrap();
        assert_eq!(out.stats, ClusterStats::default());
        assert_eq!(out.scan.compared, 0);
    }

    #[test]
    fn partition_mismatch_is_reported() {
        assert_eq!(check_partition(4, 1, 5), Ok(()));
        let err = check_partition(4, 2, 5).unwrap_err();
        assert_eq!(
            err,
            ClusterError::PartitionMismatch {
                grouped: 4,
                singletons: 2,
                samples: 5
            }
        );
        assert!(err.to_string().contains("4 grouped + 2 singletons != 5 samples"));
    }
}
