use proptest::prelude::*;
use tokdup_cluster::{SIZE_TOLERANCE_PCT, cluster};
use tokdup_model::Sample;
use tokdup_types::{ClusterParams, MetricMode};

fn samples() -> impl Strategy<Value = Vec<Sample>> {
    prop::collection::vec(prop::collection::vec(0u32..6, 18..24), 0..14).prop_map(|seqs| {
        seqs.iter()
            .enumerate()
            .map(|(i, seq)| Sample::from_ids(format!("s{i}"), seq))
            .collect()
    })
}

fn mode() -> impl Strategy<Value = MetricMode> {
    prop::sample::select(MetricMode::ALL.to_vec())
}

fn params(mode: MetricMode, t0: f64, t1: f64) -> ClusterParams {
    ClusterParams {
        mode,
        threshold_0: t0,
        threshold_1: t1,
        min_tokens: 1,
        size_tolerance_pct: SIZE_TOLERANCE_PCT,
    }
}

proptest! {
    #[test]
    fn groups_partition_the_input(samples in samples(), mode in mode(), t0 in 0.0f64..1.0, t1 in 0.0f64..1.0) {
        let out = cluster(&samples, &params(mode, t0, t1)).unwrap();
        prop_assert_eq!(out.stats.total_cluster_size + out.stats.singletons, samples.len());

        let mut seen: Vec<&str> = out.singletons.iter().map(|s| s.id.as_str()).collect();
        for c in &out.clusters {
            seen.push(&c.anchor);
            seen.extend(c.members.iter().map(|m| m.id.as_str()));
        }
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), samples.len());
    }

    #[test]
    fn clustering_is_idempotent(samples in samples(), mode in mode(), t0 in 0.0f64..1.0) {
        let p = params(mode, t0, 0.5);
        let first = cluster(&samples, &p).unwrap();
        let second = cluster(&samples, &p).unwrap();
        prop_assert_eq!(first.clusters, second.clusters);
        prop_assert_eq!(first.singletons, second.singletons);
        prop_assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn anchors_precede_their_members(samples in samples(), mode in mode(), t0 in 0.0f64..0.6) {
        let out = cluster(&samples, &params(mode, t0, 0.0)).unwrap();
        let position = |id: &str| samples.iter().position(|s| s.id() == id).unwrap();
        for c in &out.clusters {
            prop_assert_eq!(position(c.anchor.as_str()), c.index);
            for m in &c.members {
                prop_assert!(position(m.id.as_str()) > c.index);
                prop_assert!(m.score.primary() >= 0.0);
            }
        }
    }
}
