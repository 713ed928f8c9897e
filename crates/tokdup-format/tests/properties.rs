use proptest::prelude::*;
use tokdup_format::render_summary_text;
use tokdup_types::ClusterStats;

fn stats() -> impl Strategy<Value = ClusterStats> {
    (0usize..50, 0usize..50, 2usize..6).prop_map(|(clusters, singletons, size)| {
        let total = clusters * size;
        ClusterStats {
            samples: total + singletons,
            clusters,
            singletons,
            max_cluster_size: if clusters > 0 { size } else { 0 },
            total_cluster_size: total,
            unique: singletons + clusters,
            ..Default::default()
        }
    })
}

proptest! {
    #[test]
    fn summary_never_prints_nan(s in stats()) {
        let text = render_summary_text(&s);
        prop_assert!(!text.contains("NaN"));
        prop_assert!(!text.contains("inf"));
        prop_assert_eq!(text.lines().count(), 2);
    }
}
