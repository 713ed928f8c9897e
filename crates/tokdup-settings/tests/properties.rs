use proptest::prelude::*;
use tokdup_settings::ClusterSettings;

proptest! {
    #[test]
    fn validated_thresholds_are_in_unit_interval(t0 in -10.0f64..10.0, t1 in -10.0f64..10.0) {
        let (s, warnings) = ClusterSettings { threshold_0: t0, threshold_1: t1, ..Default::default() }.validated();
        prop_assert!((0.0..=1.0).contains(&s.threshold_0));
        prop_assert!((0.0..=1.0).contains(&s.threshold_1));
        let bad = [t0, t1].iter().filter(|t| !(0.0..=1.0).contains(*t)).count();
        prop_assert_eq!(warnings.len(), bad);
    }

    #[test]
    fn validation_is_idempotent(t0 in -2.0f64..2.0, t1 in -2.0f64..2.0) {
        let (once, _) = ClusterSettings { threshold_0: t0, threshold_1: t1, ..Default::default() }.validated();
        let (twice, warnings) = once.clone().validated();
        prop_assert_eq!(once, twice);
        prop_assert!(warnings.is_empty());
    }
}
