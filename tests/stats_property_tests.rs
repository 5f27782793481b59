//! Property-based invariants for the six-number summary

use medir::stats;
use proptest::prelude::*;

proptest! {
    #[test]
    fn summary_invariants_hold_for_any_sample(
        values in prop::collection::vec(0i64..10_000, 1..128)
    ) {
        let summary = stats::summarize(&values).unwrap();

        prop_assert!(summary.minimum <= summary.median);
        prop_assert!(summary.median <= summary.maximum);

        // Mean stays inside [min, max] up to f32 accumulation error
        let span_tol = (summary.maximum - summary.minimum).abs() * 1e-3 + 1e-3;
        prop_assert!(summary.minimum - span_tol <= summary.mean);
        prop_assert!(summary.mean <= summary.maximum + span_tol);

        prop_assert!(summary.variance >= 0.0);
        prop_assert!(summary.std_dev >= 0.0);

        let delta = (summary.std_dev * summary.std_dev - summary.variance).abs();
        prop_assert!(delta <= summary.variance * 1e-4 + 1e-3);
    }

    #[test]
    fn constant_sample_has_zero_spread(value in 0i64..1_000, len in 1usize..64) {
        let values = vec![value; len];
        let summary = stats::summarize(&values).unwrap();

        prop_assert_eq!(summary.minimum, value as f32);
        prop_assert_eq!(summary.maximum, value as f32);
        prop_assert!((summary.mean - value as f32).abs() <= 1e-3);
        prop_assert!((summary.median - value as f32).abs() <= 1e-3);
        prop_assert!(summary.variance.abs() <= 1e-3);
        prop_assert!(summary.std_dev.abs() <= 1e-3);
    }

    #[test]
    fn reversing_a_sample_does_not_change_its_summary(
        values in prop::collection::vec(0i64..10_000, 1..128)
    ) {
        let forward = stats::summarize(&values).unwrap();
        let mut reversed = values.clone();
        reversed.reverse();
        let backward = stats::summarize(&reversed).unwrap();

        prop_assert_eq!(forward.minimum, backward.minimum);
        prop_assert_eq!(forward.maximum, backward.maximum);
        prop_assert!((forward.median - backward.median).abs() <= 1e-3);
        prop_assert!((forward.mean - backward.mean).abs() <= forward.mean.abs() * 1e-4 + 1e-3);
    }
}
