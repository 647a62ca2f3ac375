//! Property tests for fold partitioning and the cross-validation loop
//!
//! Ensures the partitioner and runner satisfy their invariants:
//! - Fold extents partition [0, total) exactly
//! - The division remainder lands in the last fold, never earlier
//! - Train/test index sets are disjoint and jointly exhaustive
//! - A full run yields exactly k values per metric, all in [0, 1]

use proptest::prelude::*;
use validar::{CrossValidator, Estimator, KFold, Result};

/// Reads the label straight out of the single feature; never trains.
#[derive(Clone)]
struct LabelEcho;

impl Estimator for LabelEcho {
    fn fit(&mut self, _x: &[Vec<f64>], _y: &[usize]) -> Result<()> {
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>> {
        Ok(x.iter().map(|row| row[0] as usize).collect())
    }
}

/// (total, k) with 1 <= k <= total
fn total_and_k() -> impl Strategy<Value = (usize, usize)> {
    (1usize..200).prop_flat_map(|total| (Just(total), 1..=total))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn prop_partition_complete((total, k) in total_and_k()) {
        let splits = KFold::new(k).split(total).unwrap();
        prop_assert_eq!(splits.len(), k);

        let mut covered: Vec<usize> = splits
            .iter()
            .flat_map(|s| s.test_indices.iter().copied())
            .collect();
        covered.sort_unstable();
        prop_assert_eq!(covered, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn prop_remainder_in_last_fold((total, k) in total_and_k()) {
        let specs = KFold::new(k).fold_specs(total).unwrap();
        let base = total / k;

        for spec in &specs[..k - 1] {
            prop_assert_eq!(spec.len(), base);
        }

        let last = specs[k - 1];
        prop_assert_eq!(last.len(), base + total % k);
        prop_assert_eq!(last.end, total);
    }

    #[test]
    fn prop_train_test_disjoint_and_exhaustive((total, k) in total_and_k()) {
        for split in KFold::new(k).split(total).unwrap() {
            // Sorted union equal to [0, total) rules out both gaps and
            // duplicates across the two index sets.
            let mut all: Vec<usize> = split
                .train_indices
                .iter()
                .chain(split.test_indices.iter())
                .copied()
                .collect();
            all.sort_unstable();
            prop_assert_eq!(all, (0..total).collect::<Vec<_>>());
        }
    }

    #[test]
    fn prop_index_order_preserved((total, k) in total_and_k()) {
        for split in KFold::new(k).split(total).unwrap() {
            prop_assert!(split.train_indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(split.test_indices.windows(2).all(|w| w[0] + 1 == w[1]));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_run_shape_and_bounds(
        labels in prop::collection::vec(0usize..4, 2..80),
        k in 1usize..10,
    ) {
        prop_assume!(k <= labels.len());

        let x: Vec<Vec<f64>> = labels.iter().map(|&l| vec![l as f64]).collect();
        let scores = CrossValidator::new().run(&LabelEcho, &x, &labels, k).unwrap();

        for seq in [&scores.accuracy, &scores.precision, &scores.recall, &scores.f1] {
            prop_assert_eq!(seq.len(), k);
            for &v in seq.iter() {
                prop_assert!((0.0..=1.0).contains(&v) && !v.is_nan());
            }
        }

        // A label-echoing model is always right.
        for &a in &scores.accuracy {
            prop_assert!((a - 1.0).abs() < 1e-12);
        }
    }
}
