//! Tests for the contiguous fold partitioner

use crate::cv::{FoldSpec, KFold};
use crate::error::Error;

#[test]
fn test_even_partition() {
    let splits = KFold::new(3).split(6).unwrap();

    assert_eq!(splits.len(), 3);
    let sizes: Vec<usize> = splits.iter().map(|s| s.test_indices.len()).collect();
    assert_eq!(sizes, vec![2, 2, 2]);

    assert_eq!(splits[0].test_indices, vec![0, 1]);
    assert_eq!(splits[1].test_indices, vec![2, 3]);
    assert_eq!(splits[2].test_indices, vec![4, 5]);

    // Fold 0 trains on everything after its extent.
    assert_eq!(splits[0].train_indices, vec![2, 3, 4, 5]);
}

#[test]
fn test_remainder_goes_to_last_fold() {
    let specs = KFold::new(3).fold_specs(7).unwrap();

    assert_eq!(
        specs,
        vec![
            FoldSpec { start: 0, end: 2 },
            FoldSpec { start: 2, end: 4 },
            FoldSpec { start: 4, end: 7 },
        ]
    );

    let sizes: Vec<usize> = specs.iter().map(FoldSpec::len).collect();
    assert_eq!(sizes, vec![2, 2, 3]);
}

#[test]
fn test_last_fold_never_smaller() {
    // 10 / 4 leaves remainder 2; every early fold stays at the base size.
    let specs = KFold::new(4).fold_specs(10).unwrap();
    let sizes: Vec<usize> = specs.iter().map(FoldSpec::len).collect();
    assert_eq!(sizes, vec![2, 2, 2, 4]);
}

#[test]
fn test_partition_covers_every_index() {
    let splits = KFold::new(7).split(100).unwrap();

    let mut covered: Vec<usize> = splits
        .iter()
        .flat_map(|s| s.test_indices.iter().copied())
        .collect();
    covered.sort_unstable();
    assert_eq!(covered, (0..100).collect::<Vec<_>>());
}

#[test]
fn test_train_test_disjoint_union() {
    for split in KFold::new(4).split(11).unwrap() {
        for idx in &split.test_indices {
            assert!(!split.train_indices.contains(idx));
        }
        let mut all: Vec<usize> = split
            .train_indices
            .iter()
            .chain(split.test_indices.iter())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..11).collect::<Vec<_>>());
    }
}

#[test]
fn test_train_indices_ascending() {
    for split in KFold::new(3).split(10).unwrap() {
        assert!(split.train_indices.windows(2).all(|w| w[0] < w[1]));
        assert!(split.test_indices.windows(2).all(|w| w[0] + 1 == w[1]));
    }
}

#[test]
fn test_fold_idx_matches_position() {
    let splits = KFold::new(5).split(20).unwrap();
    for (i, split) in splits.iter().enumerate() {
        assert_eq!(split.fold_idx, i);
    }
}

#[test]
fn test_single_fold_tests_everything() {
    let splits = KFold::new(1).split(4).unwrap();

    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].test_indices, vec![0, 1, 2, 3]);
    assert!(splits[0].train_indices.is_empty());
}

#[test]
fn test_one_fold_per_sample() {
    let splits = KFold::new(5).split(5).unwrap();

    for (i, split) in splits.iter().enumerate() {
        assert_eq!(split.test_indices, vec![i]);
        assert_eq!(split.train_indices.len(), 4);
    }
}

#[test]
fn test_zero_fold_count_rejected() {
    let result = KFold::new(0).split(6);
    assert!(matches!(
        result,
        Err(Error::InvalidFoldCount { k: 0, total: 6 })
    ));
}

#[test]
fn test_more_folds_than_samples_rejected() {
    let result = KFold::new(7).split(6);
    assert!(matches!(
        result,
        Err(Error::InvalidFoldCount { k: 7, total: 6 })
    ));
}

#[test]
fn test_empty_dataset_rejected() {
    let result = KFold::new(1).split(0);
    assert!(matches!(
        result,
        Err(Error::InvalidFoldCount { k: 1, total: 0 })
    ));
}
