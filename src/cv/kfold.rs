//! Contiguous fold partitioning

use crate::error::{Error, Result};

/// Half-open index range `[start, end)` marking one fold's extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldSpec {
    pub start: usize,
    pub end: usize,
}

impl FoldSpec {
    /// Number of samples in the fold.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the fold covers no indices.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One fold's train/test index split.
///
/// `test_indices` is the fold's contiguous extent; `train_indices` is every
/// other index, ascending.
#[derive(Clone, Debug)]
pub struct TrainTestSplit {
    pub train_indices: Vec<usize>,
    pub test_indices: Vec<usize>,
    pub fold_idx: usize,
}

/// Contiguous K-fold partitioner.
///
/// Folds are deterministic contiguous slices in sample order; there is no
/// shuffling and no stratification. Each of the first `k - 1` folds gets
/// `total / k` samples and the final fold runs to the end of the data,
/// absorbing the remainder, so it may be larger than the others but never
/// smaller.
#[derive(Clone, Copy, Debug)]
pub struct KFold {
    k: usize,
}

impl KFold {
    /// Partitioner producing `k` folds.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Number of folds.
    pub fn n_folds(&self) -> usize {
        self.k
    }

    /// Fold extents over `total` samples.
    ///
    /// The extents partition `[0, total)` exactly: contiguous,
    /// non-overlapping, every index covered once. Fails with
    /// [`Error::InvalidFoldCount`] when `k` is zero or exceeds `total`.
    pub fn fold_specs(&self, total: usize) -> Result<Vec<FoldSpec>> {
        if self.k == 0 || self.k > total {
            return Err(Error::InvalidFoldCount { k: self.k, total });
        }

        let fold_size = total / self.k;
        let mut specs = Vec::with_capacity(self.k);
        for i in 0..self.k - 1 {
            specs.push(FoldSpec {
                start: i * fold_size,
                end: (i + 1) * fold_size,
            });
        }
        // Last fold runs to the end, absorbing total % k.
        specs.push(FoldSpec {
            start: (self.k - 1) * fold_size,
            end: total,
        });
        Ok(specs)
    }

    /// Train/test splits over `total` samples, in fold order.
    ///
    /// This ordering is the evaluation order: split `i` holds fold `i` out as
    /// the test set and trains on everything before and after it.
    pub fn split(&self, total: usize) -> Result<Vec<TrainTestSplit>> {
        let splits = self
            .fold_specs(total)?
            .iter()
            .enumerate()
            .map(|(fold_idx, spec)| TrainTestSplit {
                train_indices: (0..spec.start).chain(spec.end..total).collect(),
                test_indices: (spec.start..spec.end).collect(),
                fold_idx,
            })
            .collect();
        Ok(splits)
    }
}
