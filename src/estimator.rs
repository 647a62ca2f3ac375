//! Estimator contract for trainable classifiers

use crate::error::Result;

/// A trainable classifier the fold runner can duplicate per fold.
///
/// `Clone` is part of the contract, not an implementation detail: every
/// implementation must produce an independent copy with no shared mutable
/// state, so that fitting one fold's copy can never leak learned state into
/// another fold's copy or into the template.
pub trait Estimator: Clone {
    /// Fit the model on training data.
    ///
    /// `x` and `y` are parallel sequences. Mutates only this instance's
    /// learned state.
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<()>;

    /// Predict a class label for each row of `x`, aligned index-for-index.
    ///
    /// Pure given fitted state.
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>>;
}
