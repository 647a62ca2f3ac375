//! K-fold cross-validation for classifier evaluation
//!
//! Partitions a labeled dataset into K contiguous folds, trains a fresh copy
//! of a caller-supplied estimator on each fold's complement, tests on the
//! held-out fold, and reports per-fold accuracy, precision, recall, and F1
//! (support-weighted across classes).
//!
//! ## Architecture
//!
//! - `cv`: fold partitioning and the sequential train/evaluate/aggregate loop
//! - `estimator`: the `Estimator` contract implemented by callers
//! - `metrics`: the `Scorer` seam and its confusion-matrix-backed default
//! - `error`: crate-wide error taxonomy
//!
//! ## Example
//!
//! ```
//! use validar::{CrossValidator, Estimator, Result};
//!
//! #[derive(Clone, Default)]
//! struct MajorityClass {
//!     label: usize,
//! }
//!
//! impl Estimator for MajorityClass {
//!     fn fit(&mut self, _x: &[Vec<f64>], y: &[usize]) -> Result<()> {
//!         let mut counts = std::collections::BTreeMap::new();
//!         for &label in y {
//!             *counts.entry(label).or_insert(0usize) += 1;
//!         }
//!         self.label = counts
//!             .into_iter()
//!             .max_by_key(|&(_, n)| n)
//!             .map(|(label, _)| label)
//!             .unwrap_or(0);
//!         Ok(())
//!     }
//!
//!     fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>> {
//!         Ok(vec![self.label; x.len()])
//!     }
//! }
//!
//! let x: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64]).collect();
//! let y = vec![0, 0, 1, 0, 0, 1, 0, 0];
//!
//! let scores = CrossValidator::new().run(&MajorityClass::default(), &x, &y, 4)?;
//! assert_eq!(scores.accuracy.len(), 4);
//! # Ok::<(), validar::Error>(())
//! ```

pub mod cv;
pub mod error;
pub mod estimator;
pub mod metrics;

pub use cv::{CrossValidator, CvSummary, FoldScores, FoldSpec, KFold, MetricSummary, TrainTestSplit};
pub use error::{Error, Result};
pub use estimator::Estimator;
pub use metrics::{ClassificationScorer, ConfusionMatrix, Scorer};
