//! K-fold cross-validation core
//!
//! - `kfold`: contiguous fold partitioning
//! - `runner`: the sequential train/evaluate/aggregate loop
//! - `scores`: per-fold results and their summaries

mod kfold;
mod runner;
mod scores;

#[cfg(test)]
mod tests;

pub use kfold::{FoldSpec, KFold, TrainTestSplit};
pub use runner::CrossValidator;
pub use scores::{CvSummary, FoldScores, MetricSummary};
