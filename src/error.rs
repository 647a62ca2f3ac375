//! Crate-wide error types

use thiserror::Error;

/// Errors surfaced by cross-validation runs
#[derive(Debug, Error)]
pub enum Error {
    /// Parallel sequences disagree on length
    #[error("shape mismatch: {left} rows vs {right} labels")]
    ShapeMismatch { left: usize, right: usize },

    /// Fold count is zero or exceeds the sample count
    #[error("invalid fold count: k={k} for {total} samples")]
    InvalidFoldCount { k: usize, total: usize },

    /// Estimator fit or predict failed; the run is aborted
    #[error("estimator failure: {0}")]
    Estimator(String),

    /// A metric hit a degenerate case the scorer cannot define
    #[error("metric undefined: {0}")]
    MetricUndefined(String),
}

/// Result type for cross-validation operations
pub type Result<T> = std::result::Result<T, Error>;
