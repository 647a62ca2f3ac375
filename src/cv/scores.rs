//! Per-fold score accumulation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-fold metric values for one cross-validation run.
///
/// Each sequence holds one value per fold, in fold-execution order (fold 0
/// first). The runner appends exactly once per fold and returns the finished
/// value; nothing persists across runs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FoldScores {
    /// Fraction of exact matches per fold
    pub accuracy: Vec<f64>,
    /// Support-weighted precision per fold
    pub precision: Vec<f64>,
    /// Support-weighted recall per fold
    pub recall: Vec<f64>,
    /// Support-weighted F1 per fold
    pub f1: Vec<f64>,
}

impl FoldScores {
    /// Empty accumulator with room for `k` folds.
    pub(crate) fn with_capacity(k: usize) -> Self {
        Self {
            accuracy: Vec::with_capacity(k),
            precision: Vec::with_capacity(k),
            recall: Vec::with_capacity(k),
            f1: Vec::with_capacity(k),
        }
    }

    /// Number of folds recorded.
    pub fn n_folds(&self) -> usize {
        self.accuracy.len()
    }

    /// Mean and spread of every metric across folds.
    pub fn summary(&self) -> CvSummary {
        CvSummary {
            accuracy: MetricSummary::from_values(&self.accuracy),
            precision: MetricSummary::from_values(&self.precision),
            recall: MetricSummary::from_values(&self.recall),
            f1: MetricSummary::from_values(&self.f1),
        }
    }
}

impl fmt::Display for FoldScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>6} {:>10} {:>10} {:>10} {:>10}",
            "fold", "accuracy", "precision", "recall", "f1"
        )?;
        for i in 0..self.n_folds() {
            writeln!(
                f,
                "{:>6} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
                i, self.accuracy[i], self.precision[i], self.recall[i], self.f1[i]
            )?;
        }
        Ok(())
    }
}

/// Mean and sample standard deviation of one metric across folds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub std: f64,
}

impl MetricSummary {
    fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        let mean = if n == 0 {
            0.0
        } else {
            values.iter().sum::<f64>() / n as f64
        };
        let std = if n > 1 {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };
        Self { mean, std }
    }
}

/// Per-metric summaries for a full run.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CvSummary {
    pub accuracy: MetricSummary,
    pub precision: MetricSummary,
    pub recall: MetricSummary,
    pub f1: MetricSummary,
}
