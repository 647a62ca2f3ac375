//! Scoring seam between the fold runner and the metric formulas

use super::confusion::ConfusionMatrix;
use crate::error::{Error, Result};

/// Computes per-fold metric values from expected and predicted labels.
///
/// The fold runner never evaluates a formula itself; it hands both label
/// sequences to a `Scorer` and records whatever comes back. Precision,
/// recall, and F1 are averaged across classes weighted by support, the count
/// of true occurrences of each class in `expected`. A class that appears only
/// among the predictions has zero support and contributes zero weight.
pub trait Scorer {
    /// Fraction of exact matches, in `[0, 1]`.
    fn accuracy(&self, expected: &[usize], predicted: &[usize]) -> Result<f64>;

    /// Support-weighted precision across classes.
    fn precision_weighted(&self, expected: &[usize], predicted: &[usize]) -> Result<f64>;

    /// Support-weighted recall across classes.
    fn recall_weighted(&self, expected: &[usize], predicted: &[usize]) -> Result<f64>;

    /// Support-weighted F1 across classes.
    fn f1_weighted(&self, expected: &[usize], predicted: &[usize]) -> Result<f64>;
}

/// Default scorer backed by a confusion matrix.
///
/// Per-class precision is `tp / (tp + fp)`, recall is `tp / (tp + fn)`, and
/// F1 is their harmonic mean; each is defined as 0.0 when its denominator is
/// zero. Scoring an empty label sequence is undefined and surfaces as
/// [`Error::MetricUndefined`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassificationScorer;

impl ClassificationScorer {
    fn tally(&self, expected: &[usize], predicted: &[usize]) -> Result<ConfusionMatrix> {
        if expected.len() != predicted.len() {
            return Err(Error::ShapeMismatch {
                left: expected.len(),
                right: predicted.len(),
            });
        }
        if expected.is_empty() {
            return Err(Error::MetricUndefined("no samples to score".to_string()));
        }
        Ok(ConfusionMatrix::from_labels(expected, predicted))
    }
}

impl Scorer for ClassificationScorer {
    fn accuracy(&self, expected: &[usize], predicted: &[usize]) -> Result<f64> {
        Ok(self.tally(expected, predicted)?.accuracy())
    }

    fn precision_weighted(&self, expected: &[usize], predicted: &[usize]) -> Result<f64> {
        let cm = self.tally(expected, predicted)?;
        Ok(weighted_over_classes(&cm, precision_for))
    }

    fn recall_weighted(&self, expected: &[usize], predicted: &[usize]) -> Result<f64> {
        let cm = self.tally(expected, predicted)?;
        Ok(weighted_over_classes(&cm, recall_for))
    }

    fn f1_weighted(&self, expected: &[usize], predicted: &[usize]) -> Result<f64> {
        let cm = self.tally(expected, predicted)?;
        Ok(weighted_over_classes(&cm, |cm, class| {
            let p = precision_for(cm, class);
            let r = recall_for(cm, class);
            if p + r > 0.0 {
                2.0 * p * r / (p + r)
            } else {
                0.0
            }
        }))
    }
}

fn precision_for(cm: &ConfusionMatrix, class: usize) -> f64 {
    let tp = cm.true_positives(class) as f64;
    let fp = cm.false_positives(class) as f64;
    if tp + fp > 0.0 {
        tp / (tp + fp)
    } else {
        0.0
    }
}

fn recall_for(cm: &ConfusionMatrix, class: usize) -> f64 {
    let tp = cm.true_positives(class) as f64;
    let fn_ = cm.false_negatives(class) as f64;
    if tp + fn_ > 0.0 {
        tp / (tp + fn_)
    } else {
        0.0
    }
}

/// Average a per-class score across all classes, weighting each class by its
/// support. Total support equals the sample count, which the scorer has
/// already checked to be nonzero.
fn weighted_over_classes(
    cm: &ConfusionMatrix,
    class_score: impl Fn(&ConfusionMatrix, usize) -> f64,
) -> f64 {
    let total = cm.total() as f64;
    (0..cm.n_classes())
        .map(|class| class_score(cm, class) * cm.support(class) as f64)
        .sum::<f64>()
        / total
}
