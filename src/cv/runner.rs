//! The fold runner: train, evaluate, aggregate

use super::kfold::KFold;
use super::scores::FoldScores;
use crate::error::{Error, Result};
use crate::estimator::Estimator;
use crate::metrics::{ClassificationScorer, Scorer};

/// Sequential K-fold cross-validation runner.
///
/// Holds the scorer used to grade every fold. Folds run one at a time in
/// index order; each fold gets a fresh clone of the estimator template, so no
/// learned state crosses fold boundaries and the template itself is never
/// mutated.
#[derive(Clone, Debug, Default)]
pub struct CrossValidator<S = ClassificationScorer> {
    scorer: S,
}

impl CrossValidator<ClassificationScorer> {
    /// Runner with the built-in confusion-matrix scorer.
    pub fn new() -> Self {
        Self {
            scorer: ClassificationScorer,
        }
    }
}

impl<S: Scorer> CrossValidator<S> {
    /// Runner with a caller-supplied scorer.
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Run K-fold cross-validation over the dataset.
    ///
    /// `attributes` and `target` are parallel sequences of length N.
    /// Partitions `[0, N)` into `k` contiguous folds, then for each fold in
    /// order clones `template`, fits the clone on the other `k - 1` folds,
    /// predicts the held-out fold, and scores the predictions against the
    /// held-out labels. The returned [`FoldScores`] carries exactly `k`
    /// values per metric, in fold order. Degenerate fold results (for
    /// example zero precision) are recorded like any other.
    ///
    /// Fails before any training on a length mismatch or an unusable `k`
    /// (zero, or more folds than samples). Any estimator or scorer error
    /// aborts the whole run; results from completed folds are not salvaged.
    pub fn run<E: Estimator>(
        &self,
        template: &E,
        attributes: &[Vec<f64>],
        target: &[usize],
        k: usize,
    ) -> Result<FoldScores> {
        if attributes.len() != target.len() {
            return Err(Error::ShapeMismatch {
                left: attributes.len(),
                right: target.len(),
            });
        }

        let splits = KFold::new(k).split(target.len())?;
        let mut scores = FoldScores::with_capacity(k);

        for split in &splits {
            let x_train = select_rows(attributes, &split.train_indices);
            let y_train = select_labels(target, &split.train_indices);
            let x_test = select_rows(attributes, &split.test_indices);
            let y_test = select_labels(target, &split.test_indices);

            let mut model = template.clone();
            model.fit(&x_train, &y_train)?;
            let predicted = model.predict(&x_test)?;

            scores.accuracy.push(self.scorer.accuracy(&y_test, &predicted)?);
            scores
                .precision
                .push(self.scorer.precision_weighted(&y_test, &predicted)?);
            scores
                .recall
                .push(self.scorer.recall_weighted(&y_test, &predicted)?);
            scores.f1.push(self.scorer.f1_weighted(&y_test, &predicted)?);
        }

        Ok(scores)
    }
}

/// Order-preserving row selection.
fn select_rows(rows: &[Vec<f64>], indices: &[usize]) -> Vec<Vec<f64>> {
    indices.iter().map(|&i| rows[i].clone()).collect()
}

/// Order-preserving label selection.
fn select_labels(labels: &[usize], indices: &[usize]) -> Vec<usize> {
    indices.iter().map(|&i| labels[i]).collect()
}
