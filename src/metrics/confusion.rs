//! Confusion matrix over class-id labels

use std::fmt;

/// Confusion counts for multi-class classification.
///
/// Cell `(expected, predicted)` holds the number of samples whose true label
/// is `expected` and which the model labeled `predicted`. Class ids are dense
/// `usize` values; the matrix covers `0..n_classes` where `n_classes` is one
/// past the largest id seen on either side.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    cells: Vec<usize>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Tally parallel expected/predicted label slices.
    ///
    /// Callers guarantee equal lengths; the scorer validates before
    /// constructing.
    pub fn from_labels(expected: &[usize], predicted: &[usize]) -> Self {
        debug_assert_eq!(expected.len(), predicted.len());
        let n_classes = expected
            .iter()
            .chain(predicted.iter())
            .max()
            .map_or(0, |&m| m + 1);
        let mut cells = vec![0; n_classes * n_classes];
        for (&e, &p) in expected.iter().zip(predicted.iter()) {
            cells[e * n_classes + p] += 1;
        }
        Self { cells, n_classes }
    }

    /// Number of classes covered by the matrix.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count of samples with true label `expected` predicted as `predicted`.
    pub fn count(&self, expected: usize, predicted: usize) -> usize {
        self.cells[expected * self.n_classes + predicted]
    }

    /// Samples of `class` the model got right.
    pub fn true_positives(&self, class: usize) -> usize {
        self.count(class, class)
    }

    /// Samples predicted as `class` whose true label differs.
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&e| e != class)
            .map(|e| self.count(e, class))
            .sum()
    }

    /// Samples of `class` the model labeled as something else.
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes)
            .filter(|&p| p != class)
            .map(|p| self.count(class, p))
            .sum()
    }

    /// True-label occurrences of `class`.
    pub fn support(&self, class: usize) -> usize {
        (0..self.n_classes).map(|p| self.count(class, p)).sum()
    }

    /// Total samples tallied.
    pub fn total(&self) -> usize {
        self.cells.iter().sum()
    }

    /// Fraction of exact matches; 0.0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let hits: usize = (0..self.n_classes).map(|c| self.count(c, c)).sum();
        hits as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>10}", "expected")?;
        for p in 0..self.n_classes {
            write!(f, " pred {p:>3}")?;
        }
        writeln!(f)?;
        for e in 0..self.n_classes {
            write!(f, "{e:>10}")?;
            for p in 0..self.n_classes {
                write!(f, " {:>8}", self.count(e, p))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
