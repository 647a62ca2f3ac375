//! K-fold cross-validation walkthrough
//!
//! Builds a small two-feature, two-class dataset, fits a nearest-centroid
//! classifier on each fold's complement, and prints the per-fold metrics
//! with their summary.
//!
//! Run with: cargo run --example cross_validate

use validar::{CrossValidator, Error, Estimator, Result};

/// Nearest-centroid classifier: fit computes one mean vector per class,
/// predict assigns each row to the closest mean.
#[derive(Clone, Default)]
struct NearestCentroid {
    centroids: Vec<(usize, Vec<f64>)>,
}

impl Estimator for NearestCentroid {
    fn fit(&mut self, x: &[Vec<f64>], y: &[usize]) -> Result<()> {
        let mut sums: std::collections::BTreeMap<usize, (Vec<f64>, usize)> = Default::default();
        for (row, &label) in x.iter().zip(y.iter()) {
            let entry = sums
                .entry(label)
                .or_insert_with(|| (vec![0.0; row.len()], 0));
            for (acc, v) in entry.0.iter_mut().zip(row.iter()) {
                *acc += v;
            }
            entry.1 += 1;
        }
        self.centroids = sums
            .into_iter()
            .map(|(label, (sum, n))| {
                (label, sum.into_iter().map(|v| v / n as f64).collect())
            })
            .collect();
        Ok(())
    }

    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<usize>> {
        if self.centroids.is_empty() {
            return Err(Error::Estimator(
                "nearest-centroid model is not fitted".to_string(),
            ));
        }
        Ok(x.iter()
            .map(|row| {
                let mut best = (0, f64::INFINITY);
                for (label, centroid) in &self.centroids {
                    let d: f64 = row
                        .iter()
                        .zip(centroid.iter())
                        .map(|(a, b)| (a - b).powi(2))
                        .sum();
                    if d < best.1 {
                        best = (*label, d);
                    }
                }
                best.0
            })
            .collect())
    }
}

fn main() -> Result<()> {
    let attributes: Vec<Vec<f64>> = vec![
        vec![-1.0, -1.0],
        vec![-2.0, -1.0],
        vec![-3.0, -2.0],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
        vec![3.0, 2.0],
    ];
    let target = vec![1, 1, 1, 2, 2, 2];

    let scores =
        CrossValidator::new().run(&NearestCentroid::default(), &attributes, &target, 5)?;

    println!("per-fold scores:\n{scores}");

    let summary = scores.summary();
    println!("accuracy:  {:.4} +/- {:.4}", summary.accuracy.mean, summary.accuracy.std);
    println!("precision: {:.4} +/- {:.4}", summary.precision.mean, summary.precision.std);
    println!("recall:    {:.4} +/- {:.4}", summary.recall.mean, summary.recall.std);
    println!("f1:        {:.4} +/- {:.4}", summary.f1.mean, summary.f1.std);

    let json = serde_json::to_string_pretty(&scores).expect("scores serialize to JSON");
    println!("\nas JSON:\n{json}");

    Ok(())
}
