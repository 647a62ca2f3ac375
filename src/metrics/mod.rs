//! Classification metrics behind the fold scorer
//!
//! - `confusion`: confusion matrix over class-id labels
//! - `scorer`: the `Scorer` seam and its confusion-matrix-backed default

mod confusion;
mod scorer;


pub use confusion::ConfusionMatrix;
pub use scorer::{ClassificationScorer, Scorer};
