//! Pluggable occupancy scorers.
//!
//! The targeting engine only consumes [`Scorer::score`]; any deterministic
//! function returning a probability in `[0, 1]` works, including closures.

use crate::features::FeatureTuple;

/// Maps a feature tuple to the estimated probability the cell is occupied.
pub trait Scorer {
    fn score(&self, features: &FeatureTuple) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&FeatureTuple) -> f64,
{
    fn score(&self, features: &FeatureTuple) -> f64 {
        self(features)
    }
}

/// Returns the same probability for every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantScorer(pub f64);

impl Scorer for ConstantScorer {
    fn score(&self, _features: &FeatureTuple) -> f64 {
        self.0.clamp(0.0, 1.0)
    }
}

/// Logistic model over the five features: `sigmoid(bias + w · x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct LogisticScorer {
    pub bias: f64,
    /// Weights in [`FeatureTuple::as_array`] order.
    pub weights: [f64; 5],
}

impl LogisticScorer {
    pub const fn new(bias: f64, weights: [f64; 5]) -> Self {
        Self { bias, weights }
    }
}

impl Default for LogisticScorer {
    /// Hand-set weights. An untouched central cell scores about 0.17 (the
    /// fleet covers 17 of 100 cells); one hit orthogonal neighbor lifts a cell
    /// above the 0.25 confidence cutoff.
    fn default() -> Self {
        Self::new(-1.6, [-0.15, 4.0, -1.2, -1.0, -0.3])
    }
}

impl Scorer for LogisticScorer {
    fn score(&self, features: &FeatureTuple) -> f64 {
        let z = self
            .weights
            .iter()
            .zip(features.as_array())
            .fold(self.bias, |acc, (w, x)| acc + w * x);
        1.0 / (1.0 + libm::exp(-z))
    }
}
