//! Core traits for effect size estimation

use crate::two_sample::TwoSamples;
use classic_core::Result;

/// Effect sizes that standardise a difference in means between two samples
///
/// Implementors receive samples without missing values; callers are
/// responsible for dropping them first.
pub trait StandardizedEffectSize {
    /// Compute the effect size of `x` relative to `y`
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64>;

    /// Compute the effect size of a [`TwoSamples`] pair
    fn compute_samples(&self, samples: &TwoSamples) -> Result<f64> {
        self.compute(samples.x(), samples.y())
    }
}
