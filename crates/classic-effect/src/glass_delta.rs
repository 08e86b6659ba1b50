//! Glass's delta effect size
//!
//! Glass's delta standardises the mean difference by the standard deviation
//! of a single group. The control is taken to be the group with the smaller
//! population standard deviation, which keeps the estimate unaffected by a
//! treatment that inflates variance.

use crate::traits::StandardizedEffectSize;
use classic_core::descriptive::{mean, std_dev};
use classic_core::{Error, Result};

/// Glass's delta effect size estimator
///
/// Δ = (x̄ - ȳ) / min(σx, σy), with σ the population (ddof = 0) standard deviation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlassDelta;

impl GlassDelta {
    /// Create a new Glass's delta estimator
    pub fn new() -> Self {
        Self
    }
}

impl StandardizedEffectSize for GlassDelta {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if x.is_empty() || y.is_empty() {
            return Err(Error::InvalidArgument(
                "Both groups must be non-empty".to_string(),
            ));
        }
        let sd_control = std_dev(x, 0).min(std_dev(y, 0));
        Ok((mean(x) - mean(y)) / sd_control)
    }
}
