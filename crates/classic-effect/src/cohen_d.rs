//! Cohen's d effect size
//!
//! For independent samples the mean difference is standardised by the pooled
//! standard deviation (ddof = 1). For repeated measurements the average of
//! the two population standard deviations is used instead (Cohen's d-avg,
//! Cumming 2012).

use crate::traits::StandardizedEffectSize;
use classic_core::descriptive::{mean, std_dev, variance};
use classic_core::{Error, Result};

/// Cohen's d effect size estimator
///
/// Unpaired:
/// d = (x̄ - ȳ) / √[((nx - 1)·s²x + (ny - 1)·s²y) / (nx + ny - 2)]
///
/// Paired (d-avg):
/// d = (x̄ - ȳ) / (½·(σx + σy))
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD {
    paired: bool,
}

impl CohenD {
    /// Create a new Cohen's d estimator for independent samples
    pub fn new() -> Self {
        Self { paired: false }
    }

    /// Use the d-avg formula for repeated measurements
    pub fn paired(mut self) -> Self {
        self.paired = true;
        self
    }

    /// Whether the d-avg formula is used
    pub fn is_paired(&self) -> bool {
        self.paired
    }
}

impl StandardizedEffectSize for CohenD {
    fn compute(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        if x.is_empty() || y.is_empty() {
            return Err(Error::InvalidArgument(
                "Both groups must be non-empty".to_string(),
            ));
        }
        let diff = mean(x) - mean(y);

        if self.paired {
            if x.len() != y.len() {
                return Err(Error::size_mismatch(x.len(), y.len(), "paired samples"));
            }
            return Ok(diff / (0.5 * (std_dev(x, 0) + std_dev(y, 0))));
        }

        let (nx, ny) = (x.len() as f64, y.len() as f64);
        let dof = nx + ny - 2.0;
        let pooled = ((nx - 1.0) * variance(x, 1) + (ny - 1.0) * variance(y, 1)) / dof;
        Ok(diff / pooled.sqrt())
    }
}
