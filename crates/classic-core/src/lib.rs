//! Core types for classical statistical analysis
//!
//! This crate provides the pieces shared by every classic-stats crate:
//!
//! - [`Error`] / [`Result`]: the error taxonomy (invalid arguments versus
//!   design violations versus computation failures)
//! - [`Advisory`] / [`Advised`]: non-fatal diagnostics returned next to values
//! - [`descriptive`]: means, variances and medians with explicit `ddof`
//! - [`missing`]: `NaN`-based missing value handling
//! - [`math`]: tail probabilities and quantiles of reference distributions
//! - [`matrix`]: covariance, pseudo-inverse, rank and log-determinant helpers
//! - [`ConfidenceLevel`] / [`ConfidenceInterval`]
//!
//! # Example
//!
//! ```rust
//! use classic_core::{descriptive, math::distributions::fisher_snedecor};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//! let sd = descriptive::std_dev(&data, 1);
//! assert!((sd - 1.5811).abs() < 1e-4);
//!
//! let p = fisher_snedecor::sf(3.0, 2.0, 10.0).unwrap();
//! assert!(p > 0.0 && p < 0.1);
//! ```

pub mod advisory;
pub mod confidence;
pub mod descriptive;
pub mod error;
pub mod math;
pub mod matrix;
pub mod missing;

// Re-export core types
pub use advisory::{Advised, Advisories, Advisory};
pub use confidence::{ConfidenceInterval, ConfidenceLevel};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::advisory::{Advised, Advisories, Advisory};
    pub use crate::confidence::{ConfidenceInterval, ConfidenceLevel};
    pub use crate::error::Error;
    pub use crate::Result;
}
