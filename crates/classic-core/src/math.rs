//! Mathematical utilities for classical statistical analysis
//!
//! Tail probabilities and quantiles for hypothesis tests and confidence
//! intervals, built on the `statrs` distribution types. Invalid parameters
//! surface as [`Error::Distribution`](crate::Error::Distribution).

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use crate::Result;
        use statrs::distribution::{ContinuousCDF, Normal};

        fn standard() -> Result<Normal> {
            Ok(Normal::new(0.0, 1.0)?)
        }

        /// Cumulative distribution function of the standard normal distribution
        pub fn cdf(x: f64) -> Result<f64> {
            Ok(standard()?.cdf(x))
        }

        /// Survival function (upper tail) of the standard normal distribution
        pub fn sf(x: f64) -> Result<f64> {
            Ok(standard()?.sf(x))
        }

        /// Quantile function (percent point function) of the standard normal
        pub fn ppf(p: f64) -> Result<f64> {
            if p <= 0.0 {
                return Ok(f64::NEG_INFINITY);
            }
            if p >= 1.0 {
                return Ok(f64::INFINITY);
            }
            Ok(standard()?.inverse_cdf(p))
        }
    }

    /// Log-normal distribution utilities
    pub mod lognormal {
        use crate::Result;
        use statrs::distribution::{ContinuousCDF, LogNormal};

        /// Survival function of a log-normal with log-scale `location` and `scale`
        pub fn sf(x: f64, location: f64, scale: f64) -> Result<f64> {
            let dist = LogNormal::new(location, scale)?;
            if x.is_nan() {
                return Ok(f64::NAN);
            }
            if x <= 0.0 {
                return Ok(1.0);
            }
            Ok(dist.sf(x))
        }
    }

    /// Fisher-Snedecor (F) distribution utilities
    pub mod fisher_snedecor {
        use crate::Result;
        use statrs::distribution::{ContinuousCDF, FisherSnedecor};
        use statrs::function::beta::inv_beta_reg;

        /// Survival function P(F > x)
        pub fn sf(x: f64, d1: f64, d2: f64) -> Result<f64> {
            let dist = FisherSnedecor::new(d1, d2)?;
            if x.is_nan() {
                return Ok(f64::NAN);
            }
            Ok(dist.sf(x))
        }

        /// Inverse survival function: the `x` with P(F > x) = q
        ///
        /// `d2 / (d1·x + d2)` follows Beta(d2/2, d1/2), so the quantile comes
        /// from the inverse regularized incomplete beta function evaluated at
        /// `q` itself, which keeps small upper tails accurate.
        pub fn isf(q: f64, d1: f64, d2: f64) -> Result<f64> {
            FisherSnedecor::new(d1, d2)?;
            if q.is_nan() {
                return Ok(f64::NAN);
            }
            if q >= 1.0 {
                return Ok(0.0);
            }
            if q <= 0.0 {
                return Ok(f64::INFINITY);
            }
            let z = inv_beta_reg(d2 / 2.0, d1 / 2.0, q);
            Ok(d2 * (1.0 - z) / (d1 * z))
        }
    }

    /// Chi-squared distribution utilities
    pub mod chi_squared {
        use crate::{Error, Result};
        use statrs::distribution::{ChiSquared, ContinuousCDF};

        /// Survival function P(X > x) with `df` degrees of freedom
        pub fn sf(x: f64, df: f64) -> Result<f64> {
            if !df.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "Chi-squared degrees of freedom must be finite, got {df}"
                )));
            }
            let dist = ChiSquared::new(df)?;
            if x.is_nan() {
                return Ok(f64::NAN);
            }
            Ok(dist.sf(x))
        }
    }
}
