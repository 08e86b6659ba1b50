//! Result types of the multivariate tests

use nalgebra::DMatrix;

/// Outcome of the Henze-Zirkler multivariate normality test
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HenzeZirklerResult {
    /// The HZ statistic
    pub hz: f64,
    /// p-value from the log-normal approximation
    pub pval: f64,
    /// Whether multivariate normality is retained at the requested alpha
    pub normal: bool,
}

/// Outcome of Hotelling's T-squared test
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HotellingResult {
    /// Hotelling's T²
    pub t2: f64,
    /// T² rescaled to an F statistic
    pub f: f64,
    /// Numerator degrees of freedom (number of variables)
    pub df1: f64,
    /// Denominator degrees of freedom
    pub df2: f64,
    /// p-value of the F statistic
    pub pval: f64,
}

/// Outcome of Box's M test
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxMResult {
    /// Chi-squared approximation of the M statistic
    pub chi2: f64,
    /// Degrees of freedom of the approximation
    pub df: f64,
    /// p-value
    pub pval: f64,
    /// Whether equal covariance matrices are retained at the requested alpha
    pub equal_cov: bool,
}

/// What the mean vector of X is compared against in
/// [`multivariate_ttest`](crate::multivariate_ttest)
#[derive(Debug, Clone, Copy)]
pub enum Reference<'a> {
    /// One-sample test against the zero vector
    Zero,
    /// One-sample test against a known mean vector
    Mean(&'a [f64]),
    /// Two-sample test against an independent sample
    Independent(&'a DMatrix<f64>),
    /// Test on the row-wise differences with a paired sample
    Paired(&'a DMatrix<f64>),
}
