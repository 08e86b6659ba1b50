//! Box's M test for equality of covariance matrices

use crate::types::BoxMResult;
use classic_core::math::distributions::chi_squared;
use classic_core::matrix::{covariance_matrix, ln_det_symmetric};
use classic_core::missing::drop_incomplete_rows;
use classic_core::{Error, Result};
use nalgebra::DMatrix;
use tracing::debug;

/// Default significance level of Box's M, which is known to be very sensitive
pub const DEFAULT_ALPHA: f64 = 0.001;

/// Box's M test from per-group covariance matrices and group sizes
///
/// Uses the chi-squared approximation. The small-sample correction takes the
/// simpler form when all groups have the same size. Singular covariance
/// matrices do not fail but give a non-finite or meaningless statistic.
pub fn box_m_from_covariances(
    covariances: &[DMatrix<f64>],
    sizes: &[usize],
    alpha: f64,
) -> Result<BoxMResult> {
    let c = covariances.len();
    if c < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: c,
        });
    }
    if sizes.len() != c {
        return Err(Error::size_mismatch(c, sizes.len(), "group sizes"));
    }
    let p = covariances[0].nrows();
    if covariances
        .iter()
        .any(|s| s.nrows() != p || s.ncols() != p)
    {
        return Err(Error::InvalidArgument(
            "All covariance matrices must be square with the same dimension".to_string(),
        ));
    }
    if let Some(&n) = sizes.iter().find(|&&n| n < 2) {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }

    let v: Vec<f64> = sizes.iter().map(|&n| n as f64 - 1.0).collect();
    let total: f64 = sizes.iter().sum::<usize>() as f64;
    let (cf, pf) = (c as f64, p as f64);

    let pooled = covariances
        .iter()
        .zip(&v)
        .fold(DMatrix::<f64>::zeros(p, p), |acc, (s, vi)| acc + s * *vi)
        / (total - cf);
    let ln_det_pooled = ln_det_symmetric(&pooled);
    let ln_m: f64 = covariances
        .iter()
        .zip(&v)
        .map(|(s, vi)| vi / 2.0 * (ln_det_symmetric(s) - ln_det_pooled))
        .sum();

    let shape = 2.0 * pf * pf + 3.0 * pf - 1.0;
    let correction = if sizes.iter().all(|&n| n == sizes[0]) {
        (cf + 1.0) * shape / (6.0 * cf * (pf + 1.0) * v[0])
    } else {
        (v.iter().map(|vi| 1.0 / vi).sum::<f64>() - 1.0 / v.iter().sum::<f64>()) * shape
            / (6.0 * (pf + 1.0) * (cf - 1.0))
    };

    let chi2 = -2.0 * (1.0 - correction) * ln_m;
    let df = 0.5 * cf * pf * (pf + 1.0) - 0.5 * pf * (pf + 1.0);
    let pval = chi_squared::sf(chi2, df)?;
    debug!(chi2, df, pval, correction, "Box's M");

    Ok(BoxMResult {
        chi2,
        df,
        pval,
        equal_cov: pval > alpha,
    })
}

/// Box's M test on raw groups of observations × variables
///
/// Rows with a missing value are dropped from each group before the unbiased
/// covariance matrices are computed.
///
/// # Example
///
/// ```rust
/// use classic_multivariate::{box_m, box_m::DEFAULT_ALPHA};
/// use nalgebra::DMatrix;
///
/// let a = DMatrix::from_row_slice(5, 2, &[1.0, 2.0, 2.0, 3.5, 3.0, 3.9, 4.0, 6.1, 5.0, 5.8]);
/// let b = DMatrix::from_row_slice(5, 2, &[2.0, 1.0, 2.5, 2.2, 3.1, 2.9, 3.8, 3.7, 4.4, 5.1]);
/// let result = box_m(&[a, b], DEFAULT_ALPHA).unwrap();
/// assert_eq!(result.df, 3.0);
/// ```
pub fn box_m(groups: &[DMatrix<f64>], alpha: f64) -> Result<BoxMResult> {
    let groups: Vec<DMatrix<f64>> = groups.iter().map(drop_incomplete_rows).collect();
    if let Some(g) = groups.iter().find(|g| g.nrows() < 2) {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: g.nrows(),
        });
    }
    if groups.iter().any(|g| g.ncols() != groups[0].ncols()) {
        return Err(Error::InvalidArgument(
            "All groups must have the same number of variables".to_string(),
        ));
    }
    let covariances: Vec<DMatrix<f64>> = groups.iter().map(|g| covariance_matrix(g, 1)).collect();
    let sizes: Vec<usize> = groups.iter().map(|g| g.nrows()).collect();
    box_m_from_covariances(&covariances, &sizes, alpha)
}
