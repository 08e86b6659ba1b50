//! Henze-Zirkler multivariate normality test
//!
//! The statistic is a weighted L2 distance between the empirical
//! characteristic function of the scaled residuals and that of the standard
//! multivariate normal. Its distribution under normality is approximated by a
//! log-normal with the Henze-Zirkler (1990) mean and variance.

use crate::types::HenzeZirklerResult;
use classic_core::math::distributions::lognormal;
use classic_core::matrix::{centered, covariance_matrix, pinv_symmetric, rank_symmetric};
use classic_core::missing::drop_incomplete_rows;
use classic_core::{Advised, Advisories, Advisory, Error, Result};
use nalgebra::DMatrix;
use tracing::{debug, instrument};

/// Smoothing parameter β for `n` observations of `p` variables
fn smoothing(n: f64, p: f64) -> f64 {
    std::f64::consts::FRAC_1_SQRT_2 * ((2.0 * p + 1.0) / 4.0).powf(1.0 / (p + 4.0))
        * n.powf(1.0 / (p + 4.0))
}

/// HZ statistic of centred data `xc` given the inverse covariance `s_inv`
fn statistic(xc: &DMatrix<f64>, s_inv: &DMatrix<f64>, b: f64) -> f64 {
    let n = xc.nrows() as f64;
    let p = xc.ncols() as f64;
    let b2 = b * b;

    // Gram matrix of Mahalanobis inner products
    let gram = xc * s_inv * xc.transpose();
    let dj = gram.diagonal();

    let mut pairwise = 0.0;
    for j in 0..gram.nrows() {
        for k in 0..gram.ncols() {
            let djk = dj[j] + dj[k] - 2.0 * gram[(j, k)];
            pairwise += (-b2 / 2.0 * djk).exp();
        }
    }
    let centred: f64 = dj
        .iter()
        .map(|d| (-(b2 / (2.0 * (1.0 + b2))) * d).exp())
        .sum();

    n * (pairwise / (n * n) - 2.0 * (1.0 + b2).powf(-p / 2.0) * centred / n
        + (1.0 + 2.0 * b2).powf(-p / 2.0))
}

/// Log-normal location and scale of HZ under normality
fn null_moments(p: f64, b: f64) -> (f64, f64) {
    let b2 = b * b;
    let b4 = b2 * b2;
    let b8 = b4 * b4;
    let a = 1.0 + 2.0 * b2;
    let wb = (1.0 + b2) * (1.0 + 3.0 * b2);

    let mu = 1.0 - a.powf(-p / 2.0) * (1.0 + p * b2 / a + p * (p + 2.0) * b4 / (2.0 * a * a));
    let si2 = 2.0 * (1.0 + 4.0 * b2).powf(-p / 2.0)
        + 2.0
            * a.powf(-p)
            * (1.0 + 2.0 * p * b4 / (a * a) + 3.0 * p * (p + 2.0) * b8 / (4.0 * a.powi(4)))
        - 4.0 * wb.powf(-p / 2.0)
            * (1.0 + 3.0 * p * b4 / (2.0 * wb) + p * (p + 2.0) * b8 / (2.0 * wb * wb));

    let location = (mu.powi(4) / (si2 + mu * mu)).sqrt().ln();
    let scale = ((si2 + mu * mu) / (mu * mu)).ln().sqrt();
    (location, scale)
}

/// Henze-Zirkler test of multivariate normality
///
/// `x` is observations × variables. Rows with a missing value are dropped.
/// When the covariance matrix is singular the statistic is set to `4·n`, the
/// limit it takes for degenerate data, and [`Advisory::RankDeficient`] is raised.
///
/// # Example
///
/// ```rust
/// use classic_multivariate::multivariate_normality;
/// use nalgebra::DMatrix;
///
/// let x = DMatrix::from_row_slice(6, 2, &[
///     1.2, 3.1, 2.3, 2.9, 1.9, 4.2, 3.1, 3.8, 2.5, 3.3, 2.0, 2.6,
/// ]);
/// let result = multivariate_normality(&x, 0.05).unwrap();
/// assert!(result.value.pval > 0.0 && result.value.pval <= 1.0);
/// ```
#[instrument(skip(x), fields(rows = x.nrows(), cols = x.ncols()))]
pub fn multivariate_normality(x: &DMatrix<f64>, alpha: f64) -> Result<Advised<HenzeZirklerResult>> {
    let x = drop_incomplete_rows(x);
    let (n, p) = (x.nrows(), x.ncols());
    if n < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: n,
        });
    }
    if p < 2 {
        return Err(Error::InvalidArgument(format!(
            "Henze-Zirkler requires at least two variables, got {p}"
        )));
    }

    let mut advisories = Advisories::new();
    let (nf, pf) = (n as f64, p as f64);
    let b = smoothing(nf, pf);

    let s = covariance_matrix(&x, 0);
    let rank = rank_symmetric(&s);
    let hz = if rank == p {
        statistic(&centered(&x), &pinv_symmetric(&s), b)
    } else {
        advisories.raise(Advisory::RankDeficient { rank, dimension: p });
        4.0 * nf
    };

    let (location, scale) = null_moments(pf, b);
    let pval = lognormal::sf(hz, location, scale)?;
    debug!(hz, pval, b, "Henze-Zirkler");

    Ok(advisories.finish(HenzeZirklerResult {
        hz,
        pval,
        normal: pval > alpha,
    }))
}
