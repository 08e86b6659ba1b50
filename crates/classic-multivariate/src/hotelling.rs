//! Hotelling's T-squared test

use crate::types::{HotellingResult, Reference};
use classic_core::math::distributions::fisher_snedecor;
use classic_core::matrix::{
    column_means, covariance_matrix, pinv_symmetric, quadratic_form, rank_symmetric,
};
use classic_core::missing::{drop_incomplete_pairs, drop_incomplete_rows};
use classic_core::{Advised, Advisories, Advisory, Error, Result};
use nalgebra::{DMatrix, DVector};
use tracing::{debug, instrument};

/// Fewest complete rows of X the test accepts
const MIN_ROWS: usize = 5;

/// Pseudo-inverse of a covariance matrix, flagging singular ones
fn checked_pinv(cov: &DMatrix<f64>, advisories: &mut Advisories) -> DMatrix<f64> {
    let rank = rank_symmetric(cov);
    if rank < cov.nrows() {
        advisories.raise(Advisory::RankDeficient {
            rank,
            dimension: cov.nrows(),
        });
    }
    pinv_symmetric(cov)
}

fn check_columns(x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<()> {
    if x.ncols() != y.ncols() {
        return Err(Error::InvalidArgument(format!(
            "X and Y must have the same number of features, got {} and {}",
            x.ncols(),
            y.ncols()
        )));
    }
    Ok(())
}

fn check_rows(n: usize) -> Result<()> {
    if n < MIN_ROWS {
        return Err(Error::InsufficientData {
            expected: MIN_ROWS,
            actual: n,
        });
    }
    Ok(())
}

/// T² of a one-sample test of the mean of `x` against `mu`
fn one_sample(x: &DMatrix<f64>, mu: &DVector<f64>, advisories: &mut Advisories) -> f64 {
    let diff = column_means(x) - mu;
    let s_inv = checked_pinv(&covariance_matrix(x, 1), advisories);
    x.nrows() as f64 * quadratic_form(&diff, &s_inv)
}

/// Hotelling's T-squared test on the mean vector of `x`
///
/// `x` is observations × variables. Depending on `reference` this is a
/// one-sample test (against zero or a given mean), a paired test on the
/// row-wise differences `x − y`, or a two-sample test with an independent `y`.
///
/// Rows with missing values are removed first: jointly from both samples when
/// paired, independently otherwise. At least five complete rows of `x` are
/// required. A singular covariance matrix raises
/// [`Advisory::RankDeficient`] and its pseudo-inverse is used.
///
/// T² is rescaled to `F = T²·(n − k) / (k·(n − 1))` with `(k, n − k)` degrees
/// of freedom, where `k` is the number of variables and `n` the sample size
/// (`nx + ny − 1` for two samples).
#[instrument(skip(x, reference), fields(rows = x.nrows(), cols = x.ncols()))]
pub fn multivariate_ttest(
    x: &DMatrix<f64>,
    reference: Reference<'_>,
) -> Result<Advised<HotellingResult>> {
    let k = x.ncols();
    let mut advisories = Advisories::new();

    let (t2, n) = match reference {
        Reference::Zero | Reference::Mean(_) => {
            let mu = match reference {
                Reference::Mean(mu) => {
                    if mu.len() != k {
                        return Err(Error::InvalidArgument(format!(
                            "Mean vector has {} entries but X has {k} features",
                            mu.len()
                        )));
                    }
                    DVector::from_column_slice(mu)
                }
                _ => DVector::zeros(k),
            };
            let x = drop_incomplete_rows(x);
            check_rows(x.nrows())?;
            (one_sample(&x, &mu, &mut advisories), x.nrows())
        }
        Reference::Paired(y) => {
            check_columns(x, y)?;
            if x.nrows() != y.nrows() {
                return Err(Error::InvalidArgument(format!(
                    "X and Y must have the same number of rows for a paired test, got {} and {}",
                    x.nrows(),
                    y.nrows()
                )));
            }
            let (x, y) = drop_incomplete_pairs(x, y);
            check_rows(x.nrows())?;
            let diff = x - y;
            (one_sample(&diff, &DVector::zeros(k), &mut advisories), diff.nrows())
        }
        Reference::Independent(y) => {
            check_columns(x, y)?;
            let x = drop_incomplete_rows(x);
            let y = drop_incomplete_rows(y);
            check_rows(x.nrows())?;
            if y.nrows() < 2 {
                return Err(Error::InsufficientData {
                    expected: 2,
                    actual: y.nrows(),
                });
            }

            let (nx, ny) = (x.nrows() as f64, y.nrows() as f64);
            let n = x.nrows() + y.nrows() - 1;
            let pooled = (covariance_matrix(&x, 1) * (nx - 1.0)
                + covariance_matrix(&y, 1) * (ny - 1.0))
                / (n as f64 - 1.0);
            let scaled = pooled * (1.0 / nx + 1.0 / ny);
            let diff = column_means(&x) - column_means(&y);
            let s_inv = checked_pinv(&scaled, &mut advisories);
            (quadratic_form(&diff, &s_inv), n)
        }
    };

    if n <= k {
        return Err(Error::InsufficientData {
            expected: k + 1,
            actual: n,
        });
    }
    let (nf, kf) = (n as f64, k as f64);
    let f = t2 * (nf - kf) / (kf * (nf - 1.0));
    let df1 = kf;
    let df2 = nf - kf;
    let pval = fisher_snedecor::sf(f, df1, df2)?;
    debug!(t2, f, df1, df2, pval, "Hotelling T-squared");

    Ok(advisories.finish(HotellingResult {
        t2,
        f,
        df1,
        df2,
        pval,
    }))
}
