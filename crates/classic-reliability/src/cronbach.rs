//! Cronbach's alpha

use crate::panel::Panel;
use crate::types::{CronbachResult, MissingValues};
use classic_core::math::distributions::fisher_snedecor;
use classic_core::matrix::covariance_matrix;
use classic_core::missing::drop_incomplete_rows;
use classic_core::{ConfidenceInterval, ConfidenceLevel, Error, Result};
use nalgebra::DMatrix;
use tracing::{debug, instrument};

/// Unbiased covariance of two columns over the rows where both are present
fn pairwise_covariance(a: &[f64], b: &[f64]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .map(|(x, y)| (*x, *y))
        .collect();
    let n = pairs.len() as f64;
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let ma = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mb = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    pairs.iter().map(|(x, y)| (x - ma) * (y - mb)).sum::<f64>() / (n - 1.0)
}

/// Item covariance matrix using pairwise-complete observations
fn pairwise_covariance_matrix(values: &DMatrix<f64>) -> DMatrix<f64> {
    let columns: Vec<Vec<f64>> = values
        .column_iter()
        .map(|c| c.iter().copied().collect())
        .collect();
    let k = columns.len();
    DMatrix::from_fn(k, k, |i, j| pairwise_covariance(&columns[i], &columns[j]))
}

/// Cronbach's alpha of a subjects × items panel
///
/// α = k / (k − 1) · (1 − tr(C) / ΣC), with C the item covariance matrix.
/// With [`MissingValues::Drop`] subjects with any missing score are removed
/// first; with [`MissingValues::Pairwise`] each covariance uses the subjects
/// scored on both items.
///
/// The confidence interval follows Feldt, Woodruff and Salih (1987) with
/// F(n − 1, (n − 1)(k − 1)), n being the number of subjects in the panel.
///
/// # Example
///
/// ```rust
/// use classic_reliability::{cronbach_alpha, MissingValues, Panel};
/// use classic_core::ConfidenceLevel;
/// use nalgebra::DMatrix;
///
/// let panel = Panel::from_wide(DMatrix::from_row_slice(4, 3, &[
///     3.0, 4.0, 3.0,
///     5.0, 5.0, 4.0,
///     2.0, 1.0, 2.0,
///     4.0, 4.0, 5.0,
/// ]));
/// let level = ConfidenceLevel::default();
/// let result = cronbach_alpha(&panel, MissingValues::Pairwise, level).unwrap();
/// assert!(result.alpha > 0.8);
/// ```
#[instrument(skip(panel), fields(shape = ?panel.shape()))]
pub fn cronbach_alpha(
    panel: &Panel,
    missing: MissingValues,
    ci: ConfidenceLevel,
) -> Result<CronbachResult> {
    let (n, k) = panel.shape();
    if k < 2 {
        return Err(Error::InvalidArgument(format!(
            "Cronbach's alpha requires at least two items, got {k}"
        )));
    }
    if n < 2 {
        return Err(Error::InvalidArgument(format!(
            "Cronbach's alpha requires at least two subjects, got {n}"
        )));
    }

    let cov = match missing {
        MissingValues::Drop => covariance_matrix(&drop_incomplete_rows(panel.values()), 1),
        MissingValues::Pairwise => pairwise_covariance_matrix(panel.values()),
    };
    let kf = k as f64;
    let alpha = kf / (kf - 1.0) * (1.0 - cov.trace() / cov.sum());

    let df1 = n as f64 - 1.0;
    let df2 = df1 * (kf - 1.0);
    let tail = ci.tail_probability();
    let lower = 1.0 - (1.0 - alpha) * fisher_snedecor::isf(tail, df1, df2)?;
    let upper = 1.0 - (1.0 - alpha) * fisher_snedecor::isf(1.0 - tail, df1, df2)?;
    debug!(alpha, lower, upper, ?missing, "Cronbach's alpha");

    Ok(CronbachResult {
        alpha,
        ci: ConfidenceInterval::new(lower, upper, ci),
    })
}
