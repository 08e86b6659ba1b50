//! Intraclass correlation
//!
//! One-way random-effects model, ICC(1) in the Shrout and Fleiss (1979)
//! notation: each target is rated by k raters, and raters are not assumed to
//! be the same across targets.

use crate::panel::Panel;
use crate::types::IccResult;
use classic_core::math::distributions::fisher_snedecor;
use classic_core::{ConfidenceInterval, ConfidenceLevel, Error, Result};
use tracing::{debug, instrument};

/// ICC(1) of a targets × raters panel
///
/// Every cell must hold a finite score: a missing rating makes the design
/// unbalanced and fails with a design violation.
///
/// # Example
///
/// ```rust
/// use classic_reliability::{intraclass_corr, Panel};
/// use classic_core::ConfidenceLevel;
/// use nalgebra::DMatrix;
///
/// let ratings = DMatrix::from_row_slice(4, 2, &[9.0, 8.0, 5.0, 6.0, 2.0, 1.0, 7.0, 7.0]);
/// let result = intraclass_corr(&Panel::from_wide(ratings), ConfidenceLevel::default()).unwrap();
/// assert!(result.icc > 0.9);
/// ```
#[instrument(skip(panel), fields(shape = ?panel.shape()))]
pub fn intraclass_corr(panel: &Panel, ci: ConfidenceLevel) -> Result<IccResult> {
    if !panel.is_complete() {
        return Err(Error::unbalanced("every target must be rated by every rater"));
    }
    let (n, k) = panel.shape();
    if n < 2 || k < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n.min(k),
        });
    }

    let values = panel.values();
    let grand_mean = values.mean();
    let row_means: Vec<f64> = values.row_iter().map(|r| r.mean()).collect();

    let (nf, kf) = (n as f64, k as f64);
    let ss_between: f64 = row_means.iter().map(|m| kf * (m - grand_mean).powi(2)).sum();
    let ss_within: f64 = values
        .row_iter()
        .zip(&row_means)
        .map(|(r, m)| r.iter().map(|v| (v - m).powi(2)).sum::<f64>())
        .sum();

    let df1 = nf - 1.0;
    let df2 = nf * (kf - 1.0);
    let ms_between = ss_between / df1;
    let ms_within = ss_within / df2;

    let icc = (ms_between - ms_within) / (ms_between + (kf - 1.0) * ms_within);
    let f = ms_between / ms_within;
    let pval = fisher_snedecor::sf(f, df1, df2)?;

    let tail = ci.tail_probability();
    let f_lower = f / fisher_snedecor::isf(tail, df1, df2)?;
    let f_upper = f * fisher_snedecor::isf(tail, df2, df1)?;
    let lower = (f_lower - 1.0) / (f_lower + kf - 1.0);
    let upper = (f_upper - 1.0) / (f_upper + kf - 1.0);
    debug!(icc, f, pval, lower, upper, "intraclass correlation");

    Ok(IccResult {
        icc,
        ci: ConfidenceInterval::new(lower, upper, ci),
        f,
        df1,
        df2,
        pval,
    })
}
