//! Tests of equal variances across groups

use crate::normality::shapiro;
use crate::types::{HomoscedasticityMethod, HomoscedasticityResult};
use classic_core::descriptive::{mean, median, variance};
use classic_core::math::distributions::{chi_squared, fisher_snedecor};
use classic_core::missing::drop_missing;
use classic_core::{Error, Result};
use tracing::{debug, instrument};

/// Significance level at which groups are screened for normality in `Auto` mode
const NORMALITY_ALPHA: f64 = 0.05;

fn clean_groups(groups: &[&[f64]], min_size: usize) -> Result<Vec<Vec<f64>>> {
    if groups.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: groups.len(),
        });
    }
    groups
        .iter()
        .map(|g| {
            let clean = drop_missing(g);
            if clean.len() < min_size {
                Err(Error::InsufficientData {
                    expected: min_size,
                    actual: clean.len(),
                })
            } else {
                Ok(clean)
            }
        })
        .collect()
}

/// Levene's test centred on the median
///
/// Returns `(W, p)` where `W ~ F(k − 1, N − k)` under equal variances.
pub fn levene(groups: &[&[f64]]) -> Result<(f64, f64)> {
    let groups = clean_groups(groups, 1)?;
    let k = groups.len();
    let total: usize = groups.iter().map(Vec::len).sum();
    if total <= k {
        return Err(Error::InsufficientData {
            expected: k + 1,
            actual: total,
        });
    }

    let deviations: Vec<Vec<f64>> = groups
        .iter()
        .map(|g| {
            let m = median(g);
            g.iter().map(|v| (v - m).abs()).collect()
        })
        .collect();
    let group_means: Vec<f64> = deviations.iter().map(|z| mean(z)).collect();
    let grand_mean = deviations.iter().flatten().sum::<f64>() / total as f64;

    let between: f64 = deviations
        .iter()
        .zip(&group_means)
        .map(|(z, m)| z.len() as f64 * (m - grand_mean).powi(2))
        .sum();
    let within: f64 = deviations
        .iter()
        .zip(&group_means)
        .map(|(z, m)| z.iter().map(|v| (v - m).powi(2)).sum::<f64>())
        .sum();

    let dfn = (k - 1) as f64;
    let dfd = (total - k) as f64;
    let w = (dfd * between) / (dfn * within);
    let p = fisher_snedecor::sf(w, dfn, dfd)?;
    Ok((w, p))
}

/// Bartlett's test
///
/// Returns `(T, p)` where `T ~ χ²(k − 1)` under equal variances.
pub fn bartlett(groups: &[&[f64]]) -> Result<(f64, f64)> {
    let groups = clean_groups(groups, 2)?;
    let k = groups.len() as f64;
    let sizes: Vec<f64> = groups.iter().map(|g| g.len() as f64).collect();
    let variances: Vec<f64> = groups.iter().map(|g| variance(g, 1)).collect();
    let total: f64 = sizes.iter().sum();

    let pooled = sizes
        .iter()
        .zip(&variances)
        .map(|(n, v)| (n - 1.0) * v)
        .sum::<f64>()
        / (total - k);
    let numerator = (total - k) * pooled.ln()
        - sizes
            .iter()
            .zip(&variances)
            .map(|(n, v)| (n - 1.0) * v.ln())
            .sum::<f64>();
    let denominator = 1.0
        + (sizes.iter().map(|n| 1.0 / (n - 1.0)).sum::<f64>() - 1.0 / (total - k))
            / (3.0 * (k - 1.0));
    let t = numerator / denominator;
    let p = chi_squared::sf(t, k - 1.0)?;
    Ok((t, p))
}

/// Test the equality of variances with the requested method
///
/// `Auto` runs Bartlett's test when every group passes Shapiro-Wilk at 5 %
/// and Levene's test otherwise. A group too small or too flat for Shapiro-Wilk
/// counts as non-normal.
///
/// # Example
///
/// ```rust
/// use classic_parametric::{homoscedasticity, HomoscedasticityMethod};
///
/// let a = [8.88, 9.12, 9.04, 8.98, 9.00, 9.08, 9.01, 8.85, 9.06, 8.99];
/// let b = [8.88, 8.95, 9.29, 9.44, 9.15, 9.58, 8.36, 9.18, 8.67, 9.05];
/// let result = homoscedasticity(&[&a, &b], HomoscedasticityMethod::Levene, 0.05).unwrap();
/// assert_eq!(result.method, HomoscedasticityMethod::Levene);
/// assert!(!result.equal_var);
/// ```
#[instrument(skip(groups), fields(groups = groups.len()))]
pub fn homoscedasticity(
    groups: &[&[f64]],
    method: HomoscedasticityMethod,
    alpha: f64,
) -> Result<HomoscedasticityResult> {
    let method = match method {
        HomoscedasticityMethod::Auto => {
            let all_normal = groups.iter().all(|g| {
                shapiro(g, NORMALITY_ALPHA)
                    .map(|r| r.normal)
                    .unwrap_or(false)
            });
            if all_normal {
                HomoscedasticityMethod::Bartlett
            } else {
                HomoscedasticityMethod::Levene
            }
        }
        explicit => explicit,
    };

    let (statistic, pval) = match method {
        HomoscedasticityMethod::Bartlett => bartlett(groups)?,
        _ => levene(groups)?,
    };
    debug!(%method, statistic, pval, "variance homogeneity");

    Ok(HomoscedasticityResult {
        statistic,
        pval,
        method,
        equal_var: pval > alpha,
    })
}
