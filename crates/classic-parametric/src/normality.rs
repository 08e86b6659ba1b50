//! Shapiro-Wilk test for univariate normality
//!
//! Uses Royston's (1995) approximation for the coefficients and the
//! p-value, valid for 3 ≤ n ≤ 5000. Larger samples are still computed but the
//! p-value becomes increasingly conservative.

use crate::types::ShapiroWilkResult;
use classic_core::descriptive::sorted;
use classic_core::math::distributions::normal;
use classic_core::missing::drop_missing;
use classic_core::{Error, Result};
use std::f64::consts::PI;
use tracing::debug;

const SMALL: f64 = 1e-19;

const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.07119, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// Evaluate `c[0] + c[1]·x + c[2]·x² + ...`
fn poly(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &ci| acc * x + ci)
}

/// Antisymmetric weights `a_1..a_{n/2}` for the ordered sample
fn coefficients(n: usize) -> Result<Vec<f64>> {
    let half = n / 2;
    if n == 3 {
        return Ok(vec![0.5_f64.sqrt()]);
    }

    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (1..=half)
        .map(|i| normal::ppf((i as f64 - 0.375) / an25))
        .collect::<Result<_>>()?;
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();

    let mut a = vec![0.0; half];
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    a[0] = a1;

    let (first, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };
    for i in first..half {
        a[i] = -m[i] / fac;
    }
    Ok(a)
}

/// p-value of the W statistic for a sample of size `n`
fn p_value(w: f64, n: usize) -> Result<f64> {
    if n == 3 {
        let pw = (6.0 / PI) * (w.sqrt().asin() - PI / 3.0);
        return Ok(pw.max(0.0));
    }

    let an = n as f64;
    let w1 = (1.0 - w).ln();
    let (y, m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if w1 >= gamma {
            return Ok(1e-99);
        }
        (
            -(gamma - w1).ln(),
            poly(&C3, an),
            poly(&C4, an).exp(),
        )
    } else {
        let xx = an.ln();
        (w1, poly(&C5, xx), poly(&C6, xx).exp())
    };
    normal::sf((y - m) / s)
}

/// Shapiro-Wilk test of the null hypothesis that `sample` is normal
///
/// Missing values are dropped first. At least three observations are required
/// and they must not all be equal.
///
/// # Example
///
/// ```rust
/// use classic_parametric::shapiro;
///
/// let weights = [148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0];
/// let result = shapiro(&weights, 0.05).unwrap();
/// assert!((result.w - 0.789).abs() < 1e-3);
/// assert!(!result.normal);
/// ```
pub fn shapiro(sample: &[f64], alpha: f64) -> Result<ShapiroWilkResult> {
    let data = drop_missing(sample);
    let n = data.len();
    if n < 3 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: n,
        });
    }

    let x = sorted(&data);
    let range = x[n - 1] - x[0];
    if range < SMALL {
        return Err(Error::InvalidArgument(
            "Shapiro-Wilk is undefined when all values are identical".to_string(),
        ));
    }

    let a = coefficients(n)?;
    let mean = x.iter().sum::<f64>() / n as f64;
    let ssq: f64 = x.iter().map(|v| (v - mean) * (v - mean)).sum();
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (x[n - 1 - i] - x[i]))
        .sum();
    let w = (numerator * numerator / ssq).min(1.0);
    let pval = p_value(w, n)?;

    debug!(n, w, pval, "Shapiro-Wilk");
    Ok(ShapiroWilkResult {
        w,
        pval,
        normal: pval > alpha,
    })
}
