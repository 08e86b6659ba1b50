//! Descriptive statistics over data slices
//!
//! These helpers do not filter missing values: a `NaN` anywhere in the input
//! propagates into the result. Use [`crate::missing`] first when a caller's
//! policy is to drop them.

/// Sort data and return a new vector
///
/// Uses IEEE total ordering, so `NaN` values end up after every number.
///
/// # Examples
///
/// ```rust
/// use classic_core::descriptive::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Calculate the mean of a slice
///
/// Returns `NaN` for empty slices.
///
/// # Examples
///
/// ```rust
/// use classic_core::descriptive::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Variance with `ddof` delta degrees of freedom
///
/// `ddof = 0` gives the population variance, `ddof = 1` the unbiased sample
/// variance. Returns `NaN` when `len <= ddof`.
pub fn variance(data: &[f64], ddof: usize) -> f64 {
    if data.len() <= ddof {
        return f64::NAN;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    ss / (data.len() - ddof) as f64
}

/// Standard deviation with `ddof` delta degrees of freedom
///
/// # Examples
///
/// ```rust
/// use classic_core::descriptive::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((std_dev(&data, 1) - 1.58113883).abs() < 1e-6);
/// assert!((std_dev(&data, 0) - 1.41421356).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64], ddof: usize) -> f64 {
    variance(data, ddof).sqrt()
}

/// Median of a slice
///
/// Returns `NaN` for empty slices.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let s = sorted(data);
    let n = s.len();
    if n % 2 == 0 {
        (s[n / 2 - 1] + s[n / 2]) / 2.0
    } else {
        s[n / 2]
    }
}

/// Covariance of two equally long slices with `ddof` delta degrees of freedom
pub fn covariance(x: &[f64], y: &[f64], ddof: usize) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.len() <= ddof {
        return f64::NAN;
    }
    let mx = mean(x);
    let my = mean(y);
    let cross: f64 = x.iter().zip(y).map(|(&a, &b)| (a - mx) * (b - my)).sum();
    cross / (x.len() - ddof) as f64
}
