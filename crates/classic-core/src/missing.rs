//! Missing-value handling
//!
//! Missing values are represented as `NaN` throughout the workspace. Matrix
//! tests drop incomplete observations (rows) before any algebra is done.

use nalgebra::DMatrix;

/// Copy of `data` without its missing values
pub fn drop_missing(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Indices of rows with no missing value
pub fn complete_row_indices(m: &DMatrix<f64>) -> Vec<usize> {
    (0..m.nrows())
        .filter(|&i| m.row(i).iter().all(|v| !v.is_nan()))
        .collect()
}

/// Select rows of `m` by index, in order
pub fn select_rows(m: &DMatrix<f64>, rows: &[usize]) -> DMatrix<f64> {
    DMatrix::from_fn(rows.len(), m.ncols(), |i, j| m[(rows[i], j)])
}

/// Copy of `m` without the rows that contain a missing value
pub fn drop_incomplete_rows(m: &DMatrix<f64>) -> DMatrix<f64> {
    select_rows(m, &complete_row_indices(m))
}

/// Drop the rows of two paired matrices where either side has a missing value
///
/// Both matrices must have the same number of rows.
pub fn drop_incomplete_pairs(x: &DMatrix<f64>, y: &DMatrix<f64>) -> (DMatrix<f64>, DMatrix<f64>) {
    debug_assert_eq!(x.nrows(), y.nrows());
    let keep: Vec<usize> = (0..x.nrows())
        .filter(|&i| {
            x.row(i).iter().all(|v| !v.is_nan()) && y.row(i).iter().all(|v| !v.is_nan())
        })
        .collect();
    (select_rows(x, &keep), select_rows(y, &keep))
}
