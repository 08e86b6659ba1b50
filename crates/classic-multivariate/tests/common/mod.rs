//! Shared fixtures: three groups of three correlated variables

use nalgebra::DMatrix;

pub fn x() -> DMatrix<f64> {
    DMatrix::from_row_slice(
        18,
        3,
        &[
            2.1, 7.6, 2.4, 6.4, 7.8, 3.7, 3.9, 8.8, 3.4, 2.7, 6.2, 3.7, 5.0, 8.3, 2.7, 2.6, 7.0,
            -0.2, 4.5, 9.9, 1.8, 4.4, 8.7, 2.7, 4.3, 9.2, 3.7, 4.4, 7.9, 3.2, 3.9, 6.4, 2.4, 4.7,
            8.7, 3.8, 3.7, 8.6, 3.4, 3.4, 8.6, 3.1, 6.4, 9.3, 3.4, 3.1, 9.5, 2.6, 3.5, 8.1, 3.6,
            2.7, 8.0, 5.6,
        ],
    )
}

pub fn y() -> DMatrix<f64> {
    DMatrix::from_row_slice(
        18,
        3,
        &[
            4.2, 7.6, 3.9, 4.7, 7.7, 6.3, 3.4, 9.5, 7.2, 4.6, 7.9, 6.9, 5.2, 6.0, 5.5, 6.1, 8.9,
            7.0, 5.2, 6.9, 5.2, 3.7, 8.9, 6.8, 4.7, 8.3, 5.7, 5.8, 3.7, 5.3, 4.7, 7.4, 5.3, 5.1,
            6.4, 4.6, 5.2, 7.4, 5.8, 5.5, 6.0, 5.0, 3.6, 8.5, 6.2, 3.3, 8.4, 5.3, 6.1, 6.1, 4.8,
            4.2, 7.5, 5.8,
        ],
    )
}

pub fn z() -> DMatrix<f64> {
    DMatrix::from_row_slice(
        12,
        3,
        &[
            7.6, 5.9, 1.5, 4.9, 6.6, 2.0, 2.7, 6.5, 2.4, 6.4, 8.1, 4.2, -0.5, 6.3, 0.6, 3.5, 6.3,
            1.3, 5.1, 7.3, 2.5, 5.6, 6.4, 0.4, 4.5, 6.7, 2.3, 6.8, 7.2, 3.2, 5.2, 6.2, 3.4, 2.4,
            7.2, 4.0,
        ],
    )
}

/// `x()` with the third variable replaced by the first plus a perturbation of
/// order 1e-6, leaving the covariance full rank but badly conditioned
pub fn near_collinear() -> DMatrix<f64> {
    let base = x();
    DMatrix::from_fn(base.nrows(), 3, |i, j| {
        if j == 2 {
            base[(i, 0)] + 1e-6 * (((i * 7) % 11) as f64 - 5.0) / 5.0
        } else {
            base[(i, j)]
        }
    })
}
