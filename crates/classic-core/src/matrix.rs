//! Dense matrix helpers for the multivariate tests
//!
//! Data matrices are observations × variables (`n × p`). Covariance matrices
//! are symmetric, so inversion and rank use the symmetric eigendecomposition:
//! singular values are the absolute eigenvalues, and the pseudo-inverse keeps
//! only the eigenvalues above `1e-15 · max|λ|`.

use nalgebra::{DMatrix, DVector, SymmetricEigen};

/// Relative cutoff below which an eigenvalue is treated as zero in [`pinv_symmetric`]
pub const PINV_RCOND: f64 = 1e-15;

/// Column means of an `n × p` data matrix
pub fn column_means(m: &DMatrix<f64>) -> DVector<f64> {
    let n = m.nrows() as f64;
    DVector::from_iterator(m.ncols(), m.column_iter().map(|c| c.sum() / n))
}

/// Copy of `m` with each column centred on its mean
pub fn centered(m: &DMatrix<f64>) -> DMatrix<f64> {
    let means = column_means(m);
    DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)] - means[j])
}

/// Covariance matrix of the columns of `m` with `ddof` delta degrees of freedom
pub fn covariance_matrix(m: &DMatrix<f64>, ddof: usize) -> DMatrix<f64> {
    let c = centered(m);
    let denom = m.nrows() as f64 - ddof as f64;
    (c.transpose() * &c) / denom
}

/// Moore-Penrose pseudo-inverse of a symmetric matrix
pub fn pinv_symmetric(m: &DMatrix<f64>) -> DMatrix<f64> {
    let eig = SymmetricEigen::new(m.clone());
    let max_abs = eig.eigenvalues.iter().fold(0.0_f64, |acc, l| acc.max(l.abs()));
    let cutoff = PINV_RCOND * max_abs;
    let inv_vals = DVector::from_iterator(
        eig.eigenvalues.len(),
        eig.eigenvalues
            .iter()
            .map(|&l| if l.abs() > cutoff { 1.0 / l } else { 0.0 }),
    );
    &eig.eigenvectors * DMatrix::from_diagonal(&inv_vals) * eig.eigenvectors.transpose()
}

/// Numerical rank of a symmetric matrix
///
/// Counts singular values above `max(σ) · dim · ε`, the `matrix_rank`
/// tolerance of LAPACK-based tools.
pub fn rank_symmetric(m: &DMatrix<f64>) -> usize {
    if m.is_empty() {
        return 0;
    }
    let eig = SymmetricEigen::new(m.clone());
    let singular: Vec<f64> = eig.eigenvalues.iter().map(|l| l.abs()).collect();
    let max_sv = singular.iter().cloned().fold(0.0_f64, f64::max);
    let tol = max_sv * m.nrows().max(m.ncols()) as f64 * f64::EPSILON;
    singular.iter().filter(|&&s| s > tol).count()
}

/// Natural log of the determinant of a symmetric matrix
///
/// Uses the Cholesky factor when the matrix is positive definite and the LU
/// determinant otherwise, so singular input yields `-inf` (or `NaN` for a
/// negative determinant) instead of an error.
pub fn ln_det_symmetric(m: &DMatrix<f64>) -> f64 {
    match m.clone().cholesky() {
        Some(chol) => 2.0 * chol.l().diagonal().iter().map(|d| d.ln()).sum::<f64>(),
        None => m.determinant().ln(),
    }
}

/// Quadratic form `vᵀ A v`
pub fn quadratic_form(v: &DVector<f64>, a: &DMatrix<f64>) -> f64 {
    v.dot(&(a * v))
}
