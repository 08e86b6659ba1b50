//! Hedges' g effect size
//!
//! Hedges' g removes the small-sample upward bias of Cohen's d by scaling it
//! with the correction factor J: g = d × J. For large samples g ≈ d.

/// Small-sample bias correction J = 1 - 3 / (4·(nx + ny) - 9)
pub fn bias_correction_factor(nx: f64, ny: f64) -> f64 {
    1.0 - 3.0 / (4.0 * (nx + ny) - 9.0)
}
