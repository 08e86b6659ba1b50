//! Multivariate hypothesis tests
//!
//! All tests take `nalgebra` matrices laid out observations × variables and
//! drop rows containing a missing value (`NaN`) before any algebra.
//!
//! - [`multivariate_normality`]: Henze-Zirkler test of multivariate normality
//! - [`multivariate_ttest`]: Hotelling's T² (one-sample, paired, two-sample)
//! - [`box_m`] / [`box_m_from_covariances`]: Box's M test of equal covariances
//!
//! Singular covariance matrices never cause a panic. Where a pseudo-inverse
//! stands in for the inverse the result carries
//! [`Advisory::RankDeficient`](classic_core::Advisory::RankDeficient).

pub mod box_m;
pub mod henze_zirkler;
pub mod hotelling;
pub mod types;

pub use box_m::{box_m, box_m_from_covariances};
pub use henze_zirkler::multivariate_normality;
pub use hotelling::multivariate_ttest;
pub use types::{BoxMResult, HenzeZirklerResult, HotellingResult, Reference};
