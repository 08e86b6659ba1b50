//! Univariate normality and variance homogeneity tests
//!
//! These tests are the diagnostics the effect-size estimator runs before
//! pooling variances, and are useful on their own:
//!
//! - [`shapiro`]: Shapiro-Wilk normality test (Royston's approximation)
//! - [`levene`] / [`bartlett`]: equality of variances across groups
//! - [`homoscedasticity`]: picks between the two and reports a conclusion
//!
//! Missing values (`NaN`) are dropped from each group before testing.

pub mod homoscedasticity;
pub mod normality;
pub mod types;

pub use homoscedasticity::{bartlett, homoscedasticity, levene};
pub use normality::shapiro;
pub use types::{HomoscedasticityMethod, HomoscedasticityResult, ShapiroWilkResult};
