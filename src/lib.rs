//! Classical statistics toolkit
//!
//! Effect sizes for two-sample designs, multivariate tests and reliability
//! metrics, split into focused crates and re-exported here:
//!
//! - [`classic_core`]: errors, advisories, distributions and matrix helpers
//! - [`classic_parametric`]: Shapiro-Wilk, Levene and Bartlett diagnostics
//! - [`classic_effect`]: effect size conversion and estimation
//! - [`classic_multivariate`]: Henze-Zirkler, Hotelling's T² and Box's M
//! - [`classic_reliability`]: Cronbach's alpha and intraclass correlation
//! - `classic_polars` (feature `polars`): the same tests on DataFrame columns
//!
//! Non-fatal conditions, such as a Hedges g requested without group sizes,
//! are returned as [`Advisory`] values next to the result and logged through
//! `tracing`.
//!
//! # Example
//!
//! ```rust
//! use classic_stats::prelude::*;
//!
//! let r = convert(0.5, EffectSizeKind::R, EffectSizeKind::Cohen, SampleSizes::Unknown).unwrap();
//! assert!((r.value.unwrap() - 1.1547005).abs() < 1e-7);
//!
//! let sizes = SampleSizes::Groups { nx: 10, ny: 10 };
//! let d = compute_effsize_from_t(2.0, sizes, EffectSizeKind::Cohen).unwrap();
//! assert!((d.value.unwrap() - 0.8944272).abs() < 1e-7);
//! ```

pub use classic_core;
pub use classic_effect;
pub use classic_multivariate;
pub use classic_parametric;
#[cfg(feature = "polars")]
pub use classic_polars;
pub use classic_reliability;

pub use classic_core::{Advised, Advisory, ConfidenceInterval, ConfidenceLevel, Error, Result};

/// Everything needed for day-to-day analysis
pub mod prelude {
    pub use classic_core::prelude::*;
    pub use classic_effect::{
        compute_effsize, compute_effsize_from_t, convert, convert_effsize, EffectSizeKind,
        EstimateOptions, SampleSizes, TwoSamples,
    };
    pub use classic_multivariate::{
        box_m, multivariate_normality, multivariate_ttest, BoxMResult, HenzeZirklerResult,
        HotellingResult, Reference,
    };
    pub use classic_parametric::{homoscedasticity, shapiro, HomoscedasticityMethod};
    pub use classic_reliability::{cronbach_alpha, intraclass_corr, MissingValues, Panel};

    #[cfg(feature = "polars")]
    pub use classic_polars::{ClassicStatsExt, ItemLayout, ToFrame, TtestDesign};
}
