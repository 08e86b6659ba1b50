//! Effect size conversion and estimation
//!
//! Effect sizes quantify the magnitude of a difference between two groups
//! independently of sample size. This crate offers three entry points:
//!
//! - [`convert`] / [`convert_effsize`]: re-express an r or Cohen's d as another kind
//! - [`compute_effsize`]: estimate an effect size from two samples
//! - [`compute_effsize_from_t`]: recover an effect size from a T statistic
//!
//! # Supported kinds
//!
//! | Tag | Kind |
//! |-----|------|
//! | `none` | no effect size |
//! | `cohen` | unbiased Cohen's d |
//! | `hedges` | Hedges' g |
//! | `glass` | Glass delta |
//! | `r` | correlation coefficient |
//! | `eta-square` | eta-square |
//! | `odds-ratio` | odds ratio |
//! | `auc` | area under the ROC curve |
//!
//! Results are [`Advised`](classic_core::Advised) values: caveats such as a
//! Hedges' g requested without group sizes travel with the value instead of
//! failing the call.
//!
//! # Examples
//!
//! ```rust
//! use classic_effect::{convert_effsize, SampleSizes};
//!
//! let auc = convert_effsize(0.8, "cohen", "AUC", SampleSizes::Unknown).unwrap();
//! assert!((auc.value.unwrap() - 0.714).abs() < 1e-3);
//! ```

pub mod cohen_d;
pub mod convert;
pub mod estimate;
pub mod from_statistic;
pub mod glass_delta;
pub mod hedges_g;
pub mod traits;
pub mod two_sample;
pub mod types;

pub use cohen_d::CohenD;
pub use convert::{convert, convert_effsize};
pub use estimate::compute_effsize;
pub use from_statistic::compute_effsize_from_t;
pub use glass_delta::GlassDelta;
pub use hedges_g::bias_correction_factor;
pub use traits::StandardizedEffectSize;
pub use two_sample::TwoSamples;
pub use types::{EffectSizeKind, EstimateOptions, SampleSizes};
