//! Polars integration for classical statistical analysis
//!
//! This crate exposes the classic-stats tests on Polars DataFrames through a
//! single extension trait, and renders their results back into one-row frames.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use classic_polars::{ClassicStatsExt, ToFrame, TtestDesign};
//!
//! let df = df![
//!     "x1" => [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
//!     "x2" => [2.1, 2.9, 4.2, 4.8, 6.1, 7.2],
//! ]?;
//!
//! let result = df.multivariate_ttest(&["x1", "x2"], TtestDesign::OneSample)?;
//! println!("{}", result.to_frame()?);
//! ```

mod config;
mod error;
mod methods;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use traits::*;

// Re-export commonly used types from dependencies
pub use classic_core::{Advised, Advisory, ConfidenceLevel};
pub use classic_effect::{EffectSizeKind, EstimateOptions};
pub use classic_reliability::MissingValues;
