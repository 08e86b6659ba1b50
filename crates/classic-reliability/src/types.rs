//! Result and option types of the reliability metrics

use classic_core::{ConfidenceInterval, Error, Result};
use std::str::FromStr;

/// How Cronbach's alpha treats subjects with missing scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingValues {
    /// Drop every subject with a missing score (listwise deletion)
    Drop,
    /// Compute each item covariance from the subjects scored on both items
    #[default]
    Pairwise,
}

impl MissingValues {
    /// `Drop` when `remove_na` is set, `Pairwise` otherwise
    pub fn from_remove_na(remove_na: bool) -> Self {
        if remove_na {
            Self::Drop
        } else {
            Self::Pairwise
        }
    }
}

impl FromStr for MissingValues {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "listwise" | "drop" => Ok(Self::Drop),
            "pairwise" => Ok(Self::Pairwise),
            _ => Err(Error::unrecognized(s)),
        }
    }
}

/// Cronbach's alpha with its confidence interval
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CronbachResult {
    /// Cronbach's alpha
    pub alpha: f64,
    /// Confidence interval of alpha
    pub ci: ConfidenceInterval,
}

/// One-way random-effects intraclass correlation, ICC(1)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IccResult {
    /// Intraclass correlation coefficient
    pub icc: f64,
    /// Confidence interval of the ICC
    pub ci: ConfidenceInterval,
    /// Between-target over within-target mean square
    pub f: f64,
    /// Numerator degrees of freedom
    pub df1: f64,
    /// Denominator degrees of freedom
    pub df2: f64,
    /// p-value of the F statistic
    pub pval: f64,
}
