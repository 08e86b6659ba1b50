//! Result and option types for the univariate tests

use classic_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Outcome of a Shapiro-Wilk normality test
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapiroWilkResult {
    /// The W statistic, in (0, 1]
    pub w: f64,
    /// Probability of a W this small under normality
    pub pval: f64,
    /// Whether normality is retained at the requested alpha
    pub normal: bool,
}

/// Test used to check equality of variances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HomoscedasticityMethod {
    /// Bartlett when every group looks normal, Levene otherwise
    #[default]
    Auto,
    /// Levene's test centred on the group medians (Brown-Forsythe)
    Levene,
    /// Bartlett's test
    Bartlett,
}

impl HomoscedasticityMethod {
    /// Lowercase name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Levene => "levene",
            Self::Bartlett => "bartlett",
        }
    }
}

impl fmt::Display for HomoscedasticityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HomoscedasticityMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "levene" => Ok(Self::Levene),
            "bartlett" => Ok(Self::Bartlett),
            _ => Err(Error::unrecognized(s)),
        }
    }
}

/// Outcome of a test of equal variances
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomoscedasticityResult {
    /// Levene's W or Bartlett's T
    pub statistic: f64,
    /// p-value of the statistic
    pub pval: f64,
    /// Concrete test that was run (never `Auto`)
    pub method: HomoscedasticityMethod,
    /// Whether equal variances are retained at the requested alpha
    pub equal_var: bool,
}
