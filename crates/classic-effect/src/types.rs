//! Types for effect size representation

use classic_core::{Error, Result};
use classic_parametric::HomoscedasticityMethod;
use std::fmt;
use std::str::FromStr;

/// Kinds of effect size understood by the converter and the estimators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSizeKind {
    /// No effect size
    None,
    /// Unbiased Cohen's d
    Cohen,
    /// Hedges' g, small-sample corrected Cohen's d
    Hedges,
    /// Glass delta, standardised by the control group only
    Glass,
    /// Eta-square, proportion of variance explained
    EtaSquare,
    /// Odds ratio
    OddsRatio,
    /// Area under the ROC curve
    Auc,
    /// Correlation coefficient
    R,
}

impl EffectSizeKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Cohen,
        Self::Hedges,
        Self::Glass,
        Self::EtaSquare,
        Self::OddsRatio,
        Self::Auc,
        Self::R,
    ];

    /// Canonical lowercase tag of the kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cohen => "cohen",
            Self::Hedges => "hedges",
            Self::Glass => "glass",
            Self::EtaSquare => "eta-square",
            Self::OddsRatio => "odds-ratio",
            Self::Auc => "auc",
            Self::R => "r",
        }
    }
}

impl fmt::Display for EffectSizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectSizeKind {
    type Err = Error;

    /// Parse a tag case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| Error::unrecognized(&lower))
    }
}

/// Sample sizes available to a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSizes {
    /// Size of each group
    Groups { nx: usize, ny: usize },
    /// Total number of observations only
    Total(usize),
    /// Nothing known
    #[default]
    Unknown,
}

impl SampleSizes {
    /// Group sizes as floats, when both are known
    pub fn groups(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Groups { nx, ny } => Some((nx as f64, ny as f64)),
            _ => None,
        }
    }
}

/// Options of [`compute_effsize`](crate::compute_effsize)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateOptions {
    /// Treat the samples as repeated measurements (Cohen's d-avg)
    pub paired: bool,
    /// Test used for the unequal variance diagnostic
    pub homoscedasticity: HomoscedasticityMethod,
    /// Significance level of the unequal variance diagnostic
    pub alpha: f64,
}

impl EstimateOptions {
    /// Default options for paired samples
    pub fn paired() -> Self {
        Self {
            paired: true,
            ..Self::default()
        }
    }

    /// Use a specific variance homogeneity test
    pub fn with_homoscedasticity(mut self, method: HomoscedasticityMethod) -> Self {
        self.homoscedasticity = method;
        self
    }

    /// Change the significance level of the variance diagnostic
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            paired: false,
            homoscedasticity: HomoscedasticityMethod::Auto,
            alpha: 0.001,
        }
    }
}
