//! Advisory diagnostics
//!
//! Some computations succeed but deserve a caveat: Hedges' g requested without
//! group sizes, unequal variances behind a pooled Cohen's d, a singular
//! covariance matrix. These are not errors. They are collected alongside the
//! value in [`Advised`] so callers can inspect or ignore them, and each one is
//! emitted once through `tracing` at `WARN` level when raised.

use std::fmt;
use tracing::warn;

/// A non-fatal diagnostic raised while computing a result
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    /// Hedges' g requested without both group sizes; Cohen's d returned instead
    HedgesWithoutSampleSizes,

    /// Glass delta requested from a pure conversion; the original value is returned
    GlassWithoutVariance,

    /// The variance homogeneity test rejected equal variances
    UnequalVariances {
        /// Name of the test that was used
        method: String,
        /// p-value of that test
        p_value: f64,
    },

    /// A covariance matrix was singular; a pseudo-inverse was used
    RankDeficient {
        /// Numerical rank of the matrix
        rank: usize,
        /// Number of variables
        dimension: usize,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HedgesWithoutSampleSizes => write!(
                f,
                "You need to pass nx and ny arguments to compute Hedges g. \
                 Returning Cohen's d instead"
            ),
            Self::GlassWithoutVariance => write!(
                f,
                "Returning original effect size instead of Glass because variance is not known"
            ),
            Self::UnequalVariances { method, p_value } => write!(
                f,
                "Unequal variances ({method}, p={p_value:.4}). \
                 You should consider reporting Glass delta instead"
            ),
            Self::RankDeficient { rank, dimension } => write!(
                f,
                "Covariance matrix is rank deficient (rank {rank} < {dimension}); \
                 results may be unreliable"
            ),
        }
    }
}

/// A computed value together with the advisories raised while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Advised<T> {
    /// The computed value
    pub value: T,
    /// Advisories in the order they were raised
    pub advisories: Vec<Advisory>,
}

impl<T> Advised<T> {
    /// Wrap a value that raised no advisories
    pub fn clean(value: T) -> Self {
        Self {
            value,
            advisories: Vec::new(),
        }
    }

    /// Whether any advisory was raised
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }

    /// Whether a specific advisory was raised
    pub fn raised(&self, predicate: impl Fn(&Advisory) -> bool) -> bool {
        self.advisories.iter().any(predicate)
    }
}

/// Collector used while a computation is running
#[derive(Debug, Default)]
pub struct Advisories(Vec<Advisory>);

impl Advisories {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an advisory and log it
    pub fn raise(&mut self, advisory: Advisory) {
        warn!(advisory = ?advisory, "{advisory}");
        self.0.push(advisory);
    }

    /// Absorb advisories already raised (and logged) by a nested computation
    pub fn absorb<T>(&mut self, advised: Advised<T>) -> T {
        self.0.extend(advised.advisories);
        advised.value
    }

    /// Number of advisories raised so far
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been raised yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Attach the collected advisories to a final value
    pub fn finish<T>(self, value: T) -> Advised<T> {
        Advised {
            value,
            advisories: self.0,
        }
    }
}
