//! Error types for classical statistical analysis
//!
//! Provides a unified error type for all classic-stats crates.

use thiserror::Error;

/// Core error type for classical statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Unrecognized option, malformed parameter or missing required argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Structurally invalid data design (unbalanced panel, reused column, ...)
    #[error("Design violation: {0}")]
    DesignViolation(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A reference distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(#[from] statrs::StatsError),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an option string that is not part of an enumeration
    pub fn unrecognized(input: &str) -> Self {
        Self::InvalidArgument(format!("Could not interpret input '{input}'"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidArgument(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for an unbalanced design
    pub fn unbalanced(context: &str) -> Self {
        Self::DesignViolation(format!("Data must be balanced: {context}"))
    }

    /// True for errors caused by the caller's parameters
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// True for errors caused by the shape of the data
    pub fn is_design_violation(&self) -> bool {
        matches!(self, Self::DesignViolation(_))
    }
}
