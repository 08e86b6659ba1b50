//! Error types for classic-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("{0}")]
    Core(#[from] classic_core::Error),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },
}

impl Error {
    /// True for errors caused by the caller's column names or parameters
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::InvalidColumn(_) | Self::TypeMismatch { .. } => true,
            Self::Core(err) => err.is_invalid_argument(),
            Self::Polars(_) => false,
        }
    }

    /// True for errors caused by the layout of the data
    pub fn is_design_violation(&self) -> bool {
        matches!(self, Self::Core(err) if err.is_design_violation())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
