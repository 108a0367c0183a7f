//! Crate-wide error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the optimizer, the data source, and the run pipeline.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Optimizer arguments that cannot produce a meaningful run.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Series shorter than the requested training window.
    #[error("insufficient data: need {needed} values, found {available}")]
    InsufficientData { needed: usize, available: usize },

    /// A data cell that is missing or does not parse as a number.
    #[error("row {row}, column {column}: cannot parse \"{value}\" as a number")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
