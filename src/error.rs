//! Error types for survey analysis
//!
//! Library calls return [`SurveyError`]. Binaries and the data loader wrap
//! everything in `anyhow` with context instead.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// Requested column does not exist in the table
    #[error("missing column '{column}' (available columns: {available:?})")]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SurveyError>;
