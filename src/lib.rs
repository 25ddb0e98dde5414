//! Survey Insights
//!
//! Exploratory helpers for survey-style tables held in Polars DataFrames.
//!
//! - `questions/`: Look up full question wording by short identifier (`qname`)
//! - `distribution/`: Percentage of respondents choosing each option of a
//!   delimiter-joined multi-select column
//! - `data/`: CSV/Parquet loading for the report binary
//! - `config/`: JSON + environment configuration
//!
//! Loading and presentation sit outside the two analyses: both take an
//! already-loaded DataFrame and return plain values or another DataFrame.

pub mod error;
pub mod utils;
pub mod questions;
pub mod distribution;
pub mod config;
pub mod data;

// Re-export commonly used types
pub use error::{Result, SurveyError};
pub use questions::{get_questions_by_name, question_catalog};
pub use distribution::{
    calculate_unique_value_percentages, compute_distribution, distribution_with,
    distributions_for_columns, DistributionEntry, DistributionOptions, TokenCount,
};
pub use config::AnalysisConfig;
pub use data::SurveyData;
