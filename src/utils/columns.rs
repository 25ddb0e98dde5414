//! Column access helpers with validation
//!
//! Every public operation checks its columns up front so a missing column is
//! reported before anything touches the caller's table.

use polars::prelude::*;

use crate::error::{Result, SurveyError};

/// Fail with `MissingColumn` unless every name in `columns` exists in `df`
///
/// # Arguments
/// * `df` - Table to check
/// * `columns` - Required column names
/// * `context` - Operation name, used in the debug log only
///
/// # Example
/// ```rust
/// # use polars::prelude::*;
/// # use survey_insights::utils::require_columns;
/// let df = df!["qname" => &["q1"], "question" => &["How old?"]].unwrap();
/// require_columns(&df, &["qname", "question"], "lookup").unwrap();
/// ```
pub fn require_columns(df: &DataFrame, columns: &[&str], context: &str) -> Result<()> {
    let available: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    for &expected in columns {
        if !available.iter().any(|name| name == expected) {
            tracing::debug!("{}: column '{}' not found", context, expected);
            return Err(SurveyError::MissingColumn {
                column: expected.to_string(),
                available,
            });
        }
    }

    Ok(())
}

/// Fetch a column as strings
///
/// Non-string columns are cast, so numeric answer codes still tokenize.
/// Nulls stay null.
pub fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    require_columns(df, &[name], "string_column")?;
    let casted = df.column(name)?.cast(&DataType::String)?;
    Ok(casted.str()?.clone())
}

/// Copy of `df` without the rows whose `column` value is missing
///
/// Nulls are missing, and so is NaN in a float column. Empty strings are kept.
pub fn filter_non_missing(df: &DataFrame, column: &str) -> Result<DataFrame> {
    require_columns(df, &[column], "filter_non_missing")?;
    let values = df.column(column)?.as_materialized_series();

    let mut mask = values.is_not_null();
    if values.dtype().is_float() {
        mask = &mask & &values.is_not_nan()?;
    }

    Ok(df.filter(&mask)?)
}
