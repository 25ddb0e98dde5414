//! Multi-Select Distribution
//!
//! Computes how often each option of a multi-select question was chosen.
//! Answer cells hold delimiter-joined tokens (e.g. `"Python;Java;C++"`).
//!
//! Algorithm:
//! 1. Drop rows whose answer is missing (in place by default)
//! 2. Split every remaining answer on the delimiter
//! 3. Count every token occurrence across all rows
//! 4. percentage = count / remaining_rows × 100
//! 5. Sort by descending count
//!
//! A respondent may select several options, so percentages can sum past 100.
//! Order among tokens with equal counts is not part of the contract.

use polars::prelude::*;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Result, SurveyError};
use crate::utils::{filter_non_missing, require_columns, string_column};

/// Result column holding the token
pub const VALUE_COLUMN: &str = "value";

/// Result column holding the percentage of respondents
pub const PERCENTAGE_COLUMN: &str = "percentage";

/// Tokenization and mutation settings
///
/// Defaults reproduce the plain behaviour: `;` delimiter, tokens compared
/// verbatim, caller's table filtered in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionOptions {
    /// Literal separator between tokens
    pub delimiter: String,

    /// Trim surrounding whitespace from each token before counting
    pub trim_tokens: bool,

    /// Replace the caller's table with its filtered version (missing answers dropped)
    pub in_place: bool,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            delimiter: ";".to_string(),
            trim_tokens: false,
            in_place: true,
        }
    }
}

impl DistributionOptions {
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(SurveyError::InvalidConfig(
                "delimiter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Split one answer cell into tokens
    ///
    /// Empty tokens (`"A;;B"`, trailing delimiter) are kept as `""`.
    fn tokenize<'a>(&self, answer: &'a str) -> SmallVec<[&'a str; 8]> {
        answer
            .split(self.delimiter.as_str())
            .map(|token| if self.trim_tokens { token.trim() } else { token })
            .collect()
    }
}

/// Occurrence count for one token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenCount {
    pub value: String,
    pub count: usize,
    pub percentage: f64,
}

/// One result row, in the shape handed to presentation code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub value: String,
    pub percentage: f64,
}

/// Count token occurrences over an already-filtered table
///
/// The denominator is `filtered.height()`. Rows that are still null are
/// skipped but counted in the denominator, so filter first.
pub fn token_counts(
    filtered: &DataFrame,
    column: &str,
    options: &DistributionOptions,
) -> Result<Vec<TokenCount>> {
    options.validate()?;
    let answers = string_column(filtered, column)?;
    let respondents = filtered.height();

    // token → slot in `tallies`; slots keep first-seen order
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut tallies: Vec<(String, usize)> = Vec::new();

    for answer in answers.into_iter().flatten() {
        for token in options.tokenize(answer) {
            match slots.get(token) {
                Some(&slot) => tallies[slot].1 += 1,
                None => {
                    slots.insert(token.to_string(), tallies.len());
                    tallies.push((token.to_string(), 1));
                }
            }
        }
    }

    // Stable sort: most frequent first
    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    tracing::debug!(
        "Distribution over '{}': {} respondents, {} distinct tokens",
        column,
        respondents,
        tallies.len()
    );

    Ok(tallies
        .into_iter()
        .map(|(value, count)| TokenCount {
            percentage: count as f64 / respondents as f64 * 100.0,
            value,
            count,
        })
        .collect())
}

/// Build the `{value, percentage}` table from an already-filtered table
///
/// Pure: `filtered` is not modified. Zero input rows give zero result rows.
pub fn compute_distribution(
    filtered: &DataFrame,
    column: &str,
    options: &DistributionOptions,
) -> Result<DataFrame> {
    let counts = token_counts(filtered, column, options)?;

    let (values, percentages): (Vec<String>, Vec<f64>) = counts
        .into_iter()
        .map(|tc| (tc.value, tc.percentage))
        .unzip();

    Ok(DataFrame::new(vec![
        Column::new(VALUE_COLUMN.into(), values),
        Column::new(PERCENTAGE_COLUMN.into(), percentages),
    ])?)
}

/// Filter missing answers, then compute the distribution
///
/// With `options.in_place` the caller's table is replaced by its filtered
/// version (rows with a missing `column` are gone after the call). Otherwise
/// `df` is left as it was. A missing column fails before any change.
///
/// Do not share `df` with concurrent readers while this runs in place.
pub fn distribution_with(
    df: &mut DataFrame,
    column: &str,
    options: &DistributionOptions,
) -> Result<DataFrame> {
    require_columns(df, &[column], "distribution")?;
    options.validate()?;

    let filtered = filter_non_missing(df, column)?;
    let result = compute_distribution(&filtered, column, options)?;

    if options.in_place {
        tracing::debug!(
            "Dropped {} row(s) with missing '{}' from caller's table",
            df.height() - filtered.height(),
            column
        );
        *df = filtered;
    }

    Ok(result)
}

/// Percentage of respondents selecting each `;`-separated option in `column`
///
/// Rows with a missing value in `column` are removed from `df` itself.
/// Clone the table first if the original is still needed, or call
/// [`distribution_with`] with `in_place: false`.
pub fn calculate_unique_value_percentages(df: &mut DataFrame, column: &str) -> Result<DataFrame> {
    distribution_with(df, column, &DistributionOptions::default())
}

/// Distributions for several columns of one table, computed in parallel
///
/// The only helper that fans out across threads (one rayon task per column);
/// every other operation runs on the calling thread.
///
/// Each column gets its own null filter, so columns do not affect each
/// other's denominators. `df` is never mutated, whatever `options.in_place`
/// says.
pub fn distributions_for_columns(
    df: &DataFrame,
    columns: &[String],
    options: &DistributionOptions,
) -> Result<Vec<(String, DataFrame)>> {
    let names: Vec<&str> = columns.iter().map(String::as_str).collect();
    require_columns(df, &names, "distributions_for_columns")?;
    options.validate()?;

    columns
        .par_iter()
        .map(|column| -> Result<(String, DataFrame)> {
            let filtered = filter_non_missing(df, column)?;
            let result = compute_distribution(&filtered, column, options)?;
            Ok((column.clone(), result))
        })
        .collect()
}

/// Convert a result table into typed rows
pub fn to_entries(result: &DataFrame) -> Result<Vec<DistributionEntry>> {
    require_columns(result, &[VALUE_COLUMN, PERCENTAGE_COLUMN], "to_entries")?;
    let values = result.column(VALUE_COLUMN)?.str()?;
    let percentages = result.column(PERCENTAGE_COLUMN)?.f64()?;

    Ok(values
        .into_iter()
        .zip(percentages.into_iter())
        .filter_map(|(value, percentage)| {
            Some(DistributionEntry {
                value: value?.to_string(),
                percentage: percentage?,
            })
        })
        .collect())
}

/// Serialize a result table as a pretty-printed JSON array
pub fn to_json(result: &DataFrame) -> Result<String> {
    let entries = to_entries(result)?;
    Ok(serde_json::to_string_pretty(&entries)?)
}
