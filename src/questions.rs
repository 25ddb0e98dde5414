//! Question Lookup
//!
//! Maps a short question identifier (`qname`) to the full question wording
//! stored in a survey schema table.

use polars::prelude::*;
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::utils::{require_columns, string_column};

/// Column holding the short question identifier
pub const QNAME_COLUMN: &str = "qname";

/// Column holding the full question wording
pub const QUESTION_COLUMN: &str = "question";

/// Return the full question text for every row whose `qname` equals `qname`
///
/// Matches are exact and kept in row order. Identifiers are not assumed
/// unique, so duplicates all come back. No match gives an empty vector.
/// A matching row with a missing question contributes an empty string, so
/// the result length always equals the number of matching rows.
pub fn get_questions_by_name(df: &DataFrame, qname: &str) -> Result<Vec<String>> {
    require_columns(df, &[QNAME_COLUMN, QUESTION_COLUMN], "get_questions_by_name")?;

    let qnames = string_column(df, QNAME_COLUMN)?;
    let mask: BooleanChunked = qnames
        .into_iter()
        .map(|opt| opt.map_or(false, |s| s == qname))
        .collect();
    let matched = df.filter(&mask)?;

    let questions = string_column(&matched, QUESTION_COLUMN)?;
    let texts: Vec<String> = questions
        .into_iter()
        .map(|opt| opt.unwrap_or_default().to_string())
        .collect();

    tracing::debug!("qname '{}' matched {} question(s)", qname, texts.len());

    Ok(texts)
}

/// Distinct `(qname, question)` pairs in first-seen order
///
/// Only the first question text seen for each identifier is kept. Rows with a
/// missing `qname` are skipped.
pub fn question_catalog(df: &DataFrame) -> Result<Vec<(String, String)>> {
    require_columns(df, &[QNAME_COLUMN, QUESTION_COLUMN], "question_catalog")?;

    let qnames = string_column(df, QNAME_COLUMN)?;
    let questions = string_column(df, QUESTION_COLUMN)?;

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut catalog = Vec::new();

    for (name, text) in qnames.into_iter().zip(questions.into_iter()) {
        if let Some(name) = name {
            if seen.insert(name) {
                catalog.push((name.to_string(), text.unwrap_or_default().to_string()));
            }
        }
    }

    Ok(catalog)
}
