//! Data Loading
//!
//! Loads a survey schema (question definitions) and survey responses with
//! Polars. CSV and Parquet are both accepted; empty CSV cells load as nulls.

use polars::prelude::*;
use anyhow::{Context, Result};
use std::path::Path;

use crate::questions::{QNAME_COLUMN, QUESTION_COLUMN};
use crate::utils::require_columns;

/// Schema and responses for one survey
pub struct SurveyData {
    /// One row per question: `qname`, `question`, ...
    pub schema: DataFrame,

    /// One row per respondent
    pub responses: DataFrame,
}

impl SurveyData {
    pub fn load(schema_path: &Path, responses_path: &Path) -> Result<Self> {
        let schema = load_table(schema_path)?;
        require_columns(&schema, &[QNAME_COLUMN, QUESTION_COLUMN], "schema")
            .with_context(|| format!("Schema file {:?} is not a question table", schema_path))?;

        let responses = load_table(responses_path)?;

        tracing::info!("  Questions: {}", schema.height());
        tracing::info!("  Responses: {} ({} columns)", responses.height(), responses.width());

        Ok(SurveyData { schema, responses })
    }
}

/// Load a table from CSV, or Parquet when the extension says so
pub fn load_table(path: &Path) -> Result<DataFrame> {
    let is_parquet = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("parquet"));

    if is_parquet {
        LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to scan parquet: {:?}", path))?
            .collect()
            .with_context(|| format!("Failed to load parquet: {:?}", path))
    } else {
        CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.into()))
            .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
            .finish()
            .with_context(|| format!("Failed to load CSV: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("survey_insights_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_survey_csv() {
        let schema = write_temp("schema.csv", "qname,question\nq1,How old?\nq2,Fav lang?\n");
        let responses = write_temp("responses.csv", "id,skills\n1,Python;Java\n2,\n3,Rust\n");

        let data = SurveyData::load(&schema, &responses).unwrap();
        assert_eq!(data.schema.height(), 2);
        assert_eq!(data.responses.height(), 3);
        // Empty cell is missing, not an empty string
        assert_eq!(data.responses.column("skills").unwrap().null_count(), 1);

        fs::remove_file(schema).ok();
        fs::remove_file(responses).ok();
    }

    #[test]
    fn test_schema_without_question_column() {
        let schema = write_temp("bad_schema.csv", "qname,text\nq1,How old?\n");
        let responses = write_temp("bad_responses.csv", "id\n1\n");

        let err = SurveyData::load(&schema, &responses).err().unwrap();
        assert!(format!("{:#}", err).contains("question"));

        fs::remove_file(schema).ok();
        fs::remove_file(responses).ok();
    }

    #[test]
    fn test_load_table_parquet() {
        let path = std::env::temp_dir().join(format!("survey_insights_{}_responses.parquet", std::process::id()));
        let mut df = df![
            "id" => &[1i64, 2, 3],
            "skills" => &[Some("Python;Java"), None, Some("Rust")],
        ].unwrap();

        let file = fs::File::create(&path).unwrap();
        ParquetWriter::new(file).finish(&mut df).unwrap();

        let loaded = load_table(&path).unwrap();
        assert_eq!(loaded.height(), 3);
        assert_eq!(loaded.column("skills").unwrap().null_count(), 1);
        assert!(loaded.equals_missing(&df));

        fs::remove_file(path).ok();
    }
}
