//! Survey Report
//!
//! Prints the question text and option distribution for each multi-select
//! column of a survey.
//!
//! Usage:
//!   cargo run --bin survey_report -- <schema.csv> <responses.csv> [config.json]
//!
//! Without a config file every string column of the responses is analyzed.
//! `SURVEY_OUTPUT=json` switches to JSON output.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use survey_insights::distribution::to_entries;
use survey_insights::{
    distributions_for_columns, get_questions_by_name, question_catalog, AnalysisConfig,
    DistributionEntry, SurveyData,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_insights=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        anyhow::bail!("usage: survey_report <schema.csv> <responses.csv> [config.json]");
    }
    let schema_path = PathBuf::from(&args[0]);
    let responses_path = PathBuf::from(&args[1]);

    let mut config = match args.get(2) {
        Some(path) => AnalysisConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => AnalysisConfig::default(),
    };
    config.apply_env_overrides().context("Invalid environment override")?;

    tracing::info!("Loading survey...");
    let data = SurveyData::load(&schema_path, &responses_path)?;

    if config.columns.is_empty() {
        config.columns = data
            .responses
            .get_columns()
            .iter()
            .filter(|c| c.dtype() == &DataType::String)
            .map(|c| c.name().to_string())
            .collect();
        tracing::info!("No columns configured, analyzing {} string column(s)", config.columns.len());
    }

    // qname → first question wording
    let labels: HashMap<String, String> = question_catalog(&data.schema)?.into_iter().collect();

    let results = distributions_for_columns(&data.responses, &config.columns, &config.distribution)?;

    let json_output = std::env::var("SURVEY_OUTPUT").map_or(false, |v| v.eq_ignore_ascii_case("json"));

    if json_output {
        let mut report = serde_json::Map::new();
        for (column, result) in &results {
            let entries: Vec<DistributionEntry> = to_entries(result)?;
            report.insert(
                column.clone(),
                serde_json::json!({
                    "question": labels.get(column),
                    "wordings": get_questions_by_name(&data.schema, column)?,
                    "distribution": entries,
                }),
            );
        }
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (column, result) in &results {
        println!("\n{}", "=".repeat(70));
        match labels.get(column) {
            Some(label) => println!("{}: {}", column, label),
            None => println!("{} (no question text)", column),
        }
        // Alternate wordings for identifiers defined more than once
        let wordings = get_questions_by_name(&data.schema, column)?;
        for question in wordings.iter().skip(1) {
            println!("  also: {}", question);
        }
        println!("{}", "-".repeat(70));
        for entry in to_entries(result)? {
            println!("  {:<50} {:>8.2}%", entry.value, entry.percentage);
        }
    }

    Ok(())
}
