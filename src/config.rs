//! Analysis configuration
//!
//! Loaded from a JSON file, then optionally overridden from the environment:
//!
//! ```json
//! {
//!   "distribution": { "delimiter": ";", "trim_tokens": false, "in_place": true },
//!   "columns": ["LanguageHaveWorkedWith", "DatabaseHaveWorkedWith"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::distribution::DistributionOptions;
use crate::error::Result;

/// Environment variable overriding the token delimiter
pub const ENV_DELIMITER: &str = "SURVEY_DELIMITER";
/// Environment variable toggling whitespace trimming (`1`/`true`/`yes`)
pub const ENV_TRIM_TOKENS: &str = "SURVEY_TRIM_TOKENS";
/// Environment variable toggling in-place filtering (`1`/`true`/`yes`)
pub const ENV_IN_PLACE: &str = "SURVEY_IN_PLACE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub distribution: DistributionOptions,

    /// Multi-select columns to analyze
    pub columns: Vec<String>,
}

impl AnalysisConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.distribution.validate()
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(delimiter) = lookup(ENV_DELIMITER) {
            self.distribution.delimiter = delimiter;
        }
        if let Some(flag) = lookup(ENV_TRIM_TOKENS) {
            self.distribution.trim_tokens = parse_flag(&flag);
        }
        if let Some(flag) = lookup(ENV_IN_PLACE) {
            self.distribution.in_place = parse_flag(&flag);
        }
        self.validate()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
