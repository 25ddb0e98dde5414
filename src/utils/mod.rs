//! Utility modules for survey analysis
//!
//! Contains shared functionality used by both analyses:
//! - Column helpers: Validation, string casting, null filtering

pub mod columns;

// Re-export commonly used helpers
pub use columns::{filter_non_missing, require_columns, string_column};
