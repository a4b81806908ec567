//! Input-schema validation with error and warning reporting.
//!
//! Stages reference columns by fixed lower_snake_case names, so the schema
//! is checked once at pipeline start; a missing required column surfaces
//! here instead of deep inside a stage.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::schema::REQUIRED_COLUMNS;

/// Validation outcome for one input table.
///
/// Missing required columns make `is_valid` false; warnings are
/// informational and don't fail validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub missing_columns: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary statistics gathered during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_rows: usize,
    pub total_columns: usize,
    pub null_cells: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            missing_columns: Vec::new(),
            warnings: Vec::new(),
            stats: ValidationStats::default(),
        }
    }

    pub fn add_missing_column(&mut self, column: String) {
        self.is_valid = false;
        self.missing_columns.push(column);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for customer-table input.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Check that every required column is present and collect null
    /// statistics over the whole table.
    pub fn validate_dataframe(df: &DataFrame) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.stats.total_rows = df.height();
        result.stats.total_columns = df.width();

        let present: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        for required in REQUIRED_COLUMNS {
            if !present.iter().any(|n| n == required) {
                result.add_missing_column(required.to_string());
            }
        }

        for column in df.get_columns() {
            let nulls = column.null_count();
            result.stats.null_cells += nulls;
            if df.height() > 0 && nulls == df.height() {
                result.add_warning(format!("Column '{}' is entirely null", column.name()));
            }
        }

        result
    }
}
