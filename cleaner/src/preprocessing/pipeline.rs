//! The cleaning pipeline orchestrator.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::error::{CleanError, CleanResult};
use crate::core::schema::{LIFETIME_VALUE_COLUMN, OPEN_COMPLAINTS_COLUMN};
use crate::io::writers;
use crate::preprocessing::validator::{SchemaValidator, ValidationResult};
use crate::transformations::{categorical, dedup, impute, numeric};

/// Configuration for a cleaning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Rewrite raw headers (`ST` -> `state`, lowercase, spaces to
    /// underscores) before any stage runs. Off by default: inputs are
    /// expected to arrive with lower_snake_case headers already in effect.
    #[serde(default)]
    pub normalize_column_names: bool,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_write_output")]
    pub write_output: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("cleaned_data.csv")
}

fn default_write_output() -> bool {
    true
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            normalize_column_names: false,
            output_path: default_output_path(),
            write_output: true,
        }
    }
}

impl CleanConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> CleanResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| CleanError::Configuration(format!("Failed to read config file: {e}")))?;
        toml::from_str(&content)
            .map_err(|e| CleanError::Configuration(format!("Failed to parse config file: {e}")))
    }
}

/// Summary of a completed cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub duplicates_removed: usize,
    pub validation: ValidationResult,
}

/// Cleaned table plus its run report.
#[derive(Debug)]
pub struct CleanOutcome {
    pub dataframe: DataFrame,
    pub report: CleanReport,
}

/// Fixed-order cleaning pipeline over one customer table.
///
/// Stages run sequentially, each taking ownership of the table and handing
/// it to the next; there is no branching and no shared state between runs.
pub struct CleanPipeline {
    config: CleanConfig,
}

impl CleanPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self {
            config: CleanConfig::default(),
        }
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: CleanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Run every stage over `df` and hand back the cleaned table.
    ///
    /// The lifetime-value column is coerced twice on purpose: once as the
    /// dedicated percent-stripping pass and once more as a generic
    /// to-numeric safeguard. The second application is a value-level
    /// no-op, so both calls are kept rather than collapsed.
    pub fn run(&self, df: DataFrame) -> CleanResult<CleanOutcome> {
        let mut df = df;

        if self.config.normalize_column_names {
            debug!("normalizing column names");
            df = categorical::normalize_column_names(df)?;
        }

        let validation = SchemaValidator::validate_dataframe(&df);
        if !validation.is_valid {
            return Err(CleanError::Schema {
                missing: validation.missing_columns,
            });
        }

        let rows_in = df.height();
        info!("cleaning {} rows, {} columns", rows_in, df.width());

        df = categorical::normalize_gender(df)?;
        df = categorical::normalize_state(df)?;
        df = categorical::normalize_education(df)?;
        df = numeric::coerce_to_numeric(df, LIFETIME_VALUE_COLUMN)?;
        df = categorical::normalize_vehicle_class(df)?;
        // Intentional second pass over the same column; idempotent.
        df = numeric::coerce_to_numeric(df, LIFETIME_VALUE_COLUMN)?;
        df = numeric::parse_open_complaints(df, OPEN_COMPLAINTS_COLUMN)?;
        df = impute::fill_numeric_with_median(df)?;
        df = impute::fill_categorical_with_mode(df)?;
        df = numeric::numeric_columns_to_integers(df)?;
        df = dedup::remove_duplicate_rows(df)?;

        let rows_out = df.height();
        let duplicates_removed = rows_in - rows_out;
        debug!("removed {duplicates_removed} duplicate rows");

        if self.config.write_output {
            writers::write_csv(&mut df, &self.config.output_path)?;
            info!(
                "wrote cleaned table to {}",
                self.config.output_path.display()
            );
        }

        Ok(CleanOutcome {
            dataframe: df,
            report: CleanReport {
                rows_in,
                rows_out,
                duplicates_removed,
                validation,
            },
        })
    }
}

impl Default for CleanPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function: clean `df` with default settings, writing the
/// result to `output_path`.
pub fn clean_customer_table(df: DataFrame, output_path: &Path) -> CleanResult<CleanOutcome> {
    let config = CleanConfig {
        output_path: output_path.to_path_buf(),
        ..CleanConfig::default()
    };
    CleanPipeline::with_config(config).run(df)
}
