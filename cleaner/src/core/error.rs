//! Error types for cleaning operations.

use polars::prelude::PolarsError;

/// Result type for cleaning operations
pub type CleanResult<T> = std::result::Result<T, CleanError>;

/// Error type for cleaning operations
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// Required columns are absent from the input table. Raised up front by
    /// schema validation so stages never fail on a missing column lookup.
    #[error("schema error: missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// A missing value survived into the integer cast. Imputation must have
    /// eliminated all nulls from numeric columns before this point.
    #[error("type conversion error in column '{column}': {reason}")]
    TypeConversion { column: String, reason: String },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
