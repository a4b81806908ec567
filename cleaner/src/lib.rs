//! Batch cleaning pipeline for tabular insurance-customer data.
//!
//! The crate applies a fixed sequence of column-level transformations to a
//! polars `DataFrame`: categorical value normalization, percent-stripping
//! numeric coercion, complaint-count parsing, median/mode imputation of
//! missing values, an integer cast, and duplicate-row removal, then
//! persists the result as `cleaned_data.csv`.
//!
//! ```no_run
//! use std::path::Path;
//! use table_cleaner::io::load_csv;
//! use table_cleaner::preprocessing::CleanPipeline;
//!
//! # fn main() -> table_cleaner::CleanResult<()> {
//! let df = load_csv(Path::new("customers.csv"))?;
//! let outcome = CleanPipeline::new().run(df)?;
//! println!("kept {} rows", outcome.report.rows_out);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod io;
pub mod preprocessing;
pub mod transformations;

pub use crate::core::error::{CleanError, CleanResult};
pub use crate::preprocessing::pipeline::{
    clean_customer_table, CleanConfig, CleanOutcome, CleanPipeline, CleanReport,
};
