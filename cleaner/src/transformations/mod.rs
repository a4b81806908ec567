//! Table transformation stages.
//!
//! Each stage consumes the table by value and returns the transformed table,
//! so ownership threads linearly through the pipeline. Stages preserve the
//! row count (deduplication excepted) and the column set; they mutate column
//! contents in place via replacement.
//!
//! # Modules
//!
//! - [`categorical`]: canonical-value mappings and column-name normalization
//! - [`numeric`]: lifetime-value coercion, complaint parsing, integer cast
//! - [`impute`]: median / mode filling of missing values
//! - [`dedup`]: duplicate-row removal

pub mod categorical;
pub mod dedup;
pub mod impute;
pub mod numeric;

pub use categorical::{
    map_column_values, normalize_column_names, normalize_education, normalize_gender,
    normalize_state, normalize_vehicle_class,
};
pub use dedup::remove_duplicate_rows;
pub use impute::{fill_categorical_with_mode, fill_numeric_with_median};
pub use numeric::{coerce_to_numeric, numeric_columns_to_integers, parse_open_complaints};
