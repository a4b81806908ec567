//! Categorical value normalization.
//!
//! Each normalizer applies a fixed finite mapping from known misspelled or
//! abbreviated values to canonical values. Unmapped values and nulls pass
//! through unchanged.

use std::collections::HashMap;

use polars::prelude::*;

use crate::core::error::CleanResult;
use crate::core::schema::{
    self, EDUCATION_CANONICAL, GENDER_CANONICAL, STATE_CANONICAL, VEHICLE_CLASS_CANONICAL,
};

/// Apply a fixed value mapping to a string column.
///
/// Values absent from the mapping pass through, nulls stay null, and a
/// non-string column is returned untouched.
pub fn map_column_values(
    mut df: DataFrame,
    column: &str,
    mapping: &HashMap<&str, &str>,
) -> CleanResult<DataFrame> {
    if df.column(column)?.dtype() != &DataType::String {
        return Ok(df);
    }
    let mapped = {
        let ca = df.column(column)?.str()?;
        let values: Vec<Option<&str>> = ca
            .into_iter()
            .map(|v| v.map(|raw| mapping.get(raw).copied().unwrap_or(raw)))
            .collect();
        Series::new(column.into(), values)
    };
    df.with_column(mapped)?;
    Ok(df)
}

/// Canonicalize gender values to {"F", "M"}.
pub fn normalize_gender(df: DataFrame) -> CleanResult<DataFrame> {
    map_column_values(df, "gender", &GENDER_CANONICAL)
}

/// Replace state abbreviations with full state names.
pub fn normalize_state(df: DataFrame) -> CleanResult<DataFrame> {
    map_column_values(df, "state", &STATE_CANONICAL)
}

/// Standardize education levels.
pub fn normalize_education(df: DataFrame) -> CleanResult<DataFrame> {
    map_column_values(df, "education", &EDUCATION_CANONICAL)
}

/// Collapse luxury vehicle categories into "Luxury".
pub fn normalize_vehicle_class(df: DataFrame) -> CleanResult<DataFrame> {
    map_column_values(df, "vehicle_class", &VEHICLE_CLASS_CANONICAL)
}

/// Rewrite raw headers to lower_snake_case form.
///
/// Must run before every other stage when enabled, since stage column
/// references assume normalized names.
pub fn normalize_column_names(mut df: DataFrame) -> CleanResult<DataFrame> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .map(|n| (n.to_string(), schema::normalize_column_name(n.as_str())))
        .filter(|(old, new)| old != new)
        .collect();
    for (old, new) in renames {
        df.rename(&old, new.into())?;
    }
    Ok(df)
}
