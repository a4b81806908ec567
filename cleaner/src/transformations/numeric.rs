//! Numeric coercion stages.
//!
//! Parse failures become nulls rather than errors; the only hard failure in
//! this module is a null surviving into the final integer cast, which means
//! imputation did not run (or could not compute a fill value).

use polars::prelude::*;

use crate::core::error::{CleanError, CleanResult};
use crate::core::schema;

/// Strip one trailing percent sign and parse the remainder as a float.
fn parse_percent(raw: &str) -> Option<f64> {
    raw.strip_suffix('%').unwrap_or(raw).parse::<f64>().ok()
}

/// Middle segment of an `A/B/C` complaint encoding. Wrong segment count or
/// a non-numeric middle segment is None.
fn parse_complaint_encoding(raw: &str) -> Option<i64> {
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    parts[1].trim().parse::<i64>().ok()
}

/// Coerce a column to Float64.
///
/// An already-numeric column is cast directly, so re-applying this stage is
/// a value-level no-op. Any other column is rendered to strings first, a
/// trailing `%` is stripped, and unparseable values become null.
pub fn coerce_to_numeric(mut df: DataFrame, column: &str) -> CleanResult<DataFrame> {
    if schema::is_numeric_dtype(df.column(column)?.dtype()) {
        let cast = df.column(column)?.cast(&DataType::Float64)?;
        df.with_column(cast)?;
        return Ok(df);
    }
    let parsed = {
        let rendered = df.column(column)?.cast(&DataType::String)?;
        let ca = rendered.str()?;
        let values: Vec<Option<f64>> = ca.into_iter().map(|v| v.and_then(parse_percent)).collect();
        Series::new(column.into(), values)
    };
    df.with_column(parsed)?;
    Ok(df)
}

/// Parse the `A/B/C` complaint-count encoding into an integer column.
///
/// A non-string column carries no recognizable encoding and becomes a
/// full-null Int64 column of the same height.
pub fn parse_open_complaints(mut df: DataFrame, column: &str) -> CleanResult<DataFrame> {
    let parsed = {
        let col = df.column(column)?;
        if col.dtype() == &DataType::String {
            let ca = col.str()?;
            let values: Vec<Option<i64>> = ca
                .into_iter()
                .map(|v| v.and_then(parse_complaint_encoding))
                .collect();
            Series::new(column.into(), values)
        } else {
            Series::full_null(column.into(), col.len(), &DataType::Int64)
        }
    };
    df.with_column(parsed)?;
    Ok(df)
}

/// Cast every numeric column to Int64, truncating fractional parts.
///
/// Runs strictly after imputation; a remaining null is a precondition
/// violation and fails the pipeline.
pub fn numeric_columns_to_integers(mut df: DataFrame) -> CleanResult<DataFrame> {
    let numeric: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| schema::is_numeric_dtype(c.dtype()))
        .map(|c| c.name().to_string())
        .collect();

    for name in numeric {
        let nulls = df.column(&name)?.null_count();
        if nulls > 0 {
            return Err(CleanError::TypeConversion {
                column: name,
                reason: format!("{nulls} missing values left after imputation"),
            });
        }
        let cast = df.column(&name)?.cast(&DataType::Int64)?;
        df.with_column(cast)?;
    }
    Ok(df)
}
