//! Missing-value imputation.
//!
//! Numeric columns receive their median computed over non-null values at
//! imputation time; a fixed allow-list of categorical columns receives the
//! column mode. Runs after all parsing stages so coercion failures are
//! already nulls, and before the integer cast so no nulls survive into it.

use std::collections::HashMap;

use polars::prelude::*;

use crate::core::error::CleanResult;
use crate::core::schema::{self, CATEGORICAL_FILL_COLUMNS};

/// Fill nulls in every numeric column with the column median.
///
/// Filled columns are rebuilt as Float64 (the median of an integer column
/// may be fractional). Columns without nulls are left untouched, as are
/// all-null columns, which have no median to draw from.
pub fn fill_numeric_with_median(mut df: DataFrame) -> CleanResult<DataFrame> {
    let candidates: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| schema::is_numeric_dtype(c.dtype()) && c.null_count() > 0)
        .map(|c| c.name().to_string())
        .collect();

    for name in candidates {
        let filled = {
            let series = df.column(&name)?.as_materialized_series();
            let Some(median) = series.median() else {
                continue;
            };
            let as_f64 = series.cast(&DataType::Float64)?;
            let ca = as_f64.f64()?;
            let values: Vec<f64> = ca.into_iter().map(|v| v.unwrap_or(median)).collect();
            Series::new(name.as_str().into(), values)
        };
        df.with_column(filled)?;
    }
    Ok(df)
}

/// Fill nulls in allow-listed categorical columns with the column mode.
///
/// Columns absent from the table are skipped without error.
pub fn fill_categorical_with_mode(mut df: DataFrame) -> CleanResult<DataFrame> {
    for name in CATEGORICAL_FILL_COLUMNS {
        let Ok(col) = df.column(name) else {
            continue;
        };
        if col.dtype() != &DataType::String || col.null_count() == 0 {
            continue;
        }
        let filled = {
            let ca = df.column(name)?.str()?;
            let Some(mode) = mode_value(ca) else {
                continue;
            };
            let values: Vec<Option<String>> = ca
                .into_iter()
                .map(|v| v.map(str::to_string).or_else(|| Some(mode.clone())))
                .collect();
            Series::new(name.into(), values)
        };
        df.with_column(filled)?;
    }
    Ok(df)
}

/// Most frequent non-null value; ties resolve to the value encountered
/// first. None for an all-null column.
fn mode_value(ca: &StringChunked) -> Option<String> {
    // value -> (count, first-seen position)
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (seen, value) in ca.into_iter().flatten().enumerate() {
        let entry = counts.entry(value).or_insert((0, seen));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(value, _)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_fill() {
        let df = df!("value" => &[Some(1.0f64), None, Some(3.0)]).unwrap();
        let out = fill_numeric_with_median(df).unwrap();
        let values: Vec<Option<f64>> = out.column("value").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_median_fill_integer_column() {
        let df = df!("value" => &[Some(1i64), None, Some(3), Some(3)]).unwrap();
        let out = fill_numeric_with_median(df).unwrap();
        let col = out.column("value").unwrap();
        assert_eq!(col.dtype(), &DataType::Float64);
        assert_eq!(col.null_count(), 0);
        assert_eq!(col.f64().unwrap().get(1), Some(3.0));
    }

    #[test]
    fn test_all_null_numeric_column_left_alone() {
        let values: Vec<Option<f64>> = vec![None, None];
        let df = df!("value" => &values).unwrap();
        let out = fill_numeric_with_median(df).unwrap();
        assert_eq!(out.column("value").unwrap().null_count(), 2);
    }

    #[test]
    fn test_mode_fill() {
        let df = df!(
            "education" => &[Some("A"), Some("A"), None, Some("B")],
        )
        .unwrap();
        let out = fill_categorical_with_mode(df).unwrap();
        let values: Vec<Option<&str>> = out
            .column("education")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(values, vec![Some("A"), Some("A"), Some("A"), Some("B")]);
    }

    #[test]
    fn test_mode_tie_breaks_on_first_encounter() {
        let df = df!(
            "state" => &[Some("B"), Some("A"), Some("A"), Some("B"), None],
        )
        .unwrap();
        let out = fill_categorical_with_mode(df).unwrap();
        let states = out.column("state").unwrap().str().unwrap();
        assert_eq!(states.get(4), Some("B"));
    }

    #[test]
    fn test_gender_excluded_from_mode_fill() {
        let df = df!(
            "gender" => &[Some("F"), Some("F"), None],
        )
        .unwrap();
        let out = fill_categorical_with_mode(df).unwrap();
        assert_eq!(out.column("gender").unwrap().null_count(), 1);
    }

    #[test]
    fn test_absent_allowlisted_columns_skipped() {
        let df = df!("other" => &[Some("x"), None]).unwrap();
        let out = fill_categorical_with_mode(df.clone()).unwrap();
        assert!(out.equals_missing(&df));
    }
}
