//! Duplicate-row removal.

use std::collections::HashSet;

use polars::prelude::*;

use crate::core::error::CleanResult;

// Joins rendered cell values into a row key; cannot occur inside the text
// fields of this dataset.
const KEY_SEPARATOR: char = '\u{1f}';

/// Drop rows that duplicate an earlier row across all columns, keeping the
/// first occurrence in original order.
///
/// The surviving frame is contiguous; DataFrames carry no index column, so
/// renumbering is implicit.
pub fn remove_duplicate_rows(df: DataFrame) -> CleanResult<DataFrame> {
    let mut seen: HashSet<String> = HashSet::with_capacity(df.height());
    let mut keep: Vec<bool> = Vec::with_capacity(df.height());

    for row in 0..df.height() {
        let mut key = String::new();
        for column in df.get_columns() {
            let value = column.get(row)?;
            key.push_str(&value.to_string());
            key.push(KEY_SEPARATOR);
        }
        keep.push(seen.insert(key));
    }

    let mask = Series::new("keep".into(), keep);
    Ok(df.filter(mask.bool()?)?)
}
