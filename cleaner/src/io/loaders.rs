//! CSV loading into DataFrames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;

use crate::core::error::CleanResult;

/// Read a customer CSV into a DataFrame (header row, inferred schema).
pub fn load_csv(path: &Path) -> CleanResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(500))
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;
    Ok(df)
}

/// Read CSV text already held in memory.
pub fn load_csv_str(text: &str) -> CleanResult<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(text.as_bytes()))
        .finish()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_csv_str() {
        let csv = "customer,gender,customer_lifetime_value\n\
                   RB50392,Femal,697953.59%\n\
                   QZ44356,F,1288743.17%\n";

        let df = load_csv_str(csv).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);

        // Percent-suffixed values stay strings until the coercion stage
        let clv = df.column("customer_lifetime_value").unwrap();
        assert_eq!(clv.dtype(), &DataType::String);
        assert_eq!(clv.str().unwrap().get(0), Some("697953.59%"));
    }

    #[test]
    fn test_load_csv_str_empty_cells_are_null() {
        let csv = "customer,gender\nRB50392,\n,F\n";
        let df = load_csv_str(csv).unwrap();
        assert_eq!(df.column("gender").unwrap().null_count(), 1);
        assert_eq!(df.column("customer").unwrap().null_count(), 1);
    }
}
