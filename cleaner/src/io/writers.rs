//! CSV persistence for cleaned tables.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::core::error::CleanResult;

/// Write `df` as comma-delimited text with a header row and no index
/// column, preserving the table's column order.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> CleanResult<()> {
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::loaders::load_csv;

    #[test]
    fn test_write_then_reload() {
        let mut df = df!(
            "customer" => &["RB50392", "QZ44356"],
            "customer_lifetime_value" => &[697953i64, 1288743],
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned_data.csv");
        write_csv(&mut df, &path).unwrap();

        let reloaded = load_csv(&path).unwrap();
        assert_eq!(reloaded.height(), 2);
        let names: Vec<String> = reloaded
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, vec!["customer", "customer_lifetime_value"]);
        assert!(reloaded.equals(&df));
    }
}
