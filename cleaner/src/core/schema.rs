//! Expected customer-table schema and canonical value mappings.
//!
//! Every stage references columns by their lower_snake_case name; the set
//! below is validated once at pipeline start so a missing column surfaces as
//! a schema error instead of failing deep inside a stage.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use polars::prelude::DataType;

/// Columns every input table must carry.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "customer",
    "state",
    "gender",
    "education",
    "customer_lifetime_value",
    "number_of_open_complaints",
    "policy_type",
    "vehicle_class",
];

/// Categorical columns eligible for mode imputation. Gender is deliberately
/// excluded.
pub const CATEGORICAL_FILL_COLUMNS: [&str; 5] = [
    "customer",
    "state",
    "education",
    "policy_type",
    "vehicle_class",
];

pub const LIFETIME_VALUE_COLUMN: &str = "customer_lifetime_value";
pub const OPEN_COMPLAINTS_COLUMN: &str = "number_of_open_complaints";

pub static GENDER_CANONICAL: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("Femal", "F"), ("Male", "M"), ("female", "F")]));

pub static STATE_CANONICAL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Cali", "California"),
        ("AZ", "Arizona"),
        ("WA", "Washington"),
    ])
});

pub static EDUCATION_CANONICAL: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| HashMap::from([("Bachelors", "Bachelor")]));

pub static VEHICLE_CLASS_CANONICAL: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Sports Car", "Luxury"),
        ("Luxury SUV", "Luxury"),
        ("Luxury Car", "Luxury"),
    ])
});

/// Lower_snake_case form of a raw header: the substring `ST` becomes
/// `state`, the whole name is lowercased, and spaces become underscores.
pub fn normalize_column_name(name: &str) -> String {
    name.replace("ST", "state").to_lowercase().replace(' ', "_")
}

/// Columns classified numeric: these receive median imputation and the
/// final integer cast.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("ST"), "state");
        assert_eq!(normalize_column_name("GENDER"), "gender");
        assert_eq!(
            normalize_column_name("Customer Lifetime Value"),
            "customer_lifetime_value"
        );
        assert_eq!(
            normalize_column_name("Number of Open Complaints"),
            "number_of_open_complaints"
        );
        // Already-normalized names are untouched
        assert_eq!(normalize_column_name("vehicle_class"), "vehicle_class");
    }

    #[test]
    fn test_numeric_dtype_classification() {
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_gender_not_in_fill_allowlist() {
        assert!(!CATEGORICAL_FILL_COLUMNS.contains(&"gender"));
        assert!(REQUIRED_COLUMNS.contains(&"gender"));
    }
}
