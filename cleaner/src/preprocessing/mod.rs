//! Pipeline orchestration and input validation.

pub mod pipeline;
pub mod validator;

pub use pipeline::{
    clean_customer_table, CleanConfig, CleanOutcome, CleanPipeline, CleanReport,
};
pub use validator::{SchemaValidator, ValidationResult, ValidationStats};
