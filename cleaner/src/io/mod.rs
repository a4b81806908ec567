//! CSV input and output for customer tables.

pub mod loaders;
pub mod writers;

pub use loaders::{load_csv, load_csv_str};
pub use writers::write_csv;
