//! Core definitions shared by every cleaning stage: error types and the
//! expected customer-table schema.

pub mod error;
pub mod schema;

pub use error::{CleanError, CleanResult};
