//! Output module for exporting harvest results
//!
//! This module handles:
//! - Writing course records to the fixed-schema CSV file
//! - Formatting the end-of-run summary printed to stdout

mod csv_export;
pub mod stats;

pub use csv_export::{export_csv, write_csv};
pub use stats::{format_summary, print_summary};
