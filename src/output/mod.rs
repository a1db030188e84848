//! Output formatting for conversion results.
//!
//! - [`csv`] - CSV rows
//! - [`json`] - JSON array
//! - [`terminal`] - labelled blocks with colors

mod csv;
mod json;
mod terminal;

pub use csv::{escape_csv_field, write_csv};
pub use json::write_json;
pub use terminal::{format_label, result_fields, write_table};
