//! Terminal output of conversion results.
//!
//! Labels are right-aligned and colored, values printed as-is.

use crate::models::ConversionResult;
use colored::Colorize;
use std::error::Error;
use std::io::Write;

const LABEL_WIDTH: usize = 16;

/// Right-align `label` in a column of `width` characters.
pub fn format_label(label: &str, width: usize) -> String {
    format!("{label:>width$}")
}

/// The labelled fields of one result, in display order.
pub fn result_fields(result: &ConversionResult) -> Vec<(&'static str, String)> {
    vec![
        ("CIDR", result.cidr().to_string()),
        ("IP range", result.ip_range()),
        ("Network", result.network_address().to_string()),
        ("Broadcast", result.broadcast_address().to_string()),
        ("Subnet mask", result.subnet_mask().to_string()),
        ("First usable", result.first_usable().to_string()),
        ("Last usable", result.last_usable().to_string()),
        ("Total addresses", result.total_addresses().to_string()),
    ]
}

/// Write one labelled block per result, separated by blank lines.
pub fn write_table<W: Write>(
    results: &[ConversionResult],
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        for (label, value) in result_fields(result) {
            writeln!(
                out,
                "{label} : {value}",
                label = format_label(label, LABEL_WIDTH).as_str().cyan().bold()
            )?;
        }
    }
    Ok(())
}
