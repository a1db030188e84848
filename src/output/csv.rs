//! CSV output of conversion results.

use crate::models::ConversionResult;
use std::error::Error;
use std::io::Write;

const CSV_HEADER: &str =
    "cidr,network,broadcast,first_usable,last_usable,subnet_mask,total_addresses";

/// Quote a field when it contains a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // double up embedded quotes; excel also dislikes spaces after the comma
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Write a header line followed by one row per result.
pub fn write_csv<W: Write>(
    results: &[ConversionResult],
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    writeln!(out, "{CSV_HEADER}")?;
    for r in results {
        let row = [
            r.cidr().to_string(),
            r.network_address().to_string(),
            r.broadcast_address().to_string(),
            r.first_usable().to_string(),
            r.last_usable().to_string(),
            r.subnet_mask().to_string(),
            r.total_addresses().to_string(),
        ];
        let row: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
        writeln!(out, "{}", row.join(","))?;
    }
    Ok(())
}
