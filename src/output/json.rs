//! JSON output of conversion results.

use crate::models::ConversionResult;
use std::error::Error;
use std::io::Write;

/// Write all results as one pretty-printed JSON array.
pub fn write_json<W: Write>(
    results: &[ConversionResult],
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)?;
    Ok(())
}
