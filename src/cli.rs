//! Command-line front end.
//!
//! Holds the argument model, logging set-up and the [`run`] driver so that
//! `main.rs` stays a thin shell.

use crate::models::ConversionResult;
use crate::output::{write_csv, write_json, write_table};
use crate::processing::convert;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Pattern used when no log4rs config file is found.
const DEFAULT_LOG_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Convert IPv4 CIDR blocks into network, broadcast, usable range, mask and size
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// CIDR blocks such as 192.168.1.0/24; read from stdin, one per line, when omitted
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        env = "CIDR_CONVERTER_FORMAT",
        default_value_t = OutputFormat::Table
    )]
    pub format: OutputFormat,

    /// log4rs YAML config, a console logger at warn level is used if missing
    #[arg(long, env = "CIDR_CONVERTER_LOG_CONFIG", default_value = "log4rs.yml")]
    pub log_config: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Initialise log4rs from `config_path`, or a stderr logger when it does not exist.
pub fn init_logging(config_path: &Path) -> Result<(), Box<dyn Error>> {
    if config_path.exists() {
        log4rs::init_file(config_path, Default::default())?;
        log::info!("Logging configured from {}", config_path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(DEFAULT_LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Inputs from the command line, or else from `reader` one per line.
///
/// Lines from `reader` are trimmed; blank lines and `#` comments are skipped.
/// Bytes that are not UTF-8 become U+FFFD, so such a line is later rejected
/// on its own instead of failing the whole batch.
pub fn collect_inputs<R: BufRead>(
    cidrs: &[String],
    reader: R,
) -> Result<Vec<String>, Box<dyn Error>> {
    if !cidrs.is_empty() {
        return Ok(cidrs.to_vec());
    }

    let mut inputs = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        inputs.push(line.to_string());
    }
    log::debug!("Read {} inputs from stdin", inputs.len());
    Ok(inputs)
}

/// Convert every input and write the successful ones to `out` in the chosen format.
///
/// Rejected inputs are reported on `err` and skipped.
///
/// # Returns
/// * `Ok(usize)` - the number of rejected inputs
pub fn run<R: BufRead, W: Write, E: Write>(
    args: &Args,
    reader: R,
    out: &mut W,
    err: &mut E,
) -> Result<usize, Box<dyn Error>> {
    let inputs = collect_inputs(&args.cidrs, reader)?;
    log::info!("Converting {} inputs as {:?}", inputs.len(), args.format);

    let mut results: Vec<ConversionResult> = Vec::with_capacity(inputs.len());
    let mut failed = 0;
    for input in &inputs {
        match convert(input) {
            Ok(result) => results.push(result),
            Err(e) => {
                log::warn!("Skipping {input:?}: {e}");
                writeln!(err, "{}: {e}", "error".red())?;
                failed += 1;
            }
        }
    }

    match args.format {
        OutputFormat::Table => write_table(&results, out)?,
        OutputFormat::Csv => write_csv(&results, out)?,
        OutputFormat::Json => write_json(&results, out)?,
    }
    out.flush()?;

    Ok(failed)
}
