//! Result printers.
//!
//! The table format prints one line per trade as `TradeId : Value : Error`,
//! leaving out whichever part is absent.

use std::io::Write;

use clap::ValueEnum;
use pricer_core::results::{ScalarResult, ScalarResults};

use crate::{CliError, Result};

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `TradeId : Value : Error` lines
    #[default]
    Table,
    /// CSV with a `trade_id,value,error` header
    Csv,
    /// JSON array of result objects
    Json,
}

/// Formats one result as a table line.
pub fn format_line(result: &ScalarResult) -> String {
    let mut line = result.trade_id.clone();
    if let Some(value) = result.value {
        line.push_str(&format!(" : {value}"));
    }
    if let Some(error) = &result.error {
        line.push_str(&format!(" : {error}"));
    }
    line
}

/// Writes every result in enumeration order.
pub fn write_results<W: Write>(results: &ScalarResults, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for result in results {
                writeln!(out, "{}", format_line(&result))?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for result in results {
                writer.serialize(&result).map_err(CliError::output)?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            let entries: Vec<ScalarResult> = results.entries().collect();
            serde_json::to_writer_pretty(&mut out, &entries).map_err(CliError::output)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
