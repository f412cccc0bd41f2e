//! Field parsing shared by the loaders.

use std::path::Path;

use chrono::NaiveDate;
use pricer_core::types::TradeDataError;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rejects an unset data file path.
pub(crate) fn require_path(path: &Path) -> Result<(), TradeDataError> {
    if path.as_os_str().is_empty() {
        Err(TradeDataError::MissingDataFile)
    } else {
        Ok(())
    }
}

pub(crate) fn io_error(path: &Path, err: impl ToString) -> TradeDataError {
    TradeDataError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

pub(crate) fn parse_number(line: usize, field: &'static str, raw: &str) -> Result<f64, TradeDataError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TradeDataError::InvalidNumber {
            line,
            field,
            value: raw.to_string(),
        })
}

pub(crate) fn parse_date(line: usize, raw: &str) -> Result<NaiveDate, TradeDataError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| TradeDataError::InvalidDate {
        line,
        value: raw.to_string(),
    })
}

/// Fails with `InvalidLine` when a record is short of `expected` fields.
pub(crate) fn require_fields(line: usize, found: usize, expected: usize) -> Result<(), TradeDataError> {
    if found < expected {
        Err(TradeDataError::InvalidLine {
            line,
            reason: format!("expected {expected} fields, found {found}"),
        })
    } else {
        Ok(())
    }
}
