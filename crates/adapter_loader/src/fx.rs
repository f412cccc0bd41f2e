//! FX booking file loader.
//!
//! The FX feed is separated by `¬` (U+00AC), a multi-byte character in
//! UTF-8, so rows are split on the string rather than read with a
//! single-byte CSV delimiter.
//!
//! ```text
//! FxTrades¬2024-03-01
//! Type¬TradeDate¬Ccy1¬Ccy2¬Amount¬Rate¬ValueDate¬Counterparty¬TradeId
//! FxSpot¬2024-03-01¬GBP¬USD¬1000000¬1.2650¬2024-03-05¬BankA¬FX001
//! END¬1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use pricer_core::traits::TradeSource;
use pricer_core::types::{Trade, TradeDataError};
use tracing::debug;

use crate::parse::{io_error, parse_date, parse_number, require_fields, require_path};

/// Field separator of the FX feed.
pub const FX_DELIMITER: &str = "¬";

const FIELD_COUNT: usize = 9;
const PREAMBLE_LINES: usize = 2;
const FOOTER_MARKER: &str = "END";

/// Loads FX trades from a `¬`-separated file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FxTradeLoader {
    data_file: PathBuf,
}

impl FxTradeLoader {
    /// Creates a loader for `data_file`.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Path of the FX file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Points the loader at another file.
    pub fn set_data_file(&mut self, data_file: impl Into<PathBuf>) {
        self.data_file = data_file.into();
    }

    /// Parses FX trades from file content.
    ///
    /// Skips the metadata and header lines, skips blank lines and stops at
    /// the first row whose leading field is `END`. The instrument is the
    /// concatenated currency pair.
    ///
    /// # Errors
    ///
    /// Returns the first malformed row as a line-numbered [`TradeDataError`].
    pub fn parse_trades(content: &str) -> Result<Vec<Trade>, TradeDataError> {
        let mut trades = Vec::new();

        for (index, raw) in content.lines().enumerate().skip(PREAMBLE_LINES) {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = raw.split(FX_DELIMITER).map(str::trim).collect();
            if fields[0] == FOOTER_MARKER {
                break;
            }
            trades.push(trade_from_fields(line, &fields)?);
        }
        Ok(trades)
    }
}

fn trade_from_fields(line: usize, fields: &[&str]) -> Result<Trade, TradeDataError> {
    require_fields(line, fields.len(), FIELD_COUNT)?;

    Trade::builder(fields[8], fields[0])
        .trade_date(parse_date(line, fields[1])?)
        .instrument(format!("{}{}", fields[2], fields[3]))
        .notional(parse_number(line, "Amount", fields[4])?)
        .rate(parse_number(line, "Rate", fields[5])?)
        .value_date(parse_date(line, fields[6])?)
        .counterparty(fields[7])
        .build()
        .map_err(|err| TradeDataError::InvalidLine {
            line,
            reason: err.to_string(),
        })
}

impl TradeSource for FxTradeLoader {
    fn name(&self) -> &str {
        "fx trades"
    }

    fn load_trades(&self) -> Result<Vec<Trade>, TradeDataError> {
        require_path(&self.data_file)?;
        let content = fs::read_to_string(&self.data_file).map_err(|err| io_error(&self.data_file, err))?;
        let trades = Self::parse_trades(&content)?;
        debug!(path = %self.data_file.display(), trades = trades.len(), "loaded fx trades");
        Ok(trades)
    }
}
