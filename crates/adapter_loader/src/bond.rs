//! Bond booking file loader.
//!
//! File layout, one header row then one trade per row:
//!
//! ```text
//! Type,TradeDate,Instrument,Counterparty,Notional,Rate,TradeId
//! GovBond,2024-01-15,UKT 4.25 2032,BankA,1000000,0.0425,B001
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use pricer_core::traits::TradeSource;
use pricer_core::types::{Trade, TradeDataError};
use tracing::debug;

use crate::parse::{io_error, parse_date, parse_number, require_fields, require_path};

const FIELD_COUNT: usize = 7;

/// Loads bond trades from a comma-separated file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BondTradeLoader {
    data_file: PathBuf,
}

impl BondTradeLoader {
    /// Creates a loader for `data_file`.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Path of the bond file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Points the loader at another file.
    pub fn set_data_file(&mut self, data_file: impl Into<PathBuf>) {
        self.data_file = data_file.into();
    }

    /// Parses bond trades from any reader.
    ///
    /// The first row is a header and is skipped. Fields are trimmed; extra
    /// trailing fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first malformed row as a line-numbered [`TradeDataError`].
    pub fn read_trades<R: Read>(reader: R) -> Result<Vec<Trade>, TradeDataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut trades = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| TradeDataError::InvalidLine {
                line: err.position().map_or(0, |p| p.line() as usize),
                reason: err.to_string(),
            })?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            trades.push(trade_from_record(line, &record)?);
        }
        Ok(trades)
    }
}

fn trade_from_record(line: usize, record: &StringRecord) -> Result<Trade, TradeDataError> {
    require_fields(line, record.len(), FIELD_COUNT)?;
    let field = |index: usize| record.get(index).unwrap_or_default();

    Trade::builder(field(6), field(0))
        .trade_date(parse_date(line, field(1))?)
        .instrument(field(2))
        .counterparty(field(3))
        .notional(parse_number(line, "Notional", field(4))?)
        .rate(parse_number(line, "Rate", field(5))?)
        .build()
        .map_err(|err| TradeDataError::InvalidLine {
            line,
            reason: err.to_string(),
        })
}

impl TradeSource for BondTradeLoader {
    fn name(&self) -> &str {
        "bond trades"
    }

    fn load_trades(&self) -> Result<Vec<Trade>, TradeDataError> {
        require_path(&self.data_file)?;
        let file = File::open(&self.data_file).map_err(|err| io_error(&self.data_file, err))?;
        let trades = Self::read_trades(file)?;
        debug!(path = %self.data_file.display(), trades = trades.len(), "loaded bond trades");
        Ok(trades)
    }
}
