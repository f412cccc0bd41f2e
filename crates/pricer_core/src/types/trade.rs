//! Trade value type.
//!
//! A [`Trade`] is created by a trade source at load time and never mutated
//! afterwards; pricing engines and dispatchers only read it. Construction goes
//! through [`TradeBuilder`], which enforces a non-empty id and type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::TradeDataError;
use super::ids::TradeId;

/// Well-known trade type discriminators.
pub mod trade_types {
    /// Government bond.
    pub const GOV_BOND: &str = "GovBond";
    /// Corporate bond.
    pub const CORP_BOND: &str = "CorpBond";
    /// FX spot.
    pub const FX_SPOT: &str = "FxSpot";
    /// FX forward.
    pub const FX_FWD: &str = "FxFwd";
}

/// A single trade record with a type discriminator.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Trade, trade_types};
///
/// let trade = Trade::builder("GOV-1", trade_types::GOV_BOND)
///     .instrument("UKT 4.25 2032")
///     .notional(1_000_000.0)
///     .rate(0.0425)
///     .build()
///     .unwrap();
///
/// assert_eq!(trade.trade_id().as_str(), "GOV-1");
/// assert_eq!(trade.trade_type(), "GovBond");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    trade_id: TradeId,
    trade_type: String,
    instrument: String,
    counterparty: String,
    notional: f64,
    rate: f64,
    trade_date: NaiveDate,
    value_date: Option<NaiveDate>,
}

impl Trade {
    /// Starts building a trade with the given id and type.
    pub fn builder(trade_id: impl Into<TradeId>, trade_type: impl Into<String>) -> TradeBuilder {
        TradeBuilder::new(trade_id, trade_type)
    }

    /// Returns the trade identifier.
    #[inline]
    pub fn trade_id(&self) -> &TradeId {
        &self.trade_id
    }

    /// Returns the trade type discriminator used for engine routing.
    #[inline]
    pub fn trade_type(&self) -> &str {
        &self.trade_type
    }

    /// Returns the instrument description.
    #[inline]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Returns the counterparty name.
    #[inline]
    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the trade rate (coupon for bonds, exchange rate for FX).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the trade date.
    #[inline]
    pub fn trade_date(&self) -> NaiveDate {
        self.trade_date
    }

    /// Returns the value date, if any (FX only).
    #[inline]
    pub fn value_date(&self) -> Option<NaiveDate> {
        self.value_date
    }
}

/// Builder for [`Trade`].
///
/// Fields not set default to empty strings, zero amounts and the Unix epoch
/// trade date.
#[derive(Clone, Debug)]
pub struct TradeBuilder {
    trade_id: TradeId,
    trade_type: String,
    instrument: String,
    counterparty: String,
    notional: f64,
    rate: f64,
    trade_date: NaiveDate,
    value_date: Option<NaiveDate>,
}

impl TradeBuilder {
    /// Creates a builder for a trade with the given id and type.
    pub fn new(trade_id: impl Into<TradeId>, trade_type: impl Into<String>) -> Self {
        Self {
            trade_id: trade_id.into(),
            trade_type: trade_type.into(),
            instrument: String::new(),
            counterparty: String::new(),
            notional: 0.0,
            rate: 0.0,
            trade_date: NaiveDate::default(),
            value_date: None,
        }
    }

    /// Sets the instrument description.
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = instrument.into();
        self
    }

    /// Sets the counterparty.
    pub fn counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = counterparty.into();
        self
    }

    /// Sets the notional amount.
    pub fn notional(mut self, notional: f64) -> Self {
        self.notional = notional;
        self
    }

    /// Sets the rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the trade date.
    pub fn trade_date(mut self, date: NaiveDate) -> Self {
        self.trade_date = date;
        self
    }

    /// Sets the value date.
    pub fn value_date(mut self, date: NaiveDate) -> Self {
        self.value_date = Some(date);
        self
    }

    /// Builds and validates the trade.
    ///
    /// # Errors
    ///
    /// Returns [`TradeDataError::EmptyTradeId`] or
    /// [`TradeDataError::EmptyTradeType`] when either discriminating field is blank.
    pub fn build(self) -> Result<Trade, TradeDataError> {
        if self.trade_id.as_str().trim().is_empty() {
            return Err(TradeDataError::EmptyTradeId);
        }
        if self.trade_type.trim().is_empty() {
            return Err(TradeDataError::EmptyTradeType(self.trade_id.to_string()));
        }

        Ok(Trade {
            trade_id: self.trade_id,
            trade_type: self.trade_type,
            instrument: self.instrument,
            counterparty: self.counterparty,
            notional: self.notional,
            rate: self.rate,
            trade_date: self.trade_date,
            value_date: self.value_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_full_fx_trade() {
        let trade_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let value_date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

        let trade = Trade::builder("FX-1", trade_types::FX_FWD)
            .instrument("GBPUSD")
            .counterparty("Bank A")
            .notional(5_000_000.0)
            .rate(1.2675)
            .trade_date(trade_date)
            .value_date(value_date)
            .build()
            .unwrap();

        assert_eq!(trade.instrument(), "GBPUSD");
        assert_eq!(trade.counterparty(), "Bank A");
        assert_relative_eq!(trade.notional(), 5_000_000.0);
        assert_relative_eq!(trade.rate(), 1.2675);
        assert_eq!(trade.trade_date(), trade_date);
        assert_eq!(trade.value_date(), Some(value_date));
    }

    #[test]
    fn test_defaults() {
        let trade = Trade::builder("T1", "GovBond").build().unwrap();
        assert_eq!(trade.trade_date(), NaiveDate::default());
        assert_eq!(trade.value_date(), None);
        assert_eq!(trade.notional(), 0.0);
    }

    #[test]
    fn test_empty_trade_id_rejected() {
        let result = Trade::builder("  ", "GovBond").build();
        assert_eq!(result, Err(TradeDataError::EmptyTradeId));
    }

    #[test]
    fn test_empty_trade_type_rejected() {
        let result = Trade::builder("T1", "").build();
        assert_eq!(result, Err(TradeDataError::EmptyTradeType("T1".to_string())));
    }
}
