//! Trade source capability.

use crate::types::{Trade, TradeDataError};

/// Producer of a batch of trades from an external store.
pub trait TradeSource: Send {
    /// Short description used in logs.
    fn name(&self) -> &str {
        "trade source"
    }

    /// Loads every trade held by the source.
    ///
    /// # Errors
    ///
    /// Returns [`TradeDataError`] if any record is malformed; the source then
    /// contributes no trades at all.
    fn load_trades(&self) -> Result<Vec<Trade>, TradeDataError>;
}

impl<S: TradeSource + ?Sized> TradeSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load_trades(&self) -> Result<Vec<Trade>, TradeDataError> {
        (**self).load_trades()
    }
}
