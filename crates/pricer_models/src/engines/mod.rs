//! Bond and FX pricing engines.

mod corp_bond;
mod fx;
mod gov_bond;

pub use corp_bond::{CorpBondPricingEngine, DEFAULT_CREDIT_HAIRCUT};
pub use fx::FxPricingEngine;
pub use gov_bond::GovBondPricingEngine;

use pricer_core::traits::ResultSink;
use pricer_core::types::{PricingError, Trade};

/// Rejects trade types the engine does not price and amounts outside its domain.
fn validate(trade: &Trade, supported: &[&str]) -> Result<(), PricingError> {
    if !supported.contains(&trade.trade_type()) {
        return Err(PricingError::UnsupportedTradeType(
            trade.trade_type().to_string(),
        ));
    }
    if !trade.notional().is_finite() || trade.notional() < 0.0 {
        return Err(PricingError::InvalidInput(format!(
            "notional must be a non-negative finite amount, got {}",
            trade.notional()
        )));
    }
    if !trade.rate().is_finite() {
        return Err(PricingError::InvalidInput(format!(
            "rate must be finite, got {}",
            trade.rate()
        )));
    }
    Ok(())
}

/// Writes the single outcome for `trade` into `sink`.
fn report(trade: &Trade, sink: &dyn ResultSink, outcome: Result<f64, PricingError>) {
    let trade_id = trade.trade_id().as_str();
    match outcome {
        Ok(value) => sink.add_value(trade_id, value),
        Err(err) => sink.add_error(trade_id, &err.to_string()),
    }
}
