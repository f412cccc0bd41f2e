//! FX pricing engine.

use pricer_core::traits::{PricingEngine, ResultSink};
use pricer_core::types::{trade_types, Trade};

use super::{report, validate};

/// Prices FX spots and forwards as the counter-currency amount
/// (`notional × rate`).
#[derive(Clone, Copy, Debug, Default)]
pub struct FxPricingEngine;

impl FxPricingEngine {
    /// Trade types priced by this engine.
    pub const SUPPORTED: &'static [&'static str] = &[trade_types::FX_SPOT, trade_types::FX_FWD];

    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine for FxPricingEngine {
    fn name(&self) -> &str {
        "FxPricingEngine"
    }

    fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
        let outcome = validate(trade, Self::SUPPORTED).map(|()| trade.notional() * trade.rate());
        report(trade, sink, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::test_support::RecordingSink;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_prices_spot_and_forward_once_each() {
        let spot = Trade::builder("FX1", "FxSpot")
            .instrument("EURUSD")
            .notional(1_000.0)
            .rate(1.1)
            .build()
            .unwrap();
        let fwd = Trade::builder("FX2", "FxFwd")
            .instrument("GBPJPY")
            .notional(2_000.0)
            .rate(190.0)
            .value_date(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
            .build()
            .unwrap();
        let sink = RecordingSink::default();

        let engine = FxPricingEngine::new();
        engine.price(&spot, &sink);
        engine.price(&fwd, &sink);

        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "FX1");
        assert_relative_eq!(*calls[0].1.as_ref().unwrap(), 1_100.0);
        assert_eq!(calls[1].0, "FX2");
        assert_relative_eq!(*calls[1].1.as_ref().unwrap(), 380_000.0);
    }

    #[test]
    fn test_rejects_infinite_rate_once() {
        let trade = Trade::builder("FX3", "FxSpot")
            .notional(1.0)
            .rate(f64::INFINITY)
            .build()
            .unwrap();
        let sink = RecordingSink::default();

        FxPricingEngine::new().price(&trade, &sink);

        let calls = sink.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].1.as_ref().unwrap_err().contains("rate"));
    }

    #[test]
    fn test_rejects_bond_once() {
        let trade = Trade::builder("B1", "GovBond").build().unwrap();
        let sink = RecordingSink::default();

        FxPricingEngine::new().price(&trade, &sink);

        assert_eq!(sink.calls().len(), 1);
    }
}
