//! Government bond pricing engine.

use pricer_core::traits::{PricingEngine, ResultSink};
use pricer_core::types::{trade_types, Trade};

use super::{report, validate};

/// Prices government bonds as one year of coupon accrual on the notional.
///
/// # Examples
///
/// ```
/// use pricer_core::results::ScalarResults;
/// use pricer_core::traits::PricingEngine;
/// use pricer_core::types::Trade;
/// use pricer_models::GovBondPricingEngine;
///
/// let trade = Trade::builder("G1", "GovBond")
///     .notional(1_000_000.0)
///     .rate(0.04)
///     .build()
///     .unwrap();
/// let results = ScalarResults::new();
/// GovBondPricingEngine::new().price(&trade, &results);
///
/// let value = results.lookup("G1").unwrap().value.unwrap();
/// assert!((value - 40_000.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GovBondPricingEngine;

impl GovBondPricingEngine {
    /// Trade types priced by this engine.
    pub const SUPPORTED: &'static [&'static str] = &[trade_types::GOV_BOND];

    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine for GovBondPricingEngine {
    fn name(&self) -> &str {
        "GovBondPricingEngine"
    }

    fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
        let outcome = validate(trade, Self::SUPPORTED).map(|()| trade.notional() * trade.rate());
        report(trade, sink, outcome);
    }
}
