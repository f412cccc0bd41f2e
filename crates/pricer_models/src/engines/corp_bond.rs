//! Corporate bond pricing engine.

use pricer_core::traits::{PricingEngine, ResultSink};
use pricer_core::types::{trade_types, Trade};

use super::{report, validate};

/// Default haircut applied to corporate coupon accrual for issuer credit risk.
pub const DEFAULT_CREDIT_HAIRCUT: f64 = 0.02;

/// Prices corporate bonds as one year of coupon accrual, reduced by a
/// credit haircut.
#[derive(Clone, Copy, Debug)]
pub struct CorpBondPricingEngine {
    credit_haircut: f64,
}

impl CorpBondPricingEngine {
    /// Trade types priced by this engine.
    pub const SUPPORTED: &'static [&'static str] = &[trade_types::CORP_BOND];

    /// Creates the engine with [`DEFAULT_CREDIT_HAIRCUT`].
    pub fn new() -> Self {
        Self::with_credit_haircut(DEFAULT_CREDIT_HAIRCUT)
    }

    /// Creates the engine with a custom haircut, clamped to `[0, 1]`.
    pub fn with_credit_haircut(credit_haircut: f64) -> Self {
        Self {
            credit_haircut: credit_haircut.clamp(0.0, 1.0),
        }
    }

    /// Returns the credit haircut.
    #[inline]
    pub fn credit_haircut(&self) -> f64 {
        self.credit_haircut
    }
}

impl Default for CorpBondPricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingEngine for CorpBondPricingEngine {
    fn name(&self) -> &str {
        "CorpBondPricingEngine"
    }

    fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
        let outcome = validate(trade, Self::SUPPORTED)
            .map(|()| trade.notional() * trade.rate() * (1.0 - self.credit_haircut));
        report(trade, sink, outcome);
    }
}
