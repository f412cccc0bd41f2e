//! Pricing engine capability.

use crate::traits::ResultSink;
use crate::types::Trade;

/// A pricing engine for one or more trade types.
///
/// # Contract
///
/// Each call to [`price`](PricingEngine::price) must report exactly one
/// outcome for `trade`: either [`ResultSink::add_value`] or
/// [`ResultSink::add_error`], keyed by the trade's id. Failures that the
/// engine can describe are reported through the sink; a panic is treated by
/// dispatchers as an unrecoverable engine fault.
///
/// Engines are shared across worker threads by the parallel dispatcher, so
/// they must be `Send + Sync` and must not rely on interior state that is
/// unsafe to touch concurrently.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::{PricingEngine, ResultSink};
/// use pricer_core::types::Trade;
///
/// struct ParEngine;
///
/// impl PricingEngine for ParEngine {
///     fn name(&self) -> &str {
///         "ParEngine"
///     }
///
///     fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
///         sink.add_value(trade.trade_id().as_str(), trade.notional());
///     }
/// }
/// ```
pub trait PricingEngine: Send + Sync {
    /// Returns the engine's type name.
    fn name(&self) -> &str;

    /// Prices `trade` and records the outcome in `sink`.
    fn price(&self, trade: &Trade, sink: &dyn ResultSink);
}
