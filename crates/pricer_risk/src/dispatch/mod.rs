//! Pricing dispatch strategies.
//!
//! Three strategies share one routing contract: look up the engine
//! registered for a trade's type, let it write its outcome into the sink,
//! and record [`NO_ENGINE_MESSAGE`] for trades whose type has no engine.
//!
//! | Strategy | Entry point | Execution |
//! |----------|-------------|-----------|
//! | Serial | [`price_serial`], [`SerialPricer`] | one trade at a time, submission order |
//! | Parallel | [`price_parallel`], [`ParallelPricer`] | all trades as concurrent tasks, joined before return |
//! | Streaming | [`price_streaming`], [`StreamingPricer`] | one source at a time, each trade dropped once priced |
//!
//! The `price_*` functions run against a registry the caller built. The
//! `*Pricer` types own the engine configuration and build a fresh registry
//! for every run, dropping it when the run ends.
//!
//! # Engine faults
//!
//! An engine that panics is caught at the trade boundary. The trade gets an
//! error entry describing the fault and the fault is returned as
//! [`DispatchError::EngineFault`]. Serial and streaming runs stop there;
//! parallel runs finish every other task first.

mod parallel;
mod serial;
mod streaming;

pub use parallel::{price_parallel, LockedSink, ParallelConfig, ParallelPricer};
pub use serial::{price_serial, SerialPricer};
pub use streaming::{price_each, price_streaming, StreamingPricer};

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use pricer_core::traits::ResultSink;
use pricer_core::types::Trade;
use tracing::{error, warn};

use crate::error::{DispatchError, EngineFault};
use crate::registry::EngineRegistry;

/// Error recorded for a trade whose type has no registered engine.
pub const NO_ENGINE_MESSAGE: &str = "No Pricing Engines available for this trade type";

/// A batch-oriented pricing strategy.
pub trait Pricer {
    /// Prices every trade in `trade_batches`, writing outcomes into `sink`.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] if the engine registry cannot be built or
    /// an engine faults.
    fn price(&self, trade_batches: &[Vec<Trade>], sink: &dyn ResultSink) -> Result<(), DispatchError>;
}

/// Routes one trade to its engine.
pub(crate) fn price_trade(
    trade: &Trade,
    registry: &EngineRegistry,
    sink: &dyn ResultSink,
) -> Result<(), EngineFault> {
    let trade_id = trade.trade_id();

    let Some(engine) = registry.get(trade.trade_type()) else {
        warn!(%trade_id, trade_type = trade.trade_type(), "no pricing engine for trade type");
        sink.add_error(trade_id.as_str(), NO_ENGINE_MESSAGE);
        return Ok(());
    };

    panic::catch_unwind(AssertUnwindSafe(|| engine.price(trade, sink))).map_err(|payload| {
        let fault = EngineFault {
            trade_id: trade_id.clone(),
            engine: engine.name().to_string(),
            message: panic_message(payload.as_ref()),
        };
        error!(%trade_id, engine = engine.name(), message = %fault.message, "pricing engine fault");
        sink.add_error(trade_id.as_str(), &fault.to_string());
        fault
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
