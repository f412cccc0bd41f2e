//! Capabilities consumed by pricing dispatchers.
//!
//! This module defines the three seams between the dispatch engine and its
//! collaborators:
//! - [`PricingEngine`]: prices one trade and reports the outcome to a sink
//! - [`ResultSink`]: thread-safe receiver of per-trade values and errors
//! - [`TradeSource`]: produces a batch of trades from an external store

pub mod pricing_engine;
pub mod result_sink;
pub mod trade_source;

pub use pricing_engine::PricingEngine;
pub use result_sink::ResultSink;
pub use trade_source::TradeSource;
