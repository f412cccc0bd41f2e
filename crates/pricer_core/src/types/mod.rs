//! Core trade and configuration types.
//!
//! This module provides:
//! - `ids`: Strongly-typed trade identifier
//! - `trade`: The immutable [`Trade`] record and its builder
//! - `registry_entry`: Engine configuration records consumed by registry builders
//! - `error`: The run-level and per-trade error taxonomy
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod ids;
pub mod registry_entry;
pub mod trade;

pub use error::{ConfigurationError, PricingError, TradeDataError};
pub use ids::TradeId;
pub use registry_entry::EngineRegistryEntry;
pub use trade::{trade_types, Trade, TradeBuilder};
