//! # pricer_core: Trade Model and Pricing Capabilities
//!
//! ## Foundation Role
//!
//! pricer_core is the bottom layer of the risk pricer, providing:
//! - The immutable trade record (`types::trade`) and its identifier (`types::ids`)
//! - Engine configuration records (`types::registry_entry`)
//! - The error taxonomy: `ConfigurationError`, `TradeDataError`, `PricingError` (`types::error`)
//! - Capabilities at the dispatch seams: `PricingEngine`, `ResultSink`, `TradeSource` (`traits`)
//! - The thread-safe result collection `ScalarResults` (`results`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Trade and value dates
//! - thiserror: Error derivation
//! - serde: Serialisation of trades and results
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::results::ScalarResults;
//! use pricer_core::traits::{PricingEngine, ResultSink};
//! use pricer_core::types::Trade;
//!
//! struct NotionalEngine;
//!
//! impl PricingEngine for NotionalEngine {
//!     fn name(&self) -> &str {
//!         "NotionalEngine"
//!     }
//!
//!     fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
//!         sink.add_value(trade.trade_id().as_str(), trade.notional());
//!     }
//! }
//!
//! let trade = Trade::builder("T1", "GovBond").notional(250.0).build().unwrap();
//! let results = ScalarResults::new();
//! NotionalEngine.price(&trade, &results);
//!
//! assert_eq!(results.lookup("T1").unwrap().value, Some(250.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod results;
pub mod traits;
pub mod types;
