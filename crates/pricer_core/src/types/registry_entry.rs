//! Engine registry configuration records.

use serde::{Deserialize, Serialize};

/// One `(trade type, engine type name)` pair from the engine configuration.
///
/// The engine type name may be namespace-qualified
/// (`Acme.Pricers.GovBondPricingEngine`, `pricers::FxPricingEngine`);
/// resolution strips the qualification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRegistryEntry {
    /// Trade type routed to the engine.
    pub trade_type: String,
    /// Configured engine type name.
    pub engine_type_name: String,
}

impl EngineRegistryEntry {
    /// Creates a new entry.
    pub fn new(trade_type: impl Into<String>, engine_type_name: impl Into<String>) -> Self {
        Self {
            trade_type: trade_type.into(),
            engine_type_name: engine_type_name.into(),
        }
    }
}
