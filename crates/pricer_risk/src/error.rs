//! Dispatch error types.
//!
//! Per-trade routing and pricing failures never surface here: they are
//! recorded in the result sink. A [`DispatchError`] means a whole run (or a
//! whole source's contribution to it) could not be carried out.

use pricer_core::types::{ConfigurationError, TradeDataError, TradeId};
use thiserror::Error;

/// An engine panicked instead of reporting through the result sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pricing engine {engine} faulted on trade {trade_id}: {message}")]
pub struct EngineFault {
    /// Trade being priced when the fault occurred.
    pub trade_id: TradeId,
    /// Name of the faulting engine.
    pub engine: String,
    /// Panic payload text.
    pub message: String,
}

/// Run-level dispatch failures.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The engine registry could not be built.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A trade source failed to load.
    #[error("Trade data error: {0}")]
    TradeData(#[from] TradeDataError),

    /// A pricing engine faulted.
    #[error(transparent)]
    EngineFault(#[from] EngineFault),

    /// A bounded worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_fault_display() {
        let fault = EngineFault {
            trade_id: TradeId::new("T7"),
            engine: "GovBondPricingEngine".to_string(),
            message: "index out of bounds".to_string(),
        };
        assert_eq!(
            fault.to_string(),
            "pricing engine GovBondPricingEngine faulted on trade T7: index out of bounds"
        );

        let err = DispatchError::from(fault);
        assert!(err.to_string().starts_with("pricing engine"));
    }

    #[test]
    fn test_configuration_error_conversion() {
        let err: DispatchError = ConfigurationError::UnknownEngineType("X".to_string()).into();
        assert_eq!(err.to_string(), "Configuration error: unknown pricing engine type: X");
    }

    #[test]
    fn test_trade_data_error_conversion() {
        let err: DispatchError = TradeDataError::MissingDataFile.into();
        assert!(matches!(err, DispatchError::TradeData(_)));
    }
}
