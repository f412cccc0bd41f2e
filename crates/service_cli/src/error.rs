//! Error types for the risk-pricer CLI.

use pricer_core::types::{ConfigurationError, TradeDataError};
use pricer_risk::DispatchError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Application configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Pricing engine configuration error
    #[error("Pricing configuration error: {0}")]
    PricingConfig(#[from] ConfigurationError),

    /// Trade file error
    #[error("Trade data error: {0}")]
    TradeData(#[from] TradeDataError),

    /// Pricing run failed
    #[error("Pricing failed: {0}")]
    Dispatch(#[from] DispatchError),

    /// Result output failed
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an output error
    pub fn output(msg: impl ToString) -> Self {
        Self::Output(msg.to_string())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
