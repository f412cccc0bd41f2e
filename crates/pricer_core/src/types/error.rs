//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigurationError`: Errors from engine configuration and registry resolution
//! - `TradeDataError`: Errors from loading or constructing trades
//! - `PricingError`: Errors raised inside a pricing engine for a single trade
//!
//! Configuration and trade data errors are run-level failures: they stop a
//! pricing run before any trade of the affected scope is priced. Pricing
//! errors are per-trade and end up as error text in the result sink.

use thiserror::Error;

/// Errors from pricing engine configuration.
///
/// # Examples
/// ```
/// use pricer_core::types::ConfigurationError;
///
/// let err = ConfigurationError::UnknownEngineType("WeirdEngine".to_string());
/// assert_eq!(err.to_string(), "unknown pricing engine type: WeirdEngine");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The configured engine type name does not resolve to a known engine.
    #[error("unknown pricing engine type: {0}")]
    UnknownEngineType(String),

    /// The configuration file could not be read.
    #[error("cannot read pricing configuration '{path}': {message}")]
    Io {
        /// Path of the configuration file
        path: String,
        /// Underlying I/O failure
        message: String,
    },

    /// No configuration file was provided.
    #[error("pricing configuration file not set")]
    MissingConfigFile,

    /// An element lacks a required attribute.
    #[error("{element} element missing attribute: {attribute}")]
    MissingAttribute {
        /// Element name
        element: String,
        /// Attribute name
        attribute: String,
    },

    /// The configuration document is malformed.
    #[error("malformed pricing configuration: {0}")]
    Malformed(String),
}

/// Errors from loading or constructing trades.
///
/// A trade data error aborts the load of the whole source that raised it;
/// no partial batch is ever handed to a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeDataError {
    /// No data file was configured for the source.
    #[error("trade data file not set")]
    MissingDataFile,

    /// The data file could not be read.
    #[error("cannot read trade data '{path}': {message}")]
    Io {
        /// Path of the data file
        path: String,
        /// Underlying I/O failure
        message: String,
    },

    /// A record has the wrong shape.
    #[error("invalid trade record at line {line}: {reason}")]
    InvalidLine {
        /// 1-based line number in the source
        line: usize,
        /// What was wrong with the record
        reason: String,
    },

    /// A numeric field failed to parse.
    #[error("invalid {field} '{value}' at line {line}")]
    InvalidNumber {
        /// 1-based line number in the source
        line: usize,
        /// Field name
        field: &'static str,
        /// Raw field text
        value: String,
    },

    /// A date field failed to parse.
    #[error("invalid date '{value}' at line {line}, expected YYYY-MM-DD")]
    InvalidDate {
        /// 1-based line number in the source
        line: usize,
        /// Raw field text
        value: String,
    },

    /// A trade was built without an identifier.
    #[error("trade id must not be empty")]
    EmptyTradeId,

    /// A trade was built without a type discriminator.
    #[error("trade type must not be empty (trade {0})")]
    EmptyTradeType(String),
}

/// Errors raised by a pricing engine for one trade.
///
/// Engines record these into the result sink via their `Display` text
/// rather than returning them to the dispatcher.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("notional is NaN".to_string());
/// assert_eq!(err.to_string(), "Invalid input: notional is NaN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The engine does not price this trade type.
    #[error("Trade type not supported by this pricing engine: {0}")]
    UnsupportedTradeType(String),

    /// Trade fields are outside the engine's domain.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
