//! Merged outcome for a single trade.

use serde::Serialize;

/// Value and/or error recorded for one trade.
///
/// At least one of `value` and `error` is present for any result produced
/// by [`ScalarResults`](super::ScalarResults).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarResult {
    /// Trade identifier.
    pub trade_id: String,
    /// Last recorded price, if any.
    pub value: Option<f64>,
    /// Last recorded error, if any.
    pub error: Option<String>,
}

impl ScalarResult {
    /// Creates a result from its parts.
    pub fn new(trade_id: impl Into<String>, value: Option<f64>, error: Option<String>) -> Self {
        Self {
            trade_id: trade_id.into(),
            value,
            error,
        }
    }

    /// Returns true if a value was recorded and no error.
    #[inline]
    pub fn is_priced(&self) -> bool {
        self.value.is_some() && self.error.is_none()
    }
}
