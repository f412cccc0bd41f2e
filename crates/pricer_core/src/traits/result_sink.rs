//! Result sink capability.

/// Receiver of per-trade pricing outcomes.
///
/// Implementations must be safe to call from many threads at once without
/// external synchronisation. Values and errors are tracked independently:
/// writing one kind never clears the other, and a repeated write of the same
/// kind for a trade replaces the earlier one.
pub trait ResultSink: Send + Sync {
    /// Records a successful price for `trade_id`.
    fn add_value(&self, trade_id: &str, value: f64);

    /// Records a pricing failure for `trade_id`.
    fn add_error(&self, trade_id: &str, message: &str);
}
