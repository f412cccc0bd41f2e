//! Per-trade pricing outcomes.
//!
//! - [`ScalarResult`]: merged value/error view for one trade
//! - [`ScalarResults`]: the thread-safe [`ResultSink`](crate::traits::ResultSink)
//!   implementation collecting outcomes for a whole run

mod scalar_result;
mod scalar_results;

pub use scalar_result::ScalarResult;
pub use scalar_results::{Entries, ScalarResults};
