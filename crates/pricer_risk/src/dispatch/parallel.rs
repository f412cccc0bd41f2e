//! Concurrent dispatch over the Rayon worker pool.
//!
//! Every trade becomes its own task. Sink writes are serialised through a
//! [`LockedSink`] so that a sink never sees two writes at once, whatever its
//! own synchronisation. The gate is held only for the duration of a single
//! write, never across an engine call.

use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use pricer_core::traits::ResultSink;
use pricer_core::types::{EngineRegistryEntry, Trade};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, error, info};

use super::{price_trade, Pricer};
use crate::error::{DispatchError, EngineFault};
use crate::registry::{EngineCatalog, EngineRegistry, EngineRegistryBuilder};

/// Serialises writes to a shared sink.
pub struct LockedSink<'a> {
    inner: &'a dyn ResultSink,
    gate: Mutex<()>,
}

impl<'a> LockedSink<'a> {
    /// Wraps `inner`.
    pub fn new(inner: &'a dyn ResultSink) -> Self {
        Self {
            inner,
            gate: Mutex::new(()),
        }
    }
}

impl ResultSink for LockedSink<'_> {
    fn add_value(&self, trade_id: &str, value: f64) {
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.inner.add_value(trade_id, value);
    }

    fn add_error(&self, trade_id: &str, message: &str) {
        let _guard = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        self.inner.add_error(trade_id, message);
    }
}

/// Prices every trade concurrently and returns once all tasks finished.
///
/// Runs on the current Rayon pool: the global pool, or the pool this call
/// is [`install`](ThreadPool::install)ed into. Write order is unspecified.
///
/// An engine fault does not cancel the other tasks. Once all of them have
/// finished, the fault belonging to the earliest trade in submission order
/// is returned.
///
/// # Errors
///
/// Returns [`DispatchError::EngineFault`] if any engine panics.
pub fn price_parallel(
    trade_batches: &[Vec<Trade>],
    registry: &EngineRegistry,
    sink: &dyn ResultSink,
) -> Result<(), DispatchError> {
    let trades: Vec<&Trade> = trade_batches.iter().flatten().collect();
    let start = Instant::now();
    info!(
        batches = trade_batches.len(),
        trades = trades.len(),
        workers = rayon::current_num_threads(),
        "parallel pricing started"
    );

    let locked = LockedSink::new(sink);
    let faults: Vec<EngineFault> = trades
        .par_iter()
        .filter_map(|trade| price_trade(trade, registry, &locked).err())
        .collect();

    info!(
        trades = trades.len(),
        faults = faults.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parallel pricing finished"
    );

    match faults.into_iter().next() {
        Some(fault) => {
            error!(trade_id = %fault.trade_id, "parallel pricing completed with engine faults");
            Err(fault.into())
        }
        None => Ok(()),
    }
}

/// Worker pool sizing for [`ParallelPricer`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Upper bound on worker threads. `None` uses the global Rayon pool.
    pub max_threads: Option<usize>,
}

impl ParallelConfig {
    /// Creates a configuration bounded to `max_threads` workers.
    pub fn with_max_threads(max_threads: usize) -> Self {
        Self {
            max_threads: Some(max_threads.max(1)),
        }
    }

    /// Builds a dedicated pool when a bound is configured.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ThreadPool`] if Rayon cannot start the pool.
    pub fn build_pool(&self) -> Result<Option<ThreadPool>, DispatchError> {
        let Some(max_threads) = self.max_threads else {
            return Ok(None);
        };
        debug!(max_threads, "building bounded pricing pool");
        ThreadPoolBuilder::new()
            .num_threads(max_threads.max(1))
            .thread_name(|index| format!("pricer-{index}"))
            .build()
            .map(Some)
            .map_err(|e| DispatchError::ThreadPool(e.to_string()))
    }
}

/// Parallel strategy owning its engine configuration.
#[derive(Clone, Debug)]
pub struct ParallelPricer {
    builder: EngineRegistryBuilder,
    config: ParallelConfig,
}

impl ParallelPricer {
    /// Creates a pricer over the standard engine catalog using the global pool.
    pub fn new(entries: Vec<EngineRegistryEntry>) -> Self {
        Self {
            builder: EngineRegistryBuilder::new(entries),
            config: ParallelConfig::default(),
        }
    }

    /// Replaces the catalog engines are resolved from.
    pub fn with_catalog(mut self, catalog: EngineCatalog) -> Self {
        self.builder = self.builder.with_catalog(catalog);
        self
    }

    /// Bounds each run to a dedicated pool of at most `max_threads` workers.
    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.config = ParallelConfig::with_max_threads(max_threads);
        self
    }

    /// Current pool configuration.
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }
}

impl Pricer for ParallelPricer {
    fn price(&self, trade_batches: &[Vec<Trade>], sink: &dyn ResultSink) -> Result<(), DispatchError> {
        let registry = self.builder.build()?;
        match self.config.build_pool()? {
            Some(pool) => pool.install(|| price_parallel(trade_batches, &registry, sink)),
            None => price_parallel(trade_batches, &registry, sink),
        }
    }
}
