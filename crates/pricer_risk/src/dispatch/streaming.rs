//! Source-at-a-time dispatch that releases trades as it goes.
//!
//! Trades are owned by the dispatcher from the moment a source hands them
//! over. A source is dropped as soon as it has produced its trades, and each
//! trade is dropped as soon as its engine call returns, so at most one
//! source's unpriced trades are held at any time.

use std::borrow::Borrow;
use std::time::Instant;

use pricer_core::traits::{ResultSink, TradeSource};
use pricer_core::types::{EngineRegistryEntry, Trade};
use tracing::{debug, info};

use super::{price_trade, Pricer};
use crate::error::DispatchError;
use crate::registry::{EngineCatalog, EngineRegistry, EngineRegistryBuilder};

/// Prices trades one by one, dropping each once priced.
///
/// # Errors
///
/// Returns [`DispatchError::EngineFault`] at the first engine panic. Trades
/// not yet priced are dropped unpriced.
pub fn price_each<I, T>(trades: I, registry: &EngineRegistry, sink: &dyn ResultSink) -> Result<usize, DispatchError>
where
    I: IntoIterator<Item = T>,
    T: Borrow<Trade>,
{
    let mut priced = 0;
    for trade in trades {
        price_trade(trade.borrow(), registry, sink)?;
        priced += 1;
    }
    Ok(priced)
}

/// Loads and prices each source in turn.
///
/// Sources are loaded lazily: source `n + 1` is not asked for trades until
/// every trade of source `n` has been priced and released. Results written
/// before a failure stay in the sink.
///
/// # Errors
///
/// Returns [`DispatchError::TradeData`] if a source fails to load, or
/// [`DispatchError::EngineFault`] if an engine panics. Remaining sources are
/// not loaded.
pub fn price_streaming<I, S>(sources: I, registry: &EngineRegistry, sink: &dyn ResultSink) -> Result<(), DispatchError>
where
    I: IntoIterator<Item = S>,
    S: TradeSource,
{
    let start = Instant::now();
    let mut source_count = 0_usize;
    let mut trade_count = 0_usize;
    info!("streaming pricing started");

    for source in sources {
        let source_name = source.name().to_string();
        let trades = source.load_trades()?;
        drop(source);
        debug!(source = %source_name, trades = trades.len(), "trade source loaded");

        trade_count += price_each(trades, registry, sink)?;
        source_count += 1;
    }

    info!(
        sources = source_count,
        trades = trade_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "streaming pricing finished"
    );
    Ok(())
}

/// Streaming strategy owning its engine configuration.
#[derive(Clone, Debug)]
pub struct StreamingPricer {
    builder: EngineRegistryBuilder,
}

impl StreamingPricer {
    /// Creates a pricer over the standard engine catalog.
    pub fn new(entries: Vec<EngineRegistryEntry>) -> Self {
        Self {
            builder: EngineRegistryBuilder::new(entries),
        }
    }

    /// Replaces the catalog engines are resolved from.
    pub fn with_catalog(mut self, catalog: EngineCatalog) -> Self {
        self.builder = self.builder.with_catalog(catalog);
        self
    }

    /// Builds a fresh registry, then loads and prices `sources` in order.
    ///
    /// # Errors
    ///
    /// See [`price_streaming`]. Configuration errors are reported before any
    /// source is loaded.
    pub fn load_and_price<I, S>(&self, sources: I, sink: &dyn ResultSink) -> Result<(), DispatchError>
    where
        I: IntoIterator<Item = S>,
        S: TradeSource,
    {
        let registry = self.builder.build()?;
        price_streaming(sources, &registry, sink)
    }
}

/// Prices caller-owned batches batch by batch.
///
/// The batches are borrowed, so trades are not released as they are priced.
/// Only [`StreamingPricer::load_and_price`] and [`price_streaming`] drop each
/// source after loading and each trade after pricing.
impl Pricer for StreamingPricer {
    fn price(&self, trade_batches: &[Vec<Trade>], sink: &dyn ResultSink) -> Result<(), DispatchError> {
        let registry = self.builder.build()?;
        for batch in trade_batches {
            price_each(batch, &registry, sink)?;
        }
        Ok(())
    }
}
