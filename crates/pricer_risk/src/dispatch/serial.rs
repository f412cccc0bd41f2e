//! Single-threaded dispatch in submission order.

use std::time::Instant;

use pricer_core::traits::ResultSink;
use pricer_core::types::{EngineRegistryEntry, Trade};
use tracing::info;

use super::{price_trade, Pricer};
use crate::error::DispatchError;
use crate::registry::{EngineCatalog, EngineRegistry, EngineRegistryBuilder};

/// Prices every trade of every batch in order on the calling thread.
///
/// Sink writes happen in submission order: batch order, then position
/// within the batch. The run stops at the first engine fault.
///
/// # Errors
///
/// Returns [`DispatchError::EngineFault`] if an engine panics.
pub fn price_serial(
    trade_batches: &[Vec<Trade>],
    registry: &EngineRegistry,
    sink: &dyn ResultSink,
) -> Result<(), DispatchError> {
    let trade_count: usize = trade_batches.iter().map(Vec::len).sum();
    let start = Instant::now();
    info!(batches = trade_batches.len(), trades = trade_count, "serial pricing started");

    for trade in trade_batches.iter().flatten() {
        price_trade(trade, registry, sink)?;
    }

    info!(
        trades = trade_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "serial pricing finished"
    );
    Ok(())
}

/// Serial strategy owning its engine configuration.
#[derive(Clone, Debug)]
pub struct SerialPricer {
    builder: EngineRegistryBuilder,
}

impl SerialPricer {
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
}

impl Pricer for SerialPricer {
    fn price(&self, trade_batches: &[Vec<Trade>], sink: &dyn ResultSink) -> Result<(), DispatchError> {
        let registry = self.builder.build()?;
        price_serial(trade_batches, &registry, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::super::NO_ENGINE_MESSAGE;
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::results::ScalarResults;
    use pricer_core::types::ConfigurationError;

    fn standard_entries() -> Vec<EngineRegistryEntry> {
        vec![
            EngineRegistryEntry::new("GovBond", "GovBondPricingEngine"),
            EngineRegistryEntry::new("CorpBond", "CorpBondPricingEngine"),
            EngineRegistryEntry::new("FxSpot", "FxPricingEngine"),
        ]
    }

    #[test]
    fn test_serial_writes_in_submission_order() {
        let registry = EngineRegistry::new()
            .with_engine("A", Box::new(NotionalEngine))
            .with_engine("B", Box::new(NotionalEngine));
        let batches = vec![
            vec![trade("3", "A", 1.0), trade("1", "B", 1.0)],
            vec![trade("2", "Missing", 1.0)],
        ];
        let sink = OrderedSink::default();

        price_serial(&batches, &registry, &sink).unwrap();

        assert_eq!(sink.writes(), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_serial_stops_at_first_fault() {
        let registry = EngineRegistry::new()
            .with_engine("Good", Box::new(NotionalEngine))
            .with_engine("Bad", Box::new(FaultyEngine));
        let batches = vec![vec![
            trade("T1", "Good", 1.0),
            trade("T2", "Bad", 1.0),
            trade("T3", "Good", 1.0),
        ]];
        let results = ScalarResults::new();

        let err = price_serial(&batches, &registry, &results).unwrap_err();

        assert!(matches!(err, DispatchError::EngineFault(ref f) if f.trade_id.as_str() == "T2"));
        assert!(results.lookup("T1").unwrap().is_priced());
        assert!(results.lookup("T2").unwrap().error.is_some());
        assert!(!results.contains_trade("T3"));
    }

    #[test]
    fn test_serial_pricer_mixed_portfolio() {
        let pricer = SerialPricer::new(standard_entries());
        let batches = vec![
            vec![
                trade("G1", "GovBond", 1_000_000.0),
                Trade::builder("C1", "CorpBond")
                    .notional(1_000_000.0)
                    .rate(0.05)
                    .build()
                    .unwrap(),
            ],
            vec![trade("X1", "FxFwd", 500.0)],
        ];
        let results = ScalarResults::new();

        pricer.price(&batches, &results).unwrap();

        assert_eq!(results.len(), 3);
        assert_relative_eq!(results.lookup("C1").unwrap().value.unwrap(), 49_000.0, epsilon = 1e-9);
        assert_eq!(results.lookup("G1").unwrap().value, Some(0.0));
        assert_eq!(results.lookup("X1").unwrap().error.as_deref(), Some(NO_ENGINE_MESSAGE));
    }

    #[test]
    fn test_serial_pricer_unknown_engine_prices_nothing() {
        let pricer = SerialPricer::new(vec![EngineRegistryEntry::new("GovBond", "Acme.NoSuchEngine")]);
        let batches = vec![vec![trade("G1", "GovBond", 1.0)]];
        let results = ScalarResults::new();

        let err = pricer.price(&batches, &results).unwrap_err();

        assert!(matches!(
            err,
            DispatchError::Configuration(ConfigurationError::UnknownEngineType(ref name))
                if name == "Acme.NoSuchEngine"
        ));
        assert!(results.is_empty());
    }

    #[test]
    fn test_serial_empty_batches() {
        let registry = EngineRegistry::new();
        let results = ScalarResults::new();

        price_serial(&[], &registry, &results).unwrap();
        price_serial(&[Vec::new(), Vec::new()], &registry, &results).unwrap();

        assert!(results.is_empty());
    }
}
