//! Price command implementation
//!
//! Loads the engine configuration and both trade files, prices them with the
//! configured strategy and prints every result.

use std::io;

use adapter_loader::{BondTradeLoader, FxTradeLoader};
use infra_config::PricingConfigLoader;
use pricer_core::results::ScalarResults;
use pricer_core::traits::TradeSource;
use pricer_core::types::Trade;
use pricer_risk::dispatch::{ParallelPricer, Pricer, SerialPricer, StreamingPricer};
use tracing::info;

use crate::config::{RiskConfig, Strategy};
use crate::report::{self, OutputFormat};
use crate::{CliError, Result};

/// Run the price command
///
/// Results gathered before a failure are still printed.
pub fn run(config: &RiskConfig, format: OutputFormat) -> Result<()> {
    info!("Starting pricing...");
    info!("  Pricing config: {}", config.pricing_config.display());
    info!("  Bond trades: {}", config.bond_trades.display());
    info!("  FX trades: {}", config.fx_trades.display());
    info!("  Strategy: {:?}", config.strategy);
    info!("  Output format: {:?}", format);

    let results = ScalarResults::new();
    let outcome = price_portfolio(config, &results);

    report::write_results(&results, format, io::stdout().lock())?;
    info!(entries = results.len(), "Pricing complete");
    outcome
}

/// Prices the configured trade files into `results`.
pub fn price_portfolio(config: &RiskConfig, results: &ScalarResults) -> Result<()> {
    let entries = PricingConfigLoader::new(&config.pricing_config)
        .load()?
        .to_registry_entries();
    let sources = trade_sources(config);

    match config.strategy {
        Strategy::Serial => {
            let batches = load_batches(&sources)?;
            SerialPricer::new(entries).price(&batches, results)?;
        }
        Strategy::Parallel => {
            let batches = load_batches(&sources)?;
            let pricer = match config.max_threads {
                Some(max_threads) => ParallelPricer::new(entries).with_max_threads(max_threads),
                None => ParallelPricer::new(entries),
            };
            pricer.price(&batches, results)?;
        }
        Strategy::Streaming => {
            StreamingPricer::new(entries).load_and_price(sources, results)?;
        }
    }
    Ok(())
}

fn trade_sources(config: &RiskConfig) -> Vec<Box<dyn TradeSource>> {
    vec![
        Box::new(BondTradeLoader::new(&config.bond_trades)),
        Box::new(FxTradeLoader::new(&config.fx_trades)),
    ]
}

fn load_batches(sources: &[Box<dyn TradeSource>]) -> Result<Vec<Vec<Trade>>> {
    sources
        .iter()
        .map(|source| source.load_trades().map_err(CliError::from))
        .collect()
}
