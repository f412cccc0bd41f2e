//! Check command implementation
//!
//! Builds the engine registry from the configured document and reports the
//! resolved routing table and the trade files that will be read.

use std::io::Write;

use infra_config::PricingConfigLoader;
use pricer_risk::registry::EngineRegistry;
use tracing::info;

use crate::config::RiskConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &RiskConfig, mut out: W) -> Result<()> {
    info!("Checking configuration...");

    let pricing = PricingConfigLoader::new(&config.pricing_config).load()?;
    let registry = EngineRegistry::build(&pricing.to_registry_entries())?;

    writeln!(out, "Pricing configuration: {}", config.pricing_config.display())?;
    writeln!(
        out,
        "  {} engine entries, {} trade types routed",
        pricing.len(),
        registry.len()
    )?;
    for trade_type in registry.trade_types() {
        if let Some(engine) = registry.get(trade_type) {
            writeln!(out, "  {trade_type} -> {}", engine.name())?;
        }
    }

    for (label, path) in [("Bond trades", &config.bond_trades), ("FX trades", &config.fx_trades)] {
        let status = if path.is_file() { "found" } else { "missing" };
        writeln!(out, "{label}: {} ({status})", path.display())?;
    }
    writeln!(out, "Strategy: {:?}", config.strategy)?;
    if let Some(max_threads) = config.max_threads {
        writeln!(out, "Max threads: {max_threads}")?;
    }

    info!("Configuration OK");
    Ok(())
}
