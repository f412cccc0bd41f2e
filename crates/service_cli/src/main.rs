//! risk-pricer - Command Line Portfolio Pricing
//!
//! Loads bond and FX trades, routes each trade to the pricing engine
//! configured for its type, and prints one result line per trade.
//!
//! # Commands
//!
//! - `risk-pricer price [--strategy serial|parallel|streaming] [--format table|csv|json]`
//! - `risk-pricer check` - Build the engine registry and report the routing table
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! wires the trade loaders, the engine configuration and the dispatch
//! strategies together.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{RiskConfig, Strategy};
use report::OutputFormat;

/// Risk pricer CLI
#[derive(Parser)]
#[command(name = "risk-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./risk-pricer.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pricing engine configuration document
    #[arg(long, global = true)]
    pricing_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the bond and FX trade files
    Price {
        /// Dispatch strategy
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Bond trade file
        #[arg(long)]
        bond_trades: Option<PathBuf>,

        /// FX trade file
        #[arg(long)]
        fx_trades: Option<PathBuf>,

        /// Worker bound for the parallel strategy
        #[arg(long)]
        max_threads: Option<usize>,
    },

    /// Check engine configuration and trade file locations
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = RiskConfig::resolve(cli.config.as_deref())
        .context("loading risk-pricer configuration")?
        .with_env_override();
    if let Some(path) = cli.pricing_config {
        config.pricing_config = path;
    }
    if let Commands::Price {
        strategy,
        bond_trades,
        fx_trades,
        max_threads,
        ..
    } = &cli.command
    {
        if let Some(strategy) = strategy {
            config.strategy = *strategy;
        }
        if let Some(path) = bond_trades {
            config.bond_trades = path.clone();
        }
        if let Some(path) = fx_trades {
            config.fx_trades = path.clone();
        }
        if max_threads.is_some() {
            config.max_threads = *max_threads;
        }
    }
    config.validate()?;

    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { format, .. } => commands::price::run(&config, format)?,
        Commands::Check => commands::check::run(&config, io::stdout().lock())?,
    }
    Ok(())
}
