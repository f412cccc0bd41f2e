//! # Pricer Risk (L3: Dispatch)
//!
//! Routes trades to pricing engines and runs whole portfolios through them.
//!
//! This crate provides:
//! - The closed engine catalog and the per-run engine registry
//! - Serial, parallel and streaming dispatch strategies
//! - Run-level dispatch errors, including caught engine faults
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  registry/  - EngineCatalog,            │
//! │               EngineRegistry            │
//! │  dispatch/  - serial, parallel,         │
//! │               streaming                 │
//! │  error/     - DispatchError             │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  GovBond, CorpBond and FX engines       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::results::ScalarResults;
//! use pricer_core::types::{EngineRegistryEntry, Trade};
//! use pricer_risk::dispatch::{ParallelPricer, Pricer};
//!
//! let pricer = ParallelPricer::new(vec![
//!     EngineRegistryEntry::new("GovBond", "Pricers.GovBondPricingEngine"),
//! ]);
//!
//! let batches = vec![vec![
//!     Trade::builder("G1", "GovBond").notional(1_000.0).rate(0.05).build().unwrap(),
//!     Trade::builder("S1", "Swap").build().unwrap(),
//! ]];
//!
//! let results = ScalarResults::new();
//! pricer.price(&batches, &results).unwrap();
//!
//! assert_eq!(results.lookup("G1").unwrap().value, Some(50.0));
//! assert!(results.lookup("S1").unwrap().error.is_some());
//! ```

#![warn(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod registry;

pub use dispatch::{
    price_parallel, price_serial, price_streaming, ParallelPricer, Pricer, SerialPricer, StreamingPricer,
    NO_ENGINE_MESSAGE,
};
pub use error::{DispatchError, EngineFault};
pub use registry::{EngineCatalog, EngineRegistry, EngineRegistryBuilder};
