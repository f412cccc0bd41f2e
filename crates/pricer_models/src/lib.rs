//! # Pricer Models (L2: Pricing Engines)
//!
//! Concrete pricing engines bundled with the risk pricer.
//!
//! This crate provides:
//! - [`GovBondPricingEngine`] for government bonds
//! - [`CorpBondPricingEngine`] for corporate bonds
//! - [`FxPricingEngine`] for FX spots and forwards
//!
//! ## Design Principles
//!
//! - Every engine reports exactly one outcome per trade to the result sink
//! - Engines are stateless apart from immutable parameters, so one instance
//!   serves concurrent pricing tasks
//! - Pricing formulas are intentionally simple; the dispatch engine treats
//!   them as opaque

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engines;

pub use engines::{CorpBondPricingEngine, FxPricingEngine, GovBondPricingEngine};
