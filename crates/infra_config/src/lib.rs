//! # Infra Config: Pricing Engine Configuration
//!
//! Reads the pricing engine configuration document:
//!
//! ```xml
//! <PricingEngines>
//!   <Engine tradeType="GovBond" assembly="Pricers" pricingEngine="Pricers.GovBondPricingEngine" />
//!   <Engine tradeType="FxSpot" assembly="Pricers" pricingEngine="Pricers.FxPricingEngine" />
//! </PricingEngines>
//! ```
//!
//! into an ordered [`PricingEngineConfig`]. File order is preserved so that
//! a later entry for the same trade type overrides an earlier one when the
//! registry is built.
//!
//! ```
//! use infra_config::PricingConfigLoader;
//!
//! let config = PricingConfigLoader::parse_xml(
//!     r#"<PricingEngines>
//!          <Engine tradeType="GovBond" assembly="Pricers" pricingEngine="Pricers.GovBondPricingEngine"/>
//!        </PricingEngines>"#,
//! )
//! .unwrap();
//!
//! let entries = config.to_registry_entries();
//! assert_eq!(entries[0].trade_type, "GovBond");
//! assert_eq!(entries[0].engine_type_name, "Pricers.GovBondPricingEngine");
//! ```

#![warn(missing_docs)]

pub mod loader;
pub mod pricing;

pub use loader::PricingConfigLoader;
pub use pricing::{PricingEngineConfig, PricingEngineConfigItem};
