//! # Adapter Loader: Trade File Sources
//!
//! Trade sources reading the two upstream booking feeds:
//!
//! - [`BondTradeLoader`]: comma-separated bond file with one header row
//! - [`FxTradeLoader`]: `¬`-separated FX file with metadata, header and `END` footer rows
//!
//! Both implement [`TradeSource`](pricer_core::traits::TradeSource) and load
//! all-or-nothing: any malformed row fails the whole file with a
//! line-numbered [`TradeDataError`](pricer_core::types::TradeDataError).
//!
//! ```no_run
//! use adapter_loader::{BondTradeLoader, FxTradeLoader};
//! use pricer_core::traits::TradeSource;
//!
//! let sources: Vec<Box<dyn TradeSource>> = vec![
//!     Box::new(BondTradeLoader::new("data/BondTrades.dat")),
//!     Box::new(FxTradeLoader::new("data/FxTrades.dat")),
//! ];
//!
//! for source in &sources {
//!     let trades = source.load_trades()?;
//!     println!("{}: {} trades", source.name(), trades.len());
//! }
//! # Ok::<(), pricer_core::types::TradeDataError>(())
//! ```

#![warn(missing_docs)]

pub mod bond;
pub mod fx;
mod parse;

pub use bond::BondTradeLoader;
pub use fx::FxTradeLoader;
