//! Engine catalog and per-run engine registry.
//!
//! The catalog is a closed table from engine type name to constructor. A
//! registry is built from configuration entries by resolving each entry's
//! (namespace-stripped) engine type name against the catalog. Any unknown
//! name aborts the whole build, so no partial registry is ever returned.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::EngineRegistryEntry;
//! use pricer_risk::registry::EngineCatalog;
//!
//! let entries = vec![
//!     EngineRegistryEntry::new("GovBond", "Acme.Pricers.GovBondPricingEngine"),
//!     EngineRegistryEntry::new("FxSpot", "pricers::FxPricingEngine"),
//! ];
//!
//! let registry = EngineCatalog::standard().build(&entries).unwrap();
//! assert_eq!(registry.get("GovBond").unwrap().name(), "GovBondPricingEngine");
//! assert!(registry.get("CorpBond").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;

use pricer_core::traits::PricingEngine;
use pricer_core::types::{ConfigurationError, EngineRegistryEntry};
use pricer_models::{CorpBondPricingEngine, FxPricingEngine, GovBondPricingEngine};
use tracing::{debug, info};

/// Constructor for a pricing engine.
pub type EngineFactory = fn() -> Box<dyn PricingEngine>;

fn gov_bond_engine() -> Box<dyn PricingEngine> {
    Box::new(GovBondPricingEngine::new())
}

fn corp_bond_engine() -> Box<dyn PricingEngine> {
    Box::new(CorpBondPricingEngine::new())
}

fn fx_engine() -> Box<dyn PricingEngine> {
    Box::new(FxPricingEngine::new())
}

/// Engines shipped with the pricer, keyed by their type name.
const STANDARD_ENGINES: &[(&str, EngineFactory)] = &[
    ("GovBondPricingEngine", gov_bond_engine),
    ("CorpBondPricingEngine", corp_bond_engine),
    ("FxPricingEngine", fx_engine),
];

/// Strips namespace qualification from a configured engine type name.
///
/// Keeps only the segment after the last `.` and then after the last `:`
/// (which also covers `::`).
///
/// # Examples
///
/// ```
/// use pricer_risk::registry::normalise_engine_type_name;
///
/// assert_eq!(normalise_engine_type_name("A.B.GovBondPricingEngine"), "GovBondPricingEngine");
/// assert_eq!(normalise_engine_type_name("pricers::FxPricingEngine"), "FxPricingEngine");
/// assert_eq!(normalise_engine_type_name("FxPricingEngine"), "FxPricingEngine");
/// ```
pub fn normalise_engine_type_name(engine_type_name: &str) -> &str {
    let name = engine_type_name.trim();
    let name = name.rsplit('.').next().unwrap_or(name);
    name.rsplit(':').next().unwrap_or(name)
}

/// Closed set of engine constructors available to registry builds.
#[derive(Clone, Debug, Default)]
pub struct EngineCatalog {
    factories: HashMap<String, EngineFactory>,
}

impl EngineCatalog {
    /// Creates a catalog with no engines.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a catalog with the bundled bond and FX engines.
    pub fn standard() -> Self {
        STANDARD_ENGINES
            .iter()
            .fold(Self::empty(), |catalog, &(name, factory)| {
                catalog.with_engine(name, factory)
            })
    }

    /// Adds (or replaces) a named engine constructor.
    pub fn with_engine(mut self, name: impl Into<String>, factory: EngineFactory) -> Self {
        self.factories.insert(name.into(), factory);
        self
    }

    /// Returns true if `engine_type_name` resolves in this catalog.
    pub fn contains(&self, engine_type_name: &str) -> bool {
        self.factories
            .contains_key(normalise_engine_type_name(engine_type_name))
    }

    /// Engine type names in ascending order.
    pub fn engine_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Constructs the engine named by `engine_type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownEngineType`] carrying the
    /// configured name if it does not resolve.
    pub fn resolve(&self, engine_type_name: &str) -> Result<Box<dyn PricingEngine>, ConfigurationError> {
        self.factories
            .get(normalise_engine_type_name(engine_type_name))
            .map(|factory| factory())
            .ok_or_else(|| ConfigurationError::UnknownEngineType(engine_type_name.to_string()))
    }

    /// Builds a registry from configuration entries.
    ///
    /// Entries are applied in order; when a trade type appears more than
    /// once, the last entry wins.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose engine type is unknown. Engines
    /// already constructed for earlier entries are dropped.
    pub fn build(&self, entries: &[EngineRegistryEntry]) -> Result<EngineRegistry, ConfigurationError> {
        let mut engines: HashMap<String, Box<dyn PricingEngine>> = HashMap::with_capacity(entries.len());

        for entry in entries {
            let engine = self.resolve(&entry.engine_type_name)?;
            debug!(
                trade_type = %entry.trade_type,
                engine = engine.name(),
                "registered pricing engine"
            );
            if let Some(previous) = engines.insert(entry.trade_type.clone(), engine) {
                debug!(
                    trade_type = %entry.trade_type,
                    replaced = previous.name(),
                    "later configuration entry overrides engine"
                );
            }
        }

        info!(trade_types = engines.len(), "pricing engine registry built");
        Ok(EngineRegistry { engines })
    }
}

/// Resolved trade type → engine mapping for one pricing run.
///
/// The registry exclusively owns its engines and releases them when it is
/// dropped. It offers no mutation once built, so it can be shared by
/// reference across concurrent pricing tasks.
#[derive(Default)]
pub struct EngineRegistry {
    engines: HashMap<String, Box<dyn PricingEngine>>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from configuration entries using the standard catalog.
    ///
    /// # Errors
    ///
    /// See [`EngineCatalog::build`].
    pub fn build(entries: &[EngineRegistryEntry]) -> Result<Self, ConfigurationError> {
        EngineCatalog::standard().build(entries)
    }

    /// Registers `engine` for `trade_type`, replacing any earlier engine.
    pub fn with_engine(mut self, trade_type: impl Into<String>, engine: Box<dyn PricingEngine>) -> Self {
        self.engines.insert(trade_type.into(), engine);
        self
    }

    /// Returns the engine registered for `trade_type`.
    pub fn get(&self, trade_type: &str) -> Option<&dyn PricingEngine> {
        self.engines.get(trade_type).map(Box::as_ref)
    }

    /// Number of registered trade types.
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Returns true if no trade type is registered.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Registered trade types in ascending order.
    pub fn trade_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.trade_types()
                    .into_iter()
                    .filter_map(|t| self.get(t).map(|engine| (t, engine.name()))),
            )
            .finish()
    }
}

impl Drop for EngineRegistry {
    fn drop(&mut self) {
        if !self.engines.is_empty() {
            debug!(engines = self.engines.len(), "releasing pricing engine registry");
        }
    }
}

/// Engine configuration plus the catalog it resolves against.
///
/// Pricers hold a builder rather than a registry so that every run starts
/// from a freshly constructed set of engines.
#[derive(Clone, Debug)]
pub struct EngineRegistryBuilder {
    catalog: EngineCatalog,
    entries: Vec<EngineRegistryEntry>,
}

impl EngineRegistryBuilder {
    /// Creates a builder over `entries` using the standard catalog.
    pub fn new(entries: Vec<EngineRegistryEntry>) -> Self {
        Self {
            catalog: EngineCatalog::standard(),
            entries,
        }
    }

    /// Replaces the catalog used for resolution.
    pub fn with_catalog(mut self, catalog: EngineCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Configuration entries in file order.
    pub fn entries(&self) -> &[EngineRegistryEntry] {
        &self.entries
    }

    /// Builds a fresh registry.
    ///
    /// # Errors
    ///
    /// See [`EngineCatalog::build`].
    pub fn build(&self) -> Result<EngineRegistry, ConfigurationError> {
        self.catalog.build(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::traits::ResultSink;
    use pricer_core::types::Trade;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct NullEngine;

    impl PricingEngine for NullEngine {
        fn name(&self) -> &str {
            "NullEngine"
        }

        fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
            sink.add_value(trade.trade_id().as_str(), 0.0);
        }
    }

    fn null_engine() -> Box<dyn PricingEngine> {
        Box::new(NullEngine)
    }

    #[test]
    fn test_normalise_strips_dotted_namespace() {
        assert_eq!(
            normalise_engine_type_name("HmxLabs.TechTest.Pricers.GovBondPricingEngine"),
            "GovBondPricingEngine"
        );
    }

    #[test]
    fn test_normalise_strips_colon_namespaces() {
        assert_eq!(normalise_engine_type_name("a::b::CorpBondPricingEngine"), "CorpBondPricingEngine");
        assert_eq!(normalise_engine_type_name("pkg:FxPricingEngine"), "FxPricingEngine");
        assert_eq!(normalise_engine_type_name("x.y::FxPricingEngine"), "FxPricingEngine");
    }

    #[test]
    fn test_normalise_trims_whitespace() {
        assert_eq!(normalise_engine_type_name("  FxPricingEngine \n"), "FxPricingEngine");
    }

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = EngineCatalog::standard();
        assert_eq!(
            catalog.engine_names(),
            vec!["CorpBondPricingEngine", "FxPricingEngine", "GovBondPricingEngine"]
        );
        assert!(catalog.contains("Some.Namespace.FxPricingEngine"));
        assert!(!catalog.contains("WeirdEngine"));
    }

    #[test]
    fn test_build_routes_each_trade_type() {
        let entries = vec![
            EngineRegistryEntry::new("GovBond", "GovBondPricingEngine"),
            EngineRegistryEntry::new("CorpBond", "Pricers.CorpBondPricingEngine"),
            EngineRegistryEntry::new("FxSpot", "FxPricingEngine"),
            EngineRegistryEntry::new("FxFwd", "FxPricingEngine"),
        ];

        let registry = EngineRegistry::build(&entries).unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get("CorpBond").unwrap().name(), "CorpBondPricingEngine");
        assert_eq!(registry.get("FxFwd").unwrap().name(), "FxPricingEngine");
        assert_eq!(registry.trade_types(), vec!["CorpBond", "FxFwd", "FxSpot", "GovBond"]);
    }

    #[test]
    fn test_duplicate_trade_type_last_entry_wins() {
        let entries = vec![
            EngineRegistryEntry::new("Bond", "GovBondPricingEngine"),
            EngineRegistryEntry::new("Bond", "CorpBondPricingEngine"),
        ];

        let registry = EngineRegistry::build(&entries).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Bond").unwrap().name(), "CorpBondPricingEngine");
    }

    #[test]
    fn test_unknown_engine_aborts_build() {
        let entries = vec![
            EngineRegistryEntry::new("GovBond", "GovBondPricingEngine"),
            EngineRegistryEntry::new("Weird", "Namespace.WeirdEngine"),
            EngineRegistryEntry::new("FxSpot", "FxPricingEngine"),
        ];

        let err = EngineRegistry::build(&entries).unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::UnknownEngineType("Namespace.WeirdEngine".to_string())
        );
        assert_eq!(err.to_string(), "unknown pricing engine type: Namespace.WeirdEngine");
    }

    #[test]
    fn test_empty_configuration_builds_empty_registry() {
        let registry = EngineRegistry::build(&[]).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_extended_catalog_resolves_custom_engine() {
        let catalog = EngineCatalog::empty().with_engine("NullEngine", null_engine);
        let registry = catalog
            .build(&[EngineRegistryEntry::new("Swap", "my.NullEngine")])
            .unwrap();

        assert_eq!(registry.get("Swap").unwrap().name(), "NullEngine");
        assert!(EngineCatalog::empty().resolve("NullEngine").is_err());
    }

    static COUNTED_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    fn counted_engine() -> Box<dyn PricingEngine> {
        COUNTED_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Box::new(NullEngine)
    }

    #[test]
    fn test_builder_constructs_fresh_engines_per_build() {
        let builder = EngineRegistryBuilder::new(vec![EngineRegistryEntry::new(
            "Swap",
            "CountedEngine",
        )])
        .with_catalog(EngineCatalog::empty().with_engine("CountedEngine", counted_engine));

        let before = COUNTED_CONSTRUCTIONS.load(Ordering::SeqCst);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(COUNTED_CONSTRUCTIONS.load(Ordering::SeqCst) - before, 2);
        assert_eq!(first.trade_types(), second.trade_types());
        assert_eq!(builder.entries().len(), 1);
    }

    static TRACKED_LIVE: AtomicUsize = AtomicUsize::new(0);
    static TRACKED_BUILT: AtomicUsize = AtomicUsize::new(0);

    /// Counts live instances so tests can observe release.
    struct TrackedEngine;

    impl PricingEngine for TrackedEngine {
        fn name(&self) -> &str {
            "TrackedEngine"
        }

        fn price(&self, trade: &Trade, sink: &dyn ResultSink) {
            sink.add_value(trade.trade_id().as_str(), 1.0);
        }
    }

    impl Drop for TrackedEngine {
        fn drop(&mut self) {
            TRACKED_LIVE.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn tracked_engine() -> Box<dyn PricingEngine> {
        TRACKED_LIVE.fetch_add(1, Ordering::SeqCst);
        TRACKED_BUILT.fetch_add(1, Ordering::SeqCst);
        Box::new(TrackedEngine)
    }

    #[test]
    fn test_failed_build_releases_constructed_engines() {
        let catalog = EngineCatalog::empty().with_engine("TrackedEngine", tracked_engine);
        let entries = vec![
            EngineRegistryEntry::new("Swap", "TrackedEngine"),
            EngineRegistryEntry::new("Bond", "MissingEngine"),
            EngineRegistryEntry::new("Cap", "TrackedEngine"),
        ];

        let err = catalog.build(&entries).unwrap_err();

        assert!(matches!(err, ConfigurationError::UnknownEngineType(ref name) if name == "MissingEngine"));
        assert_eq!(TRACKED_BUILT.load(Ordering::SeqCst), 1);
        assert_eq!(TRACKED_LIVE.load(Ordering::SeqCst), 0);

        let registry = catalog.build(&entries[..1]).unwrap();
        assert_eq!(TRACKED_LIVE.load(Ordering::SeqCst), 1);
        drop(registry);
        assert_eq!(TRACKED_LIVE.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_registry_debug_lists_engines() {
        let registry = EngineRegistry::new().with_engine("Swap", null_engine());
        assert_eq!(format!("{:?}", registry), r#"{"Swap": "NullEngine"}"#);
    }
}
