//! File-backed configuration tests.

use std::io::Write;

use infra_config::{PricingConfigLoader, PricingEngineConfigItem};
use pricer_core::types::ConfigurationError;
use proptest::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<PricingEngines>
             <Engine tradeType="GovBond" assembly="Pricers" pricingEngine="Pricers.GovBondPricingEngine"/>
             <Engine tradeType="GovBond" assembly="Pricers" pricingEngine="Pricers.CorpBondPricingEngine"/>
           </PricingEngines>"#
    )
    .unwrap();

    let loader = PricingConfigLoader::new(file.path());
    let config = loader.load().unwrap();

    assert_eq!(config.len(), 2);
    assert_eq!(config.items()[1].type_name, "Pricers.CorpBondPricingEngine");
    assert_eq!(loader.config_file(), file.path());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PricingEngines.xml");

    let err = PricingConfigLoader::new(&path).load().unwrap_err();

    assert!(matches!(err, ConfigurationError::Io { path: ref p, .. } if p == &path.display().to_string()));
}

#[test]
fn test_bundled_configuration() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/PricingEngines.xml");

    let config = PricingConfigLoader::new(path).load().unwrap();

    let types: Vec<&str> = config.iter().map(|i| i.trade_type.as_str()).collect();
    assert_eq!(types, vec!["GovBond", "CorpBond", "FxSpot", "FxFwd"]);
    assert!(config.iter().all(|i| i.assembly == "Pricers"));
}

#[test]
fn test_config_serialises_as_list() {
    let config = PricingConfigLoader::parse_xml(
        r#"<PricingEngines><Engine tradeType="FxSpot" assembly="A" pricingEngine="FxPricingEngine"/></PricingEngines>"#,
    )
    .unwrap();

    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{ "trade_type": "FxSpot", "assembly": "A", "type_name": "FxPricingEngine" }])
    );
}

fn item_strategy() -> impl Strategy<Value = PricingEngineConfigItem> {
    (
        prop::sample::select(vec!["GovBond", "CorpBond", "FxSpot", "FxFwd"]),
        "[A-Za-z]{1,8}",
        prop::sample::select(vec!["GovBondPricingEngine", "CorpBondPricingEngine", "FxPricingEngine"]),
    )
        .prop_map(|(trade_type, assembly, engine)| {
            PricingEngineConfigItem::new(trade_type, assembly.clone(), format!("{assembly}.{engine}"))
        })
}

proptest! {
    #[test]
    fn test_document_order_and_duplicates_preserved(items in prop::collection::vec(item_strategy(), 0..20)) {
        let body: String = items
            .iter()
            .map(|i| {
                format!(
                    "  <Engine tradeType=\"{}\" assembly=\"{}\" pricingEngine=\"{}\" />\n",
                    i.trade_type, i.assembly, i.type_name
                )
            })
            .collect();
        let xml = format!("<PricingEngines>\n{body}</PricingEngines>");

        let config = PricingConfigLoader::parse_xml(&xml).unwrap();

        prop_assert_eq!(config.items(), items.as_slice());
        let entries = config.to_registry_entries();
        prop_assert_eq!(entries.len(), items.len());
    }
}
