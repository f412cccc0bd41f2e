//! Pricing engine configuration records.

use pricer_core::types::EngineRegistryEntry;
use serde::{Deserialize, Serialize};

/// One `<Engine>` element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingEngineConfigItem {
    /// Trade type the engine prices.
    pub trade_type: String,
    /// Packaging hint carried from the document. Not used for resolution.
    pub assembly: String,
    /// Engine type name, possibly namespace-qualified.
    pub type_name: String,
}

impl PricingEngineConfigItem {
    /// Creates a configuration item.
    pub fn new(trade_type: impl Into<String>, assembly: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            trade_type: trade_type.into(),
            assembly: assembly.into(),
            type_name: type_name.into(),
        }
    }
}

impl From<PricingEngineConfigItem> for EngineRegistryEntry {
    fn from(item: PricingEngineConfigItem) -> Self {
        EngineRegistryEntry::new(item.trade_type, item.type_name)
    }
}

impl From<&PricingEngineConfigItem> for EngineRegistryEntry {
    fn from(item: &PricingEngineConfigItem) -> Self {
        EngineRegistryEntry::new(item.trade_type.clone(), item.type_name.clone())
    }
}

/// Ordered engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingEngineConfig {
    items: Vec<PricingEngineConfigItem>,
}

impl PricingEngineConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn push(&mut self, item: PricingEngineConfigItem) {
        self.items.push(item);
    }

    /// Items in document order.
    pub fn items(&self) -> &[PricingEngineConfigItem] {
        &self.items
    }

    /// Number of items, duplicates included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no engine is configured.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates items in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, PricingEngineConfigItem> {
        self.items.iter()
    }

    /// Registry entries in document order.
    pub fn to_registry_entries(&self) -> Vec<EngineRegistryEntry> {
        self.items.iter().map(EngineRegistryEntry::from).collect()
    }
}

impl From<Vec<PricingEngineConfigItem>> for PricingEngineConfig {
    fn from(items: Vec<PricingEngineConfigItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<PricingEngineConfigItem> for PricingEngineConfig {
    fn from_iter<I: IntoIterator<Item = PricingEngineConfigItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PricingEngineConfig {
    type Item = PricingEngineConfigItem;
    type IntoIter = std::vec::IntoIter<PricingEngineConfigItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a PricingEngineConfig {
    type Item = &'a PricingEngineConfigItem;
    type IntoIter = std::slice::Iter<'a, PricingEngineConfigItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_into_entry_drops_assembly() {
        let item = PricingEngineConfigItem::new("FxSpot", "Pricers", "Pricers.FxPricingEngine");
        let entry: EngineRegistryEntry = item.into();
        assert_eq!(entry, EngineRegistryEntry::new("FxSpot", "Pricers.FxPricingEngine"));
    }

    #[test]
    fn test_entries_keep_document_order_and_duplicates() {
        let config: PricingEngineConfig = vec![
            PricingEngineConfigItem::new("Bond", "A", "GovBondPricingEngine"),
            PricingEngineConfigItem::new("FxSpot", "A", "FxPricingEngine"),
            PricingEngineConfigItem::new("Bond", "A", "CorpBondPricingEngine"),
        ]
        .into();

        let types: Vec<String> = config.to_registry_entries().into_iter().map(|e| e.trade_type).collect();
        assert_eq!(types, vec!["Bond", "FxSpot", "Bond"]);
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_empty_config() {
        let config = PricingEngineConfig::new();
        assert!(config.is_empty());
        assert!(config.to_registry_entries().is_empty());
    }
}
