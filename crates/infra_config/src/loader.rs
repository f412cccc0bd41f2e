//! `PricingEngines` document loader.

use std::fs;
use std::path::{Path, PathBuf};

use pricer_core::types::ConfigurationError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, info};

use crate::pricing::{PricingEngineConfig, PricingEngineConfigItem};

const ROOT_ELEMENT: &str = "PricingEngines";
const ENGINE_ELEMENT: &str = "Engine";

/// Loads pricing engine configuration from an XML file.
///
/// File access and parsing are separate steps: [`load`](Self::load) reads
/// the file and hands its content to [`parse_xml`](Self::parse_xml).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PricingConfigLoader {
    config_file: PathBuf,
}

impl PricingConfigLoader {
    /// Creates a loader for `config_file`.
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }

    /// Path of the configuration file.
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Points the loader at another file.
    pub fn set_config_file(&mut self, config_file: impl Into<PathBuf>) {
        self.config_file = config_file.into();
    }

    /// Reads and parses the configuration file.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::MissingConfigFile`] if no path is set
    /// - [`ConfigurationError::Io`] if the file cannot be read
    /// - any error from [`parse_xml`](Self::parse_xml)
    pub fn load(&self) -> Result<PricingEngineConfig, ConfigurationError> {
        if self.config_file.as_os_str().is_empty() {
            return Err(ConfigurationError::MissingConfigFile);
        }
        let content = fs::read_to_string(&self.config_file).map_err(|err| ConfigurationError::Io {
            path: self.config_file.display().to_string(),
            message: err.to_string(),
        })?;

        let config = Self::parse_xml(&content)?;
        info!(
            path = %self.config_file.display(),
            engines = config.len(),
            "loaded pricing engine configuration"
        );
        Ok(config)
    }

    /// Parses a `PricingEngines` document.
    ///
    /// Every `Engine` element must carry `tradeType`, `assembly` and
    /// `pricingEngine` attributes. Other elements are ignored.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::Malformed`] if the text is not well-formed XML
    ///   or its root element is not `PricingEngines`
    /// - [`ConfigurationError::MissingAttribute`] if an `Engine` lacks an attribute
    pub fn parse_xml(content: &str) -> Result<PricingEngineConfig, ConfigurationError> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        let mut config = PricingEngineConfig::new();
        let mut depth = 0_usize;

        loop {
            let event = reader.read_event().map_err(|err| {
                ConfigurationError::Malformed(format!("at byte {}: {err}", reader.buffer_position()))
            })?;

            match event {
                Event::Start(element) => {
                    check_root(depth, &element)?;
                    collect_engine(&element, &mut config)?;
                    depth += 1;
                }
                Event::Empty(element) => {
                    check_root(depth, &element)?;
                    collect_engine(&element, &mut config)?;
                }
                Event::End(_) => depth = depth.saturating_sub(1),
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(config)
    }
}

fn check_root(depth: usize, element: &BytesStart<'_>) -> Result<(), ConfigurationError> {
    if depth == 0 && element.name().as_ref() != ROOT_ELEMENT.as_bytes() {
        return Err(ConfigurationError::Malformed(format!(
            "expected <{ROOT_ELEMENT}> root element, found <{}>",
            String::from_utf8_lossy(element.name().as_ref())
        )));
    }
    Ok(())
}

fn collect_engine(element: &BytesStart<'_>, config: &mut PricingEngineConfig) -> Result<(), ConfigurationError> {
    if element.name().as_ref() != ENGINE_ELEMENT.as_bytes() {
        return Ok(());
    }

    let item = PricingEngineConfigItem::new(
        required_attribute(element, "tradeType")?,
        required_attribute(element, "assembly")?,
        required_attribute(element, "pricingEngine")?,
    );
    debug!(
        trade_type = %item.trade_type,
        engine = %item.type_name,
        "pricing engine configured"
    );
    config.push(item);
    Ok(())
}

fn required_attribute(element: &BytesStart<'_>, name: &str) -> Result<String, ConfigurationError> {
    let attribute = element
        .try_get_attribute(name)
        .map_err(|err| ConfigurationError::Malformed(err.to_string()))?
        .ok_or_else(|| ConfigurationError::MissingAttribute {
            element: ENGINE_ELEMENT.to_string(),
            attribute: name.to_string(),
        })?;

    attribute
        .unescape_value()
        .map(|value| value.trim().to_string())
        .map_err(|err| ConfigurationError::Malformed(err.to_string()))
}
