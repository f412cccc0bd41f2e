//! Application configuration.
//!
//! Loaded from a TOML file, then overridden by `RISK_*` environment
//! variables, then by command line flags.
//!
//! ```toml
//! pricing_config = "data/PricingEngines.xml"
//! bond_trades = "data/BondTrades.dat"
//! fx_trades = "data/FxTrades.dat"
//! strategy = "parallel"
//! max_threads = 4
//! log_level = "info"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "risk-pricer.toml";

const MAX_THREADS_LIMIT: usize = 1024;

/// Dispatch strategy
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One trade at a time in file order
    #[default]
    Serial,
    /// All trades concurrently
    Parallel,
    /// One source at a time, releasing trades once priced
    Streaming,
}

impl Strategy {
    fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "serial" => Some(Self::Serial),
            "parallel" => Some(Self::Parallel),
            "streaming" => Some(Self::Streaming),
            _ => None,
        }
    }
}

/// Risk pricer configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RiskConfig {
    /// Pricing engine configuration document
    #[serde(default = "default_pricing_config")]
    pub pricing_config: PathBuf,

    /// Bond trade file
    #[serde(default = "default_bond_trades")]
    pub bond_trades: PathBuf,

    /// FX trade file
    #[serde(default = "default_fx_trades")]
    pub fx_trades: PathBuf,

    /// Dispatch strategy
    #[serde(default)]
    pub strategy: Strategy,

    /// Worker bound for the parallel strategy
    pub max_threads: Option<usize>,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pricing_config() -> PathBuf {
    PathBuf::from("data/PricingEngines.xml")
}

fn default_bond_trades() -> PathBuf {
    PathBuf::from("data/BondTrades.dat")
}

fn default_fx_trades() -> PathBuf {
    PathBuf::from("data/FxTrades.dat")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            pricing_config: default_pricing_config(),
            bond_trades: default_bond_trades(),
            fx_trades: default_fx_trades(),
            strategy: Strategy::default(),
            max_threads: None,
            log_level: default_log_level(),
        }
    }
}

impl RiskConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary `RISK_*` lookup
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("RISK_PRICING_CONFIG") {
            self.pricing_config = PathBuf::from(path);
        }

        if let Some(path) = lookup("RISK_BOND_TRADES") {
            self.bond_trades = PathBuf::from(path);
        }

        if let Some(path) = lookup("RISK_FX_TRADES") {
            self.fx_trades = PathBuf::from(path);
        }

        if let Some(strategy) = lookup("RISK_STRATEGY") {
            self.strategy = Strategy::parse(&strategy).unwrap_or(self.strategy);
        }

        if let Some(max_threads) = lookup("RISK_MAX_THREADS") {
            self.max_threads = max_threads.parse().map(Some).unwrap_or(self.max_threads);
        }

        if let Some(log_level) = lookup("RISK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if let Some(max_threads) = self.max_threads {
            if max_threads == 0 {
                errors.push("max_threads must be greater than 0".to_string());
            }
            if max_threads > MAX_THREADS_LIMIT {
                errors.push(format!(
                    "max_threads {max_threads} exceeds maximum allowed ({MAX_THREADS_LIMIT})"
                ));
            }
        }

        for (name, path) in [
            ("pricing_config", &self.pricing_config),
            ("bond_trades", &self.bond_trades),
            ("fx_trades", &self.fx_trades),
        ] {
            if path.as_os_str().is_empty() {
                errors.push(format!("{name} cannot be empty"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file '{path}': {message}")]
    Io {
        /// Path of the config file
        path: String,
        /// Underlying failure
        message: String,
    },

    /// Config file is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more settings are invalid
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn validation_errors(config: &RiskConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config() {
        let config = RiskConfig::default();
        assert_eq!(config.strategy, Strategy::Serial);
        assert_eq!(config.max_threads, None);
        assert_eq!(config.pricing_config, PathBuf::from("data/PricingEngines.xml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = RiskConfig::from_toml("strategy = \"streaming\"\nmax_threads = 2\n").unwrap();
        assert_eq!(config.strategy, Strategy::Streaming);
        assert_eq!(config.max_threads, Some(2));
        assert_eq!(config.bond_trades, PathBuf::from("data/BondTrades.dat"));
    }

    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = RiskConfig::from_toml("stratgey = \"serial\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_toml_rejects_unknown_strategy() {
        assert!(RiskConfig::from_toml("strategy = \"quantum\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RISK_STRATEGY", "Parallel"),
            ("RISK_MAX_THREADS", "8"),
            ("RISK_FX_TRADES", "/tmp/fx.dat"),
        ]
        .into_iter()
        .collect();

        let config = RiskConfig::default().with_overrides_from(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.strategy, Strategy::Parallel);
        assert_eq!(config.max_threads, Some(8));
        assert_eq!(config.fx_trades, PathBuf::from("/tmp/fx.dat"));
        assert_eq!(config.bond_trades, PathBuf::from("data/BondTrades.dat"));
    }

    #[test]
    fn test_unknown_strategy_override_ignored() {
        let config = RiskConfig::default().with_overrides_from(|key| {
            (key == "RISK_STRATEGY").then(|| "quantum".to_string())
        });
        assert_eq!(config.strategy, Strategy::Serial);
    }

    #[test]
    fn test_unparseable_max_threads_override_keeps_configured_bound() {
        let config = RiskConfig {
            max_threads: Some(4),
            ..RiskConfig::default()
        }
        .with_overrides_from(|key| (key == "RISK_MAX_THREADS").then(|| "lots".to_string()));
        assert_eq!(config.max_threads, Some(4));
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("RISK_LOG_LEVEL", "debug");
        let config = RiskConfig::default().with_env_override();
        assert_eq!(config.log_level, "debug");
        std::env::remove_var("RISK_LOG_LEVEL");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = RiskConfig {
            log_level: "chatty".to_string(),
            ..RiskConfig::default()
        };
        assert!(validation_errors(&config).iter().any(|e| e.contains("log_level")));
    }

    #[test]
    fn test_validate_max_threads_bounds() {
        let zero = RiskConfig {
            max_threads: Some(0),
            ..RiskConfig::default()
        };
        assert!(validation_errors(&zero).iter().any(|e| e.contains("greater than 0")));

        let huge = RiskConfig {
            max_threads: Some(4096),
            ..RiskConfig::default()
        };
        assert!(validation_errors(&huge).iter().any(|e| e.contains("exceeds maximum")));
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let config = RiskConfig {
            bond_trades: PathBuf::new(),
            fx_trades: PathBuf::new(),
            log_level: "loud".to_string(),
            ..RiskConfig::default()
        };
        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 3);
        assert_eq!(
            ConfigError::Validation(errors).to_string(),
            "Validation errors: Invalid log_level 'loud'. Valid values: [\"trace\", \"debug\", \"info\", \"warn\", \"error\"]; bond_trades cannot be empty; fx_trades cannot be empty"
        );
    }

    #[test]
    fn test_resolve_explicit_missing_file() {
        let err = RiskConfig::resolve(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
