//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("production-cost");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "id"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Number and currency formatting used by the report renderers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Currency code (IDR, EUR, USD, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol printed before amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Digit group separator; empty disables grouping
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    /// Fractional digits for amounts
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Width of the label column in the ledger report
    #[serde(default = "default_label_width")]
    pub label_width: usize,
    /// Width of the label column in the breakdown table
    #[serde(default = "default_breakdown_label_width")]
    pub breakdown_label_width: usize,
    /// Minimum width of amounts in the breakdown table
    #[serde(default = "default_amount_width")]
    pub amount_width: usize,
    /// Length of separator rules
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_currency() -> String { "IDR".to_string() }
fn default_currency_symbol() -> String { "Rp".to_string() }
fn default_thousands_separator() -> String { ",".to_string() }
fn default_decimal_separator() -> String { ".".to_string() }
fn default_decimals() -> usize { 2 }
fn default_label_width() -> usize { 20 }
fn default_breakdown_label_width() -> usize { 15 }
fn default_amount_width() -> usize { 10 }
fn default_rule_width() -> usize { 50 }

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            decimals: default_decimals(),
            label_width: default_label_width(),
            breakdown_label_width: default_breakdown_label_width(),
            amount_width: default_amount_width(),
            rule_width: default_rule_width(),
        }
    }
}

/// Ledger defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Unit count used for snapshots when none is given
    #[serde(default = "default_units")]
    pub default_units: i64,
}

fn default_units() -> i64 { 100 }

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_units: default_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [format]
            currency = "EUR"
            currency_symbol = "EUR"
            thousands_separator = "."
            decimal_separator = ","
            "#,
        )
        .unwrap();

        assert_eq!(config.general.language, "auto");
        assert_eq!(config.format.currency, "EUR");
        assert_eq!(config.format.thousands_separator, ".");
        assert_eq!(config.format.decimals, 2);
        assert_eq!(config.format.label_width, 20);
        assert_eq!(config.ledger.default_units, 100);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.general.language = "id".to_string();
        config.format.decimals = 0;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.general.language, "id");
        assert_eq!(loaded.format.decimals, 0);
        assert_eq!(loaded.format.currency_symbol, "Rp");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[format\ncurrency = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
