use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateOverride, RateTable};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_from() -> CurrencyCode {
    CurrencyCode::Usd
}

fn default_to() -> CurrencyCode {
    CurrencyCode::Vnd
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_from")]
    pub default_from: CurrencyCode,
    #[serde(default = "default_to")]
    pub default_to: CurrencyCode,
    #[serde(default)]
    pub rates: Vec<RateOverride>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_from: default_from(),
            default_to: default_to(),
            rates: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location, falling back to defaults
    /// when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "example", "convertmoney")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Builds the rate table for this run. Called once at start up.
    pub fn rate_table(&self) -> Result<RateTable> {
        RateTable::with_overrides(&self.rates).context("Invalid rate overrides in config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
default_from: EUR
default_to: JPY
rates:
  - code: EUR
    rate_to_base: 1.08
  - code: VND
    symbol: "₫"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.default_from, CurrencyCode::Eur);
        assert_eq!(config.default_to, CurrencyCode::Jpy);
        assert_eq!(config.rates.len(), 2);
        assert_eq!(config.rates[0].rate_to_base, Some(1.08));
        assert!(config.rates[0].symbol.is_none());
        assert_eq!(config.rates[1].symbol.as_deref(), Some("₫"));

        let table = config.rate_table().unwrap();
        assert_eq!(table.rate_to_base(CurrencyCode::Eur), Ok(1.08));
        assert_eq!(table.symbol(CurrencyCode::Vnd), Ok("₫"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_from, CurrencyCode::Usd);
        assert_eq!(config.default_to, CurrencyCode::Vnd);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("default_from: GBP");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_override_fails_table_build() {
        let yaml_str = r#"
rates:
  - code: JPY
    rate_to_base: -0.5
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        let err = config.rate_table().unwrap_err();
        assert!(err.to_string().contains("Invalid rate overrides"));
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/convertmoney/config.yaml");
        assert!(result.is_err());
    }
}
