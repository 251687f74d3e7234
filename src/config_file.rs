//! Client configuration handling for saving and loading settings.
//!
//! The configuration controls presentation and pacing knobs only; product
//! data lives in the catalog.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Client configuration that can be saved/loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the storefront backend (requests are stubbed locally,
    /// the URL is carried for parity with a real deployment)
    pub api_base_url: String,
    /// Currency symbol used by every price display
    pub currency_symbol: String,
    /// Onboarding carousel auto-advance interval in milliseconds
    pub carousel_interval_ms: u64,
    /// Products shown per catalog page
    pub page_size: usize,
    /// Skip the onboarding screen and start on Home
    pub skip_onboarding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.shoptui.example".to_string(),
            currency_symbol: "$".to_string(),
            carousel_interval_ms: 4000,
            page_size: 12,
            skip_onboarding: false,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with sensible defaults
    #[allow(dead_code)] // API: Constructor for external consumers
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            anyhow::bail!("API base URL must be specified");
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("API base URL must start with http:// or https://");
        }

        if self.currency_symbol.trim().is_empty() {
            anyhow::bail!("Currency symbol must be specified");
        }

        // Anything faster than half a second makes slides unreadable
        if self.carousel_interval_ms < 500 {
            anyhow::bail!("Carousel interval must be at least 500 ms");
        }

        if self.page_size == 0 || self.page_size > 50 {
            anyhow::bail!("Page size must be between 1 and 50");
        }

        Ok(())
    }

    /// Carousel advance interval as a Duration
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ClientConfig::default();
        config.api_base_url = "ftp://files.example".to_string();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.carousel_interval_ms = 100;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.page_size = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.currency_symbol = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = ClientConfig::default();
        config.currency_symbol = "€".to_string();
        config.carousel_interval_ms = 2500;
        config.save_to_file(&path).expect("save");

        let loaded = ClientConfig::load_from_file(&path).expect("load");
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.carousel_interval(), Duration::from_millis(2500));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "page_size": 6 }"#).expect("write");

        let loaded = ClientConfig::load_from_file(&path).expect("load");
        assert_eq!(loaded.page_size, 6);
        assert_eq!(loaded.carousel_interval_ms, 4000);
    }
}
