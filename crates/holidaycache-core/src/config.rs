//! Service configuration management.
//!
//! Configuration is read from `~/.config/holidaycache/config.json` when it
//! exists, then overridden field by field from the environment:
//!
//! - `HOLIDAY_API_BASE_URL`
//! - `HOLIDAY_DEFAULT_COUNTRY`
//! - `HOLIDAY_CACHE_TTL_HOURS`
//! - `HOLIDAY_FETCH_TIMEOUT_SECS`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::cache::DEFAULT_TTL_HOURS;
use crate::models::{CountryCode, DEFAULT_COUNTRY};

/// Application name used for the config directory path
const APP_NAME: &str = "holidaycache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub default_country: String,
    pub cache_ttl_hours: i64,
    pub fetch_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            default_country: DEFAULT_COUNTRY.to_string(),
            cache_ttl_hours: DEFAULT_TTL_HOURS,
            fetch_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load the config file (if any) and apply environment overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Ok(path) => Self::load_from(&path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Apply overrides from a variable lookup (the process environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup("HOLIDAY_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(country) = lookup("HOLIDAY_DEFAULT_COUNTRY") {
            self.default_country = country;
        }
        if let Some(ttl) = lookup("HOLIDAY_CACHE_TTL_HOURS") {
            self.cache_ttl_hours = ttl
                .trim()
                .parse()
                .context("HOLIDAY_CACHE_TTL_HOURS must be a whole number of hours")?;
        }
        if let Some(timeout) = lookup("HOLIDAY_FETCH_TIMEOUT_SECS") {
            self.fetch_timeout_secs = timeout
                .trim()
                .parse()
                .context("HOLIDAY_FETCH_TIMEOUT_SECS must be a whole number of seconds")?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.cache_ttl_hours <= 0 {
            anyhow::bail!("Cache TTL must be positive, got {}h", self.cache_ttl_hours);
        }
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("Fetch timeout must be positive");
        }
        if !self.country().is_well_formed() {
            anyhow::bail!("Default country '{}' is not an ISO-3166 alpha-2 code", self.default_country);
        }
        Ok(())
    }

    pub fn country(&self) -> CountryCode {
        CountryCode::new(&self.default_country)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::hours(self.cache_ttl_hours)
    }
}
