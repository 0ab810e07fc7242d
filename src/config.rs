//! Reference-data configuration
//!
//! Loads client settings from YAML or from `REFDATA_*` environment variables.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::error::{RefDataError, Result};
use crate::lookup::ExpiryScope;

/// Prefix the existing-asset-id dropdown puts in front of every id
pub const DEFAULT_EXISTING_ASSET_ID_PREFIX: &str = "ASSET-";

/// Default cache expiry window (5 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the reference-data client
#[derive(Debug, Clone, Deserialize)]
pub struct RefDataConfig {
    /// API root the endpoint paths are appended to (e.g. "https://assets.example.com/api")
    pub base_url: String,
    /// Bearer token; normally supplied by the session instead
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default)]
    pub expiry_scope: ExpiryScope,
    #[serde(default = "default_asset_id_prefix")]
    pub existing_asset_id_prefix: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_cache_ttl_secs() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

fn default_asset_id_prefix() -> String {
    DEFAULT_EXISTING_ASSET_ID_PREFIX.to_string()
}

impl RefDataConfig {
    /// Config with defaults for everything but the base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            expiry_scope: ExpiryScope::default(),
            existing_asset_id_prefix: default_asset_id_prefix(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: RefDataConfig = serde_yaml::from_str(content)?;
        config.base_url()?;
        Ok(config)
    }

    /// Load configuration from `REFDATA_*` environment variables
    ///
    /// Only `REFDATA_BASE_URL` is required.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("REFDATA_BASE_URL")
            .map_err(|_| RefDataError::Config("REFDATA_BASE_URL not set".to_string()))?;

        let mut config = Self::new(base_url);
        config.api_token = std::env::var("REFDATA_API_TOKEN").ok();

        if let Ok(raw) = std::env::var("REFDATA_TIMEOUT_SECS") {
            config.request_timeout_secs = parse_secs("REFDATA_TIMEOUT_SECS", &raw)?;
        }
        if let Ok(raw) = std::env::var("REFDATA_CACHE_TTL_SECS") {
            config.cache_ttl_secs = parse_secs("REFDATA_CACHE_TTL_SECS", &raw)?;
        }
        if let Ok(raw) = std::env::var("REFDATA_EXPIRY_SCOPE") {
            config.expiry_scope = raw.parse()?;
        }
        if let Ok(prefix) = std::env::var("REFDATA_ASSET_ID_PREFIX") {
            config.existing_asset_id_prefix = prefix;
        }

        config.base_url()?;
        Ok(config)
    }

    /// Parsed base URL
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_secs(var: &str, raw: &str) -> Result<u64> {
    raw.trim().parse().map_err(|_| {
        RefDataError::Config(format!(
            "{} must be a whole number of seconds, got '{}'",
            var, raw
        ))
    })
}
