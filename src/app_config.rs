use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Episode catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// File extensions treated as video files (without dots)
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            video_extensions: default_video_extensions(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load the configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.catalog.base_url.is_empty() {
            return Err(anyhow!("Catalog base URL must not be empty"));
        }
        if self.video_extensions.is_empty() {
            return Err(anyhow!("At least one video extension must be configured"));
        }
        Ok(())
    }
}

/// Episode catalog service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API
    #[serde(default = "default_catalog_endpoint")]
    pub base_url: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Preferred metadata language code
    #[serde(default = "default_catalog_language")]
    pub language: String,

    /// Whether fetched responses are cached on disk
    #[serde(default = "default_true")]
    pub use_cache: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_catalog_endpoint(),
            api_key: String::new(),
            language: default_catalog_language(),
            use_cache: default_true(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_video_extensions() -> Vec<String> {
    ["mkv", "mp4", "avi", "m4v", "mov"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_catalog_endpoint() -> String {
    "https://api.thetvdb.com".to_string()
}

fn default_catalog_language() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}
