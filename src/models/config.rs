//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog service configuration.
    pub catalog: CatalogConfig,
    /// Persistent cache locations.
    pub cache: CacheConfig,
    /// Classification tag rules.
    pub tags: TagConfig,
}

/// Catalog service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the public catalog server.
    pub online_url: String,
    /// Base URL of a locally running catalog server.
    pub local_url: String,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

/// Persistent cache locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Actor name cache file.
    pub actors: PathBuf,
    /// Tag rule file.
    pub tags: PathBuf,
}

/// Classification tag rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Tag used when no rule matches.
    pub generic: String,
    /// Tag for uncensored releases.
    pub uncensored: String,
    /// Prefix of the low-metadata source family whose label may override the tag.
    pub distinguished_prefix: String,
    /// Built-in prefixes of uncensored studios.
    pub uncensored_prefixes: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            online_url: "http://leech-server.herokuapp.com".to_string(),
            local_url: "http://localhost:3000".to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        let dir = dirs_config_path();
        Self {
            actors: dir.join("cache.json"),
            tags: dir.join("tags.json"),
        }
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            generic: "[jav]".to_string(),
            uncensored: "[jav; unc]".to_string(),
            distinguished_prefix: "FC2".to_string(),
            uncensored_prefixes: ["1PON", "10MU", "CARI", "PACO", "TOKY"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CatalogConfig {
    /// Base URL for the selected server.
    pub fn base_url(&self, local: bool) -> &str {
        let url = if local { &self.local_url } else { &self.online_url };
        url.trim_end_matches('/')
    }
}

/// Get the configuration directory path.
pub fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gcollect")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring invalid config {:?}: {}", config_path, e),
            },
            Err(e) => tracing::warn!("Cannot read config {:?}: {}", config_path, e),
        }
    }

    Config::default()
}
