//! CLI command implementations.

pub mod cache;
pub mod organize;

use crate::models::config::{Config, TagConfig};
use std::path::PathBuf;

/// Settings shared by all commands, merged from the config file and flags.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Catalog server base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Actor cache file.
    pub actor_cache: PathBuf,
    /// Tag cache file.
    pub tag_cache: PathBuf,
    /// Tag rules.
    pub tags: TagConfig,
    /// Never prompt.
    pub silent: bool,
    /// Skip preflight checks.
    pub skip_preflight: bool,
}

impl RunSettings {
    /// Merge command line overrides into the loaded configuration.
    pub fn from_config(
        config: Config,
        local: bool,
        actor_cache: Option<PathBuf>,
        tag_cache: Option<PathBuf>,
    ) -> Self {
        Self {
            base_url: config.catalog.base_url(local).to_string(),
            timeout_secs: config.catalog.timeout_secs,
            actor_cache: actor_cache.unwrap_or(config.cache.actors),
            tag_cache: tag_cache.unwrap_or(config.cache.tags),
            tags: config.tags,
            silent: false,
            skip_preflight: false,
        }
    }
}
