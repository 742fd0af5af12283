//! Classification tags.
//!
//! Lookup chain over the directory name prefix:
//! 1. distinguished source family → uncensored tag
//! 2. tag cache entry for the prefix
//! 3. built-in uncensored studio prefixes
//! 4. generic tag
//!
//! Records of the distinguished family without any credited actor may carry
//! a label whose tag cache entry overrides the result.

use crate::core::cache::KeyValueStore;
use crate::models::catalog::Movie;
use crate::models::config::TagConfig;

/// Computes classification tags.
#[derive(Debug, Clone)]
pub struct TagClassifier {
    rules: TagConfig,
}

impl Default for TagClassifier {
    fn default() -> Self {
        Self::new(TagConfig::default())
    }
}

impl TagClassifier {
    pub fn new(rules: TagConfig) -> Self {
        Self { rules }
    }

    /// Directory name prefix used for tag lookups.
    ///
    /// First four characters, upper-cased, without surrounding whitespace or
    /// trailing separators.
    pub fn prefix(directory_name: &str) -> String {
        directory_name
            .chars()
            .take(4)
            .collect::<String>()
            .to_uppercase()
            .trim()
            .trim_end_matches(['-', '_'])
            .to_string()
    }

    /// Whether the name belongs to the distinguished source family.
    pub fn is_distinguished(&self, directory_name: &str) -> bool {
        Self::prefix(directory_name) == self.rules.distinguished_prefix
    }

    /// Tag derived from the directory name alone.
    pub fn classify_name(&self, directory_name: &str, tags: &KeyValueStore) -> String {
        let prefix = Self::prefix(directory_name);

        if prefix == self.rules.distinguished_prefix {
            tracing::info!("Found {} movie, check it yourself", prefix);
            return self.rules.uncensored.clone();
        }

        if let Some(tag) = tags.get(&prefix) {
            return tag.to_string();
        }

        if self.rules.uncensored_prefixes.iter().any(|p| *p == prefix) {
            return self.rules.uncensored.clone();
        }

        self.rules.generic.clone()
    }

    /// Label-keyed tag superseding the name-derived one, if any.
    pub fn label_override(
        &self,
        directory_name: &str,
        record: &Movie,
        tags: &KeyValueStore,
    ) -> Option<String> {
        if !record.actors.is_empty() || !self.is_distinguished(directory_name) {
            return None;
        }

        let label = record.label_text()?;
        tags.get(label).map(str::to_string)
    }

    /// Full classification of a directory and its catalog record.
    pub fn classify(
        &self,
        directory_name: &str,
        record: Option<&Movie>,
        tags: &KeyValueStore,
    ) -> String {
        record
            .and_then(|r| self.label_override(directory_name, r, tags))
            .unwrap_or_else(|| self.classify_name(directory_name, tags))
    }
}
