//! Persistent key-value caches.
//!
//! The actor cache maps normalized credited names to display names; the tag
//! cache maps directory prefixes (or label names) to classification tags.
//! Both are loaded once at startup, mutated in memory and written back once
//! at the end of a run.

use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A JSON-object backed string map.
#[derive(Debug, Clone, Default)]
pub struct KeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl KeyValueStore {
    /// Empty in-memory store that flushes to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Build a store from existing entries.
    pub fn with_entries<I, K, V>(path: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: path.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            dirty: false,
        }
    }

    /// Load a store from a JSON file. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Cache {:?} does not exist yet, starting empty", path);
            return Ok(Self::new(path));
        }

        let content = fs::read_to_string(path).map_err(|e| crate::Error::CacheLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| crate::Error::CacheLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Loaded {} entries from {:?}", entries.len(), path);
        Ok(Self {
            path: path.to_path_buf(),
            entries,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or replace an entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if self.entries.get(&key) != Some(&value) {
            self.entries.insert(key, value);
            self.dirty = true;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write the whole map back to its file if anything changed.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::debug!("Cache {:?} unchanged, not writing", self.path);
            return Ok(());
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.entries.serialize(&mut ser)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::File::create(&self.path)?;
        file.write_all(&buf)?;

        self.dirty = false;
        tracing::info!("Saved {} entries to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}

/// The two caches surviving across runs.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub actors: KeyValueStore,
    pub tags: KeyValueStore,
}

impl Stores {
    pub fn new(actors: KeyValueStore, tags: KeyValueStore) -> Self {
        Self { actors, tags }
    }

    /// Load both caches.
    pub fn load(actors: &Path, tags: &Path) -> Result<Self> {
        Ok(Self {
            actors: KeyValueStore::load(actors)?,
            tags: KeyValueStore::load(tags)?,
        })
    }

    /// Flush both caches.
    pub fn flush(&mut self) -> Result<()> {
        self.actors.flush()?;
        self.tags.flush()
    }
}
