//! Cache inspection commands.
//!
//! Direct `get`/`set` access to the actor and tag caches, bypassing the
//! organization pipeline.

use super::RunSettings;
use crate::core::cache::KeyValueStore;
use crate::core::names;
use crate::Result;
use colored::Colorize;

/// Actor keys are stored the way the resolver looks them up.
fn entry_key(key: &str, tags: bool) -> String {
    if tags {
        key.to_string()
    } else {
        names::cache_key(key)
    }
}

fn cache_path(settings: &RunSettings, tags: bool) -> &std::path::Path {
    if tags {
        &settings.tag_cache
    } else {
        &settings.actor_cache
    }
}

/// Print one cache entry.
pub fn get(settings: &RunSettings, key: &str, tags: bool) -> Result<Option<String>> {
    let key = entry_key(key, tags);
    let store = KeyValueStore::load(cache_path(settings, tags))?;
    let value = store.get(&key).map(str::to_string);

    println!("{}", "Result".bold());
    match &value {
        Some(value) => println!("{{ '{}': '{}' }}", key, value.green()),
        None => println!("{{ '{}': {} }}", key, "undefined".yellow()),
    }

    Ok(value)
}

/// Set one cache entry and write the cache back.
pub fn set(settings: &RunSettings, key: &str, value: &str, tags: bool) -> Result<()> {
    let key = entry_key(key, tags);
    let mut store = KeyValueStore::load(cache_path(settings, tags))?;
    store.set(&key, value);
    store.flush()?;

    println!("Set key:'{}' to '{}'", key, value.green());
    Ok(())
}
