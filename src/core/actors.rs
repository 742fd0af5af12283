//! Credited actor resolution.
//!
//! Turns the credited text of an actor into a canonical display name,
//! consulting the actor cache first and the catalog's person search
//! otherwise.

use crate::core::cache::KeyValueStore;
use crate::core::catalog::CatalogClient;
use crate::core::names;
use crate::models::catalog::Human;
use crate::models::task::Resolution;

/// Resolves credited actors to display names.
pub struct ActorResolver<'a> {
    catalog: &'a CatalogClient,
}

impl<'a> ActorResolver<'a> {
    pub fn new(catalog: &'a CatalogClient) -> Self {
        Self { catalog }
    }

    /// Resolve one credited actor. `None` means the actor is left out.
    pub async fn resolve(
        &self,
        cache: &mut KeyValueStore,
        credited: &str,
        silent: bool,
    ) -> Option<String> {
        let key = names::cache_key(credited);
        if let Some(name) = cache.get(&key) {
            tracing::debug!("Actor '{}' cached as '{}'", credited, name);
            return Some(name.to_string());
        }

        let query = names::reorder_for_query(credited);
        let Some(human) = self.lookup(&query, silent).await else {
            tracing::warn!("Not found human '{}'", credited);
            return None;
        };
        tracing::debug!("Resolved '{}' to {:?}", credited, human);

        let value_key = names::cache_key(&human.name.value);
        if let Some(existing) = cache.get(&value_key).map(str::to_string) {
            tracing::debug!("'{}' is already cached as '{}'", human.name.value, existing);
            cache.set(key, existing.clone());
            return Some(existing);
        }

        let display = if human.name.engname.trim().is_empty() {
            human.name.value.trim().to_string()
        } else {
            names::display_name(&human.name.engname)
        };
        if display.is_empty() {
            tracing::warn!("Human '{}' has no usable name", credited);
            return None;
        }

        cache.set(key.clone(), display.clone());
        if !value_key.is_empty() && value_key != key {
            cache.set(value_key, display.clone());
        }
        Some(display)
    }

    async fn lookup(&self, query: &str, silent: bool) -> Option<Human> {
        match self.catalog.search_person(query).await {
            Resolution::Single(human) => Some(human),
            Resolution::Ambiguous(candidates) => {
                if let Some(exact) = candidates.iter().find(|c| c.name.value == query) {
                    tracing::debug!("Exact match for '{}'", query);
                    return self.catalog.person_detail(exact).await;
                }

                let chosen = self.catalog.choose("people", &candidates, silent).await?;
                self.catalog.person_detail(chosen).await
            }
            Resolution::NotFound => None,
        }
    }
}
