//! Directory organization pipeline.
//!
//! For one directory:
//! 1. **Skip check**: a cover image means the directory is already organized
//! 2. **Classify**: tag from the directory name
//! 3. **Metadata**: catalog lookup (missing records degrade to a tag-only rename)
//! 4. **Assets**: cover, thumbnail and screenshots
//! 5. **Actors**: credited cast resolved to display names, tag refined by label
//! 6. **Rename**: `<people> @ <name> <tag>`
//!
//! Errors never escape [`DirectoryOrganizer::organize`]; they end the
//! pipeline for that directory only.

use crate::core::actors::ActorResolver;
use crate::core::assets::{AssetFetcher, COVER_SUFFIX};
use crate::core::cache::Stores;
use crate::core::catalog::CatalogClient;
use crate::core::tagger::TagClassifier;
use crate::models::task::{DirectoryTask, OrganizeOutcome};
use crate::utils::fs;
use crate::Result;

/// Run modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizeOptions {
    /// Never prompt; ambiguous lookups resolve to nothing.
    pub silent: bool,
    /// Permit the final rename.
    pub rename: bool,
}

/// Compose the organized directory name.
///
/// Returns `name` unchanged when there are no people and no tag. A tag
/// already ending `name` is not appended again.
pub fn compose_name(people: &[String], name: &str, tag: &str) -> String {
    if people.is_empty() && tag.is_empty() {
        return name.to_string();
    }

    let base = if tag.is_empty() {
        name
    } else {
        name.strip_suffix(tag)
            .and_then(|rest| rest.strip_suffix(' '))
            .unwrap_or(name)
    };

    let composed = if people.is_empty() {
        format!("{} {}", base, tag)
    } else {
        let people: Vec<String> = people.iter().map(|p| fs::sanitize_filename(p)).collect();
        format!("{} @ {} {}", people.join("; "), base, tag)
    };

    composed.trim_end().to_string()
}

/// Organizes one directory at a time.
pub struct DirectoryOrganizer {
    catalog: CatalogClient,
    assets: AssetFetcher,
    tagger: TagClassifier,
    options: OrganizeOptions,
}

impl DirectoryOrganizer {
    pub fn new(
        catalog: CatalogClient,
        assets: AssetFetcher,
        tagger: TagClassifier,
        options: OrganizeOptions,
    ) -> Self {
        Self {
            catalog,
            assets,
            tagger,
            options,
        }
    }

    pub fn options(&self) -> OrganizeOptions {
        self.options
    }

    /// Organize one directory. Failures are logged and reported as
    /// [`OrganizeOutcome::Failed`].
    pub async fn organize(&self, task: &DirectoryTask, stores: &mut Stores) -> OrganizeOutcome {
        match self.run(task, stores).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("Error while processing {}: {}", task.name, e);
                OrganizeOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn run(&self, task: &DirectoryTask, stores: &mut Stores) -> Result<OrganizeOutcome> {
        let dir = task.path();
        fs::ensure_directory(&dir)?;

        if fs::has_file_with_suffix(&dir, COVER_SUFFIX)? {
            tracing::info!("'{}' already has a cover, skipping", task.name);
            return Ok(OrganizeOutcome::Skipped);
        }

        let mut tag = self.tagger.classify_name(&task.name, &stores.tags);
        let mut people = Vec::new();

        match self.catalog.find_movie(&task.name, self.options.silent).await {
            None => {
                tracing::warn!("Not found mov '{}'", task.name);
            }
            Some(movie) => {
                tracing::debug!("Movie record: {:?}", movie);

                let report = self
                    .assets
                    .fetch_all(&movie, &dir, &task.asset_prefix())
                    .await;
                if !report.failed.is_empty() {
                    tracing::warn!(
                        "{} of {} downloads failed for '{}'",
                        report.failed.len(),
                        report.failed.len() + report.downloaded.len(),
                        task.name
                    );
                }

                tracing::info!("+ Finding actors for {}", task.name);
                let resolver = ActorResolver::new(&self.catalog);
                for actor in &movie.actors {
                    if let Some(name) = resolver
                        .resolve(&mut stores.actors, &actor.text, self.options.silent)
                        .await
                    {
                        people.push(name);
                    }
                }

                if movie.actors.is_empty() && self.tagger.is_distinguished(&task.name) {
                    if let Some(director) = movie.director.as_ref() {
                        let text = director.text.trim();
                        if !text.is_empty() {
                            people.push(text.to_string());
                        }
                    }
                }

                let label_tag = self.tagger.label_override(&task.name, &movie, &stores.tags);
                if let Some(label_tag) = label_tag {
                    tracing::debug!("Label tag {} overrides {}", label_tag, tag);
                    tag = label_tag;
                }
            }
        }

        let new_name = compose_name(&people, &task.name, &tag);
        self.rename(task, &new_name)
    }

    fn rename(&self, task: &DirectoryTask, new_name: &str) -> Result<OrganizeOutcome> {
        if new_name == task.name {
            tracing::info!("Nothing to rename for '{}'", task.name);
            return Ok(OrganizeOutcome::Unchanged);
        }

        if !self.options.rename {
            tracing::info!("Cannot rename without rename mode: {} -> {}", task.name, new_name);
            return Ok(OrganizeOutcome::RenameDisabled {
                proposed: new_name.to_string(),
            });
        }

        let from = task.path();
        let to = task.parent_dir.join(new_name);
        if to.exists() {
            return Err(crate::Error::FileAlreadyExists(to.display().to_string()));
        }

        tracing::info!("Rename {} -> {}", task.name, new_name);
        std::fs::rename(&from, &to)?;

        Ok(OrganizeOutcome::Renamed {
            from: task.name.clone(),
            to: new_name.to_string(),
        })
    }
}
