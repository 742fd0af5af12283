//! Single and batch runs.
//!
//! Directories are processed one after another. A failing directory is
//! recorded and the run moves on; the caches are flushed once at the end.

use crate::core::cache::Stores;
use crate::core::organizer::DirectoryOrganizer;
use crate::models::task::{BatchSummary, DirectoryTask, OrganizeOutcome};
use crate::utils::fs;
use crate::Result;
use std::path::Path;

/// Drives the organizer over one or many directories.
pub struct BatchRunner {
    organizer: DirectoryOrganizer,
    stores: Stores,
}

impl BatchRunner {
    pub fn new(organizer: DirectoryOrganizer, stores: Stores) -> Self {
        Self { organizer, stores }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Organize a single directory and flush the caches.
    pub async fn run_one(&mut self, task: &DirectoryTask) -> Result<OrganizeOutcome> {
        tracing::info!("Get data for '{}'", task.name);
        let outcome = self.organizer.organize(task, &mut self.stores).await;
        self.stores.flush()?;
        Ok(outcome)
    }

    /// Organize every subdirectory of `parent` and flush the caches.
    pub async fn run_all(&mut self, parent: &Path) -> Result<BatchSummary> {
        let dirs = fs::list_subdirectories(parent)?;
        tracing::info!("Found {} directories in {:?}", dirs.len(), parent);

        let mut summary = BatchSummary::default();
        for dir in dirs {
            let Some(task) = DirectoryTask::from_path(&dir) else {
                tracing::warn!("Skipping unreadable directory name {:?}", dir);
                continue;
            };

            tracing::info!("Get data for '{}'", task.name);
            let outcome = self.organizer.organize(&task, &mut self.stores).await;
            tracing::debug!("{}: {}", task.name, outcome);
            summary.record(&task.name, &outcome);
        }

        self.stores.flush()?;
        Ok(summary)
    }
}
