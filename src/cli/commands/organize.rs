//! Organize command implementations.
//!
//! Implements the `organize` (single directory) and `batch` (every
//! subdirectory) commands.

use super::RunSettings;
use crate::core::assets::AssetFetcher;
use crate::core::batch::BatchRunner;
use crate::core::cache::Stores;
use crate::core::catalog::CatalogClient;
use crate::core::organizer::{DirectoryOrganizer, OrganizeOptions};
use crate::core::tagger::TagClassifier;
use crate::models::task::{DirectoryTask, OrganizeOutcome};
use crate::preflight;
use crate::services::{HttpCatalog, HttpFetcher, TerminalPrompt};
use crate::Result;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

/// Organize a single directory.
pub async fn organize_one(settings: &RunSettings, dir: &Path, rename: bool) -> Result<()> {
    let dir = std::fs::canonicalize(dir)
        .map_err(|_| crate::Error::PathNotFound(dir.display().to_string()))?;
    let task = DirectoryTask::from_path(&dir)
        .ok_or_else(|| crate::Error::other(format!("Cannot organize {}", dir.display())))?;

    print_header(settings, rename);
    let mut runner = build_runner(settings, rename).await?;

    let outcome = runner.run_one(&task).await?;
    println!();
    print_outcome(&task.name, &outcome);

    Ok(())
}

/// Organize every subdirectory of `parent`.
pub async fn organize_all(settings: &RunSettings, parent: &Path, dry_run: bool) -> Result<()> {
    crate::utils::fs::ensure_directory(parent)?;

    print_header(settings, !dry_run);
    let mut runner = build_runner(settings, !dry_run).await?;

    let summary = runner.run_all(parent).await?;

    println!();
    println!("{}", "[Batch Summary]".bold().green());
    println!("  {} {}", "Directories:".bold(), summary.total());
    println!("  {} {}", "Renamed:".bold(), summary.renamed);
    println!("  {} {}", "Already organized:".bold(), summary.skipped);
    println!("  {} {}", "Unchanged:".bold(), summary.unchanged);
    if dry_run {
        println!("  {} {}", "Would rename:".bold(), summary.not_renamed);
    }
    println!("  {} {}", "Failed:".bold(), summary.failed.len());
    for name in &summary.failed {
        println!("    {} {}", "-".red(), name);
    }

    Ok(())
}

fn print_header(settings: &RunSettings, rename: bool) {
    if settings.silent {
        println!("{}", "<<<SILENT MODE>>>".bold().yellow());
    }
    if !rename {
        println!("{}", "[DRY-RUN] Directories will not be renamed".yellow());
    }
    println!("  {} {}", "Catalog:".bold(), settings.base_url);
    println!();
}

fn print_outcome(name: &str, outcome: &OrganizeOutcome) {
    match outcome {
        OrganizeOutcome::Renamed { to, .. } => {
            println!("{} {} -> {}", "[OK]".green(), name, to.bold());
        }
        OrganizeOutcome::RenameDisabled { proposed } => {
            println!("{} {} -> {}", "[DRY-RUN]".yellow(), name, proposed.bold());
            println!("  Run again with {} to rename", "--rename".cyan());
        }
        OrganizeOutcome::Failed { reason } => {
            println!("{} {}: {}", "[FAIL]".red(), name, reason);
        }
        other => println!("{} {}: {}", "[OK]".green(), name, other),
    }
}

/// Load the caches and wire the pipeline to the HTTP services.
async fn build_runner(settings: &RunSettings, rename: bool) -> Result<BatchRunner> {
    let api = HttpCatalog::new(&settings.base_url, settings.timeout_secs)?;

    if !settings.skip_preflight {
        println!("{}", "Running preflight checks...".bold());
        let results =
            preflight::run_preflight_checks(&settings.actor_cache, &settings.tag_cache, &api).await;
        preflight::print_results(&results);
        println!();

        if !preflight::all_passed(&results) {
            return Err(crate::Error::other(
                "Preflight checks failed. Fix the issues above or use --skip-preflight.",
            ));
        }
    }

    let stores = Stores::load(&settings.actor_cache, &settings.tag_cache)?;
    let fetcher = HttpFetcher::new(&settings.base_url, settings.timeout_secs)?;

    let catalog = CatalogClient::new(Arc::new(api), Arc::new(TerminalPrompt::stdin()));
    let organizer = DirectoryOrganizer::new(
        catalog,
        AssetFetcher::new(Arc::new(fetcher)),
        TagClassifier::new(settings.tags.clone()),
        OrganizeOptions {
            silent: settings.silent,
            rename,
        },
    );

    Ok(BatchRunner::new(organizer, stores))
}
