//! Integration tests for batch and single-directory runs.
//!
//! Tests cover:
//! - Failure isolation between directories
//! - Cache flush at the end of a run
//! - Repeated runs over directories without a catalog record

mod common;

use common::{
    human_json, movie_json, stores, Harness, MockCatalog, MockFetcher, ScriptedPrompt,
};
use gcollect::core::batch::BatchRunner;
use gcollect::core::cache::KeyValueStore;
use gcollect::core::organizer::OrganizeOptions;
use gcollect::models::task::{DirectoryTask, OrganizeOutcome};
use std::fs;
use tempfile::TempDir;

const RENAME: OrganizeOptions = OrganizeOptions {
    silent: true,
    rename: true,
};

fn batch_catalog() -> MockCatalog {
    MockCatalog::new()
        .with_movie_search("ABC-001", movie_json("ABC-001", &["Yui Hatano"]))
        .with_movie_search("ABC-002", movie_json("ABC-002", &[]))
        .with_movie_search("ABC-003", movie_json("ABC-003", &["Ai Uehara"]))
        .with_person_search("Hatano Yui", human_json("波多野結衣", "Hatano Yui"))
        .with_person_search("Uehara Ai", human_json("上原亜衣", "Uehara Ai"))
}

// ========== BATCH RUN TESTS ==========

#[tokio::test]
async fn test_failing_directory_does_not_stop_batch() {
    let media = TempDir::new().unwrap();
    let caches = TempDir::new().unwrap();
    for name in ["ABC-001", "ABC-002", "ABC-003"] {
        fs::create_dir(media.path().join(name)).unwrap();
    }
    // Occupies the name ABC-002 would be renamed to
    fs::write(media.path().join("ABC-002 [jav]"), "blocker").unwrap();

    let harness = Harness::new(batch_catalog(), MockFetcher::new(), ScriptedPrompt::default());
    let mut runner = BatchRunner::new(harness.organizer(RENAME), stores(caches.path(), &[]));

    let summary = runner.run_all(media.path()).await.unwrap();

    assert_eq!(summary.renamed, 2);
    assert_eq!(summary.failed, vec!["ABC-002".to_string()]);
    assert!(media.path().join("Yui Hatano @ ABC-001 [jav]").is_dir());
    assert!(media.path().join("ABC-002").is_dir());
    assert!(media.path().join("Ai Uehara @ ABC-003 [jav]").is_dir());

    let flushed = KeyValueStore::load(&caches.path().join("actors.json")).unwrap();
    assert_eq!(flushed.get("yui hatano"), Some("Yui Hatano"));
    assert_eq!(flushed.get("ai uehara"), Some("Ai Uehara"));

    // The pipeline never writes tag rules
    assert!(!caches.path().join("tags.json").exists());
}

#[tokio::test]
async fn test_batch_skips_organized_and_counts_outcomes() {
    let media = TempDir::new().unwrap();
    let caches = TempDir::new().unwrap();
    fs::create_dir(media.path().join("ABC-001")).unwrap();
    let done = media.path().join("Someone @ OLD-001 [jav]");
    fs::create_dir(&done).unwrap();
    fs::write(done.join("old-001_cover.jpg"), "x").unwrap();

    let harness = Harness::new(batch_catalog(), MockFetcher::new(), ScriptedPrompt::default());
    let mut runner = BatchRunner::new(harness.organizer(RENAME), stores(caches.path(), &[]));

    let summary = runner.run_all(media.path()).await.unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total(), 2);
    assert!(summary.failed.is_empty());
    assert!(!harness
        .catalog
        .requests()
        .iter()
        .any(|r| r.contains("OLD-001")));
}

#[tokio::test]
async fn test_rerun_keeps_tag_only_rename_stable() {
    let media = TempDir::new().unwrap();
    let caches = TempDir::new().unwrap();
    fs::create_dir(media.path().join("XYZ-999")).unwrap();

    let harness = Harness::new(MockCatalog::new(), MockFetcher::new(), ScriptedPrompt::default());
    let mut runner = BatchRunner::new(harness.organizer(RENAME), stores(caches.path(), &[]));

    let first = runner.run_all(media.path()).await.unwrap();
    assert_eq!(first.renamed, 1);

    for _ in 0..2 {
        let again = runner.run_all(media.path()).await.unwrap();
        assert_eq!(again.renamed, 0);
        assert_eq!(again.unchanged, 1);
    }

    let names: Vec<String> = fs::read_dir(media.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["XYZ-999 [jav]".to_string()]);
}

// ========== SINGLE RUN TESTS ==========

#[tokio::test]
async fn test_run_one_flushes_cache() {
    let media = TempDir::new().unwrap();
    let caches = TempDir::new().unwrap();
    fs::create_dir(media.path().join("ABC-003")).unwrap();

    let harness = Harness::new(batch_catalog(), MockFetcher::new(), ScriptedPrompt::default());
    let mut runner = BatchRunner::new(harness.organizer(RENAME), stores(caches.path(), &[]));

    let outcome = runner
        .run_one(&DirectoryTask::new("ABC-003", media.path()))
        .await
        .unwrap();

    assert!(matches!(outcome, OrganizeOutcome::Renamed { .. }));
    assert!(!runner.stores().actors.is_dirty());
    let flushed = KeyValueStore::load(&caches.path().join("actors.json")).unwrap();
    assert_eq!(flushed.get("ai uehara"), Some("Ai Uehara"));
    assert_eq!(flushed.get("上原亜衣"), Some("Ai Uehara"));
}

#[tokio::test]
async fn test_missing_parent_is_an_error() {
    let caches = TempDir::new().unwrap();
    let harness = Harness::new(MockCatalog::new(), MockFetcher::new(), ScriptedPrompt::default());
    let mut runner = BatchRunner::new(harness.organizer(RENAME), stores(caches.path(), &[]));

    let result = runner.run_all(&caches.path().join("missing")).await;
    assert!(result.is_err());
}
