//! Cache file preflight check.

use super::CheckResult;
use crate::core::cache::KeyValueStore;
use std::path::Path;

/// Check that a cache file is absent (first run) or parses.
pub fn check(name: &str, path: &Path) -> CheckResult {
    if !path.exists() {
        return CheckResult::ok(name, &format!("{} (new)", path.display()));
    }

    match KeyValueStore::load(path) {
        Ok(store) => CheckResult::ok(name, &format!("{} entries", store.len())),
        Err(e) => CheckResult::fail(
            name,
            &e.to_string(),
            "Fix or remove the file; it must hold a single JSON object of strings",
        ),
    }
}
