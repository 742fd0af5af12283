//! Catalog server preflight check.

use super::CheckResult;
use crate::services::HttpCatalog;

/// Check if the catalog server is reachable.
pub async fn check(catalog: &HttpCatalog) -> CheckResult {
    if catalog.ping().await {
        CheckResult::ok("Catalog", catalog.base_url())
    } else {
        CheckResult::fail(
            "Catalog",
            &format!("{} unreachable", catalog.base_url()),
            "Check your network connection, or use --local with a running local server",
        )
    }
}
