//! Image asset downloads for a catalog record.
//!
//! Files are named after the directory:
//! - `<prefix>_cover.jpg` (falls back to the thumbnail when no cover exists)
//! - `<prefix>_thumb.jpg`
//! - `<prefix>_screenshot.jpg`, or `<prefix>_screenshotNN.jpg` for several

use crate::models::catalog::Movie;
use crate::services::Fetch;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Suffix of the cover file, used to recognize organized directories.
pub const COVER_SUFFIX: &str = "_cover.jpg";

/// A planned download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDownload {
    pub url: String,
    pub filename: String,
}

/// Result of downloading a record's assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    pub downloaded: Vec<PathBuf>,
    pub failed: Vec<String>,
}

/// Compute the downloads for a record, in download order.
pub fn plan_downloads(record: &Movie, prefix: &str) -> Vec<AssetDownload> {
    let mut downloads = Vec::new();

    match (record.covers.first(), record.thumb.first()) {
        (Some(cover), thumb) => {
            downloads.push(AssetDownload {
                url: cover.clone(),
                filename: format!("{}{}", prefix, COVER_SUFFIX),
            });
            if let Some(thumb) = thumb {
                downloads.push(AssetDownload {
                    url: thumb.clone(),
                    filename: format!("{}_thumb.jpg", prefix),
                });
            }
        }
        (None, Some(thumb)) => {
            downloads.push(AssetDownload {
                url: thumb.clone(),
                filename: format!("{}{}", prefix, COVER_SUFFIX),
            });
        }
        (None, None) => {}
    }

    let numbered = record.screenshots.len() > 1;
    for (idx, url) in record.screenshots.iter().enumerate() {
        let filename = if numbered {
            format!("{}_screenshot{:02}.jpg", prefix, idx + 1)
        } else {
            format!("{}_screenshot.jpg", prefix)
        };
        downloads.push(AssetDownload {
            url: url.clone(),
            filename,
        });
    }

    downloads
}

/// Downloads record images, one at a time.
pub struct AssetFetcher {
    fetcher: Arc<dyn Fetch>,
}

impl AssetFetcher {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Download every asset of `record` into `target_dir`.
    ///
    /// Individual failures are logged and skipped. A file left behind by a
    /// failed download is removed unless it was there before the attempt.
    pub async fn fetch_all(&self, record: &Movie, target_dir: &Path, prefix: &str) -> FetchReport {
        let mut report = FetchReport::default();

        for download in plan_downloads(record, prefix) {
            let dest = target_dir.join(&download.filename);
            tracing::info!("+ Download {}", download.filename);

            let existed = dest.exists();
            match self.fetcher.fetch_to_file(&download.url, &dest).await {
                Ok(bytes) => {
                    tracing::debug!("Wrote {} bytes to {:?}", bytes, dest);
                    report.downloaded.push(dest);
                }
                Err(e) => {
                    tracing::warn!("Failed to download '{}': {}", download.url, e);
                    if !existed && dest.exists() {
                        if let Err(e) = tokio::fs::remove_file(&dest).await {
                            tracing::debug!("Cannot remove partial file {:?}: {}", dest, e);
                        }
                    }
                    report.failed.push(download.url);
                }
            }
        }

        report
    }
}
