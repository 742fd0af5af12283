//! Image downloads.

use crate::Result;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// Transfers the body of a URL into a file.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Download `url` into `dest`, returning the number of bytes written.
    ///
    /// An existing `dest` is only replaced once the transfer completes.
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Streaming HTTP downloader.
pub struct HttpFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a downloader resolving server-relative URLs against `base_url`.
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    /// Absolute URL for an image reference.
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}

fn progress_bar(len: Option<u64>, name: &str) -> ProgressBar {
    match len {
        Some(len) => {
            let pb = ProgressBar::new(len);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {msg} [{bar:30.cyan/blue}] {bytes}/{total_bytes}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=>-"),
            );
            pb.set_message(name.to_string());
            pb
        }
        None => ProgressBar::hidden(),
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64> {
        let url = self.resolve_url(url);
        tracing::debug!("Downloading '{}'", url);

        let mut response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(crate::Error::DownloadStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let pb = progress_bar(response.content_length(), &name);

        // Stream into a sibling file so a failed transfer never clobbers `dest`
        let part = partial_path(dest);
        let written = match stream_to_file(&mut response, &part, &pb).await {
            Ok(written) => written,
            Err(e) => {
                pb.abandon();
                if let Err(e) = tokio::fs::remove_file(&part).await {
                    tracing::debug!("Cannot remove partial file {:?}: {}", part, e);
                }
                return Err(e);
            }
        };
        tokio::fs::rename(&part, dest).await?;
        pb.finish_and_clear();

        Ok(written)
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

async fn stream_to_file(
    response: &mut reqwest::Response,
    path: &Path,
    pb: &ProgressBar,
) -> Result<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
        pb.set_position(written);
    }
    file.flush().await?;
    Ok(written)
}
