//! Remote manifest retrieval.
//!
//! Manifests can be given as HTTP(S) URLs; they are downloaded into the
//! platform cache directory before parsing.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::filename::sanitize_identifier;

/// Check whether a manifest source is a remote URL.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Download a remote manifest into the cache directory.
///
/// Returns the local path of the downloaded copy. The file is re-fetched on
/// every run so upstream edits are picked up.
///
/// # Errors
///
/// Returns an error if the cache directory cannot be created or the
/// download fails.
pub fn fetch_remote_manifest(url: &str, quiet: bool) -> Result<PathBuf> {
    let cache_dir = crate::config::cache_dir()?.join("manifests");
    std::fs::create_dir_all(&cache_dir).map_err(Error::Io)?;

    let dest = cache_dir.join(remote_filename(url));
    debug!("Caching remote manifest at {}", dest.display());

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let client = Client::builder()
        .connect_timeout(std::time::Duration::from_secs(30))
        .timeout(std::time::Duration::from_secs(300))
        .build()
        .map_err(|e| Error::Internal {
            message: format!("Failed to create HTTP client: {e}"),
        })?;

    runtime.block_on(async { download_file(&client, url, &dest, quiet).await })?;

    Ok(dest)
}

/// Download a file with progress bar.
async fn download_file(client: &Client, url: &str, dest: &Path, quiet: bool) -> Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

    if !response.status().is_success() {
        return Err(Error::DownloadFailed {
            url: url.to_string(),
            source: format!("HTTP {}", response.status()).into(),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{bar:40.cyan/blue} {percent}% ({bytes}/{total_bytes})")
                .map_err(|e| Error::Internal {
                    message: format!("Failed to create progress bar: {e}"),
                })?
                .progress_chars("█▓▒░ "),
        );
        // Use to_string_lossy() to handle non-UTF-8 filenames gracefully
        pb.set_message(format!(
            "Downloading {}...",
            dest.file_name().map_or_else(
                || std::borrow::Cow::Borrowed("manifest"),
                |n| n.to_string_lossy()
            )
        ));
        pb
    };

    // Stream download
    let mut file = File::create(dest).await.map_err(Error::Io)?;
    let mut stream = response.bytes_stream();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        file.write_all(&chunk).await.map_err(Error::Io)?;

        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush().await.map_err(Error::Io)?;
    pb.finish_and_clear();

    Ok(())
}

/// Derive a cache filename from a manifest URL.
///
/// Strips the query string and fragment, takes the last path segment, and
/// sanitizes it for use as a filename. Falls back to `manifest.csv` when
/// the URL has no usable segment.
#[must_use]
pub fn remote_filename(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or("");
    let name = sanitize_identifier(segment);

    if name.is_empty() {
        "manifest.csv".to_string()
    } else {
        name
    }
}
