//! Configuration type definitions.

use crate::constants::{DEFAULT_JOBS, DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_DIR, downloader};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default fetch settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// External downloader settings.
    #[serde(default)]
    pub downloader: DownloaderConfig,
}

/// Default fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Output directory for fetched clips.
    pub output_dir: PathBuf,

    /// Maximum download attempts per clip.
    pub max_attempts: u32,

    /// Parallel download workers.
    pub jobs: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            jobs: DEFAULT_JOBS,
        }
    }
}

/// External downloader invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloaderConfig {
    /// Program to run.
    pub program: String,

    /// Source URL template; `{id}` is replaced with the row identifier.
    pub url_template: String,

    /// Audio format the tool extracts to.
    pub audio_format: String,

    /// Suppress the tool's own output (`--quiet --no-warnings`).
    pub quiet: bool,

    /// Additional arguments inserted before the URL.
    pub extra_args: Vec<String>,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            program: downloader::DEFAULT_PROGRAM.to_string(),
            url_template: downloader::DEFAULT_URL_TEMPLATE.to_string(),
            audio_format: downloader::DEFAULT_AUDIO_FORMAT.to_string(),
            quiet: true,
            extra_args: Vec::new(),
        }
    }
}
