//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "capfetch";

/// Default maximum download attempts per clip.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default number of parallel download workers.
pub const DEFAULT_JOBS: usize = 1;

/// Maximum allowed parallel download workers.
///
/// Each worker spawns its own external downloader process. Remote services
/// throttle or ban clients that open too many connections at once, so the
/// cap stays well below what the local machine could run.
pub const MAX_JOBS: usize = 64;

/// Default output directory for fetched clips.
pub const DEFAULT_OUTPUT_DIR: &str = "clips";

/// Clip window adjustment in seconds.
pub mod window {
    /// Padding applied on both sides of a clip when the start time allows it.
    pub const PADDING_SECS: u32 = 15;

    /// Start times at or below this threshold cannot absorb pre-padding;
    /// the full padding is applied to the end of the clip instead.
    pub const NEAR_START_THRESHOLD_SECS: u32 = 15;

    /// Total extension applied to the end when the start is near zero.
    pub const NEAR_START_EXTENSION_SECS: u32 = 30;
}

/// External downloader defaults.
pub mod downloader {
    /// Default downloader program.
    pub const DEFAULT_PROGRAM: &str = "yt-dlp";

    /// Default URL template; `{id}` is replaced with the row identifier.
    pub const DEFAULT_URL_TEMPLATE: &str = "https://www.youtube.com/watch?v={id}";

    /// Default extracted audio format.
    pub const DEFAULT_AUDIO_FORMAT: &str = "wav";

    /// Audio formats the downloader is known to extract to.
    pub const AUDIO_FORMATS: &[&str] =
        &["aac", "alac", "flac", "m4a", "mp3", "opus", "vorbis", "wav"];
}

/// Manifest column headers.
pub mod manifest {
    /// Identifier column header.
    pub const IDENTIFIER: &str = "identifier";

    /// Clip start time column header.
    pub const START_TIME: &str = "start_time";

    /// Clip end time column header.
    pub const END_TIME: &str = "end_time";

    /// Caption column header.
    pub const CAPTION: &str = "caption";

    /// Destination path column appended to the status CSV.
    pub const AUDIO_PATH: &str = "audio_path";

    /// Success flag column appended to the status CSV.
    pub const DOWNLOAD_STATUS: &str = "download_status";
}

/// Status CSV filename suffix, appended to the manifest stem.
pub const STATUS_SUFFIX: &str = ".status.csv";

/// Caption sidecar file extension.
pub const CAPTION_EXTENSION: &str = "txt";

/// Message recorded for rows that downloaded successfully.
pub const DOWNLOADED_MESSAGE: &str = "Downloaded";

/// Message recorded for rows skipped because the destination file exists.
pub const SKIPPED_MESSAGE: &str = "already exists";

/// Message recorded for rows left pending when the run is interrupted.
pub const INTERRUPTED_MESSAGE: &str = "interrupted";
