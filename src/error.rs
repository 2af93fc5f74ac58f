//! Error types for capfetch.

/// Result type alias for capfetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for capfetch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Cache directory could not be determined.
    #[error("could not determine cache directory for this platform")]
    CacheDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to read manifest file.
    #[error("failed to read manifest '{path}'")]
    ManifestRead {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse manifest file.
    #[error("failed to parse manifest '{path}'")]
    ManifestParse {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Manifest row failed validation.
    #[error("invalid manifest row in '{path}': {message}")]
    InvalidManifestRow {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Description of the validation failure.
        message: String,
    },

    /// Manifest contains no rows.
    #[error("manifest '{path}' contains no rows")]
    NoRows {
        /// Path to the manifest file.
        path: std::path::PathBuf,
    },

    /// Manifest has no caption column.
    #[error("manifest '{path}' has no '{column}' column")]
    MissingCaptionColumn {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Expected column header.
        column: String,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write status CSV.
    #[error("failed to write status file '{path}'")]
    StatusWrite {
        /// Path to the status file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write JSON report file.
    #[error("failed to write report file '{path}'")]
    ReportWrite {
        /// Path to the report file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write caption file.
    #[error("failed to write caption file '{path}'")]
    CaptionWrite {
        /// Path to the caption file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Download failed.
    #[error("failed to download from '{url}'")]
    DownloadFailed {
        /// URL that failed.
        url: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// External downloader program is not runnable.
    #[error("downloader '{program}' is not available: {reason}")]
    DownloaderUnavailable {
        /// Program that could not be run.
        program: String,
        /// Description of the failure.
        reason: String,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
