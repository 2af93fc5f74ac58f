//! The seam between clip fetching and the external download tool.

use crate::fetcher::ClipWindow;
use std::path::Path;

/// A single clip extraction request passed to the external tool.
#[derive(Debug, Clone)]
pub struct ClipSpec<'a> {
    /// Row identifier the source URL is derived from.
    pub identifier: &'a str,
    /// Destination file the tool is expected to produce.
    pub destination: &'a Path,
    /// Padded time window to cut from the source.
    pub window: ClipWindow,
}

/// Failure of a single extraction attempt.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ExtractError {
    /// Diagnostic text, usually the tool's captured error output.
    pub message: String,
}

impl ExtractError {
    /// Create an error from diagnostic text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Performs a single clip extraction attempt.
///
/// `Ok` means the tool reported success; whether the destination file
/// actually exists is checked by the caller. The `Ok` value is the tool's
/// captured error stream, kept so a success that produced no file can still
/// be reported in the tool's own words.
pub trait Extractor: Send + Sync {
    /// Run one extraction attempt for `spec`.
    fn extract(&self, spec: &ClipSpec<'_>) -> Result<String, ExtractError>;
}
