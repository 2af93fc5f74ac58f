//! Clip fetching with bounded retries and a filesystem post-condition.

use crate::constants::DOWNLOADED_MESSAGE;
use crate::fetcher::{ClipSpec, ClipWindow, Extractor, retry};
use std::path::PathBuf;
use tracing::debug;

/// What to fetch and where to put it.
#[derive(Debug, Clone)]
pub struct ClipRequest {
    /// Row identifier the source URL is derived from.
    pub identifier: String,
    /// Destination file for the extracted clip.
    pub destination: PathBuf,
    /// Padded time window to cut from the source.
    pub window: ClipWindow,
}

/// Result of fetching one clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Whether the clip file exists at the destination.
    pub success: bool,
    /// "Downloaded" on success, the last attempt's diagnostic otherwise.
    pub message: String,
    /// Extractor invocations made before returning, counting the last one.
    pub attempts: u32,
}

impl FetchOutcome {
    fn downloaded(attempts: u32) -> Self {
        Self {
            success: true,
            message: DOWNLOADED_MESSAGE.to_string(),
            attempts,
        }
    }

    fn failed(message: String, attempts: u32) -> Self {
        Self {
            success: false,
            message,
            attempts,
        }
    }
}

/// Downloads clips through an [`Extractor`] with bounded retries.
///
/// Success is decided by the filesystem, not the tool's exit status: a fetch
/// counts as downloaded only when the destination file exists afterwards.
pub struct ClipFetcher {
    extractor: Box<dyn Extractor>,
    max_attempts: u32,
}

impl ClipFetcher {
    /// Create a fetcher that retries each clip up to `max_attempts` times.
    #[must_use]
    pub fn new(extractor: Box<dyn Extractor>, max_attempts: u32) -> Self {
        Self {
            extractor,
            max_attempts,
        }
    }

    /// Fetch a single clip.
    ///
    /// Intermediate attempt failures are logged at debug level only; the
    /// returned outcome carries the final attempt's diagnostic when every
    /// attempt fails.
    pub fn fetch(&self, request: &ClipRequest) -> FetchOutcome {
        let spec = ClipSpec {
            identifier: &request.identifier,
            destination: &request.destination,
            window: request.window,
        };

        let mut attempts = 0;
        let result = retry::with_attempts(self.max_attempts, |attempt| {
            attempts = attempt;
            match self.extractor.extract(&spec) {
                Ok(diagnostics) => Ok(diagnostics),
                Err(e) => {
                    debug!(
                        "Attempt {}/{} failed for {}: {}",
                        attempt, self.max_attempts, request.identifier, e
                    );
                    Err(e)
                }
            }
        });

        match result {
            Ok(diagnostics) => {
                // The tool picks the final filename; trust only the filesystem.
                if request.destination.exists() {
                    FetchOutcome::downloaded(attempts)
                } else if diagnostics.is_empty() {
                    FetchOutcome::failed(
                        format!("no file at '{}' after fetch", request.destination.display()),
                        attempts,
                    )
                } else {
                    FetchOutcome::failed(diagnostics, attempts)
                }
            }
            Err(e) => FetchOutcome::failed(e.message, attempts),
        }
    }
}
