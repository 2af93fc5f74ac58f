//! Pipeline coordination for manifest row processing.

use std::path::{Path, PathBuf};

use crate::utils::filename::sanitize_identifier;

/// Result of checking whether a row should be fetched.
#[derive(Debug)]
pub enum FetchCheck {
    /// Clip should be fetched.
    Fetch,
    /// Skip - destination clip already exists.
    SkipExists,
}

/// Destination clip path for a manifest row.
///
/// The identifier is sanitized so hostile values cannot escape the output
/// directory.
#[must_use]
pub fn destination_for(identifier: &str, output_dir: &Path, audio_format: &str) -> PathBuf {
    output_dir.join(format!("{}.{audio_format}", sanitize_identifier(identifier)))
}

/// Check whether a clip should be fetched.
#[must_use]
pub fn should_fetch(destination: &Path, force: bool) -> FetchCheck {
    if !force && destination.exists() {
        return FetchCheck::SkipExists;
    }

    FetchCheck::Fetch
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_destination_for() {
        let dest = destination_for("abc123", Path::new("clips"), "wav");
        assert_eq!(dest, PathBuf::from("clips/abc123.wav"));
    }

    #[test]
    fn test_destination_for_sanitizes_identifier() {
        let dest = destination_for("../abc/123", Path::new("clips"), "flac");
        assert_eq!(dest, PathBuf::from("clips/___abc_123.flac"));
    }

    #[test]
    fn test_should_fetch_missing_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("abc123.wav");
        assert!(matches!(should_fetch(&dest, false), FetchCheck::Fetch));
    }

    #[test]
    fn test_should_fetch_skips_existing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("abc123.wav");
        std::fs::write(&dest, b"audio").unwrap();

        assert!(matches!(should_fetch(&dest, false), FetchCheck::SkipExists));
    }

    #[test]
    fn test_should_fetch_force_overrides_existing() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("abc123.wav");
        std::fs::write(&dest, b"audio").unwrap();

        assert!(matches!(should_fetch(&dest, true), FetchCheck::Fetch));
    }
}
