//! Manifest file parsing.
//!
//! Parses CSV clip manifests with `identifier`, `start_time`, `end_time`,
//! and an optional `caption` column. Uses the `csv` crate for robust parsing.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::manifest::CAPTION;
use crate::error::{Error, Result};

/// Internal record for CSV deserialization.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "youtube_id", alias = "ytid")]
    identifier: String,
    start_time: u32,
    end_time: u32,
    #[serde(default)]
    caption: Option<String>,
}

/// A single clip row parsed from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRow {
    /// Source recording identifier, e.g. a video ID.
    pub identifier: String,
    /// Clip start offset in seconds.
    pub start_time: u32,
    /// Clip end offset in seconds.
    pub end_time: u32,
    /// Caption text, if the manifest carries captions and the cell is non-empty.
    pub caption: Option<String>,
}

/// A parsed manifest: its rows plus where it came from.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was read from.
    pub path: PathBuf,
    /// Parsed rows, in file order.
    pub rows: Vec<ManifestRow>,
    /// Whether the file has a caption column.
    pub has_captions: bool,
}

/// Parse a manifest file.
///
/// Expects a header row with `identifier` (or `youtube_id`/`ytid`),
/// `start_time`, and `end_time` columns; `caption` is optional. Handles
/// quoted fields with embedded commas and escaped quotes, and trims
/// surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the file cannot be read, any row fails to parse or
/// validate, or the manifest contains no rows.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::ManifestRead {
            path: path.to_path_buf(),
            source: std::io::Error::other(e),
        })?;

    let has_captions = reader
        .headers()
        .map_err(|e| Error::ManifestParse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?
        .iter()
        .any(|header| header == CAPTION);

    let mut rows = Vec::new();

    for (line_num, result) in reader.deserialize::<RawRow>().enumerate() {
        let record = result.map_err(|e| Error::InvalidManifestRow {
            path: path.to_path_buf(),
            message: format!("line {}: {e}", line_num + 2),
        })?;

        validate_row(&record, path, line_num + 2)?;

        rows.push(ManifestRow {
            identifier: record.identifier,
            start_time: record.start_time,
            end_time: record.end_time,
            caption: record.caption,
        });
    }

    if rows.is_empty() {
        return Err(Error::NoRows {
            path: path.to_path_buf(),
        });
    }

    Ok(Manifest {
        path: path.to_path_buf(),
        rows,
        has_captions,
    })
}

/// Validate a raw row's fields.
fn validate_row(record: &RawRow, path: &Path, line: usize) -> Result<()> {
    if record.identifier.is_empty() {
        return Err(Error::InvalidManifestRow {
            path: path.to_path_buf(),
            message: format!("line {line}: identifier must not be empty"),
        });
    }

    if record.end_time <= record.start_time {
        return Err(Error::InvalidManifestRow {
            path: path.to_path_buf(),
            message: format!(
                "line {line}: end_time ({}) must be greater than start_time ({})",
                record.end_time, record.start_time
            ),
        });
    }

    Ok(())
}
