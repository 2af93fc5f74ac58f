//! Status CSV output.
//!
//! Records the per-row outcome of a fetch run next to the downloaded clips,
//! echoing the manifest columns plus `audio_path` and `download_status`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::STATUS_SUFFIX;
use crate::constants::manifest::{
    AUDIO_PATH, CAPTION, DOWNLOAD_STATUS, END_TIME, IDENTIFIER, START_TIME,
};
use crate::error::{Error, Result};
use crate::manifest::ManifestRow;

/// How a manifest row was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDisposition {
    /// Clip was fetched and written.
    Downloaded,
    /// Destination already existed; nothing to do.
    Skipped,
    /// All fetch attempts failed.
    Failed,
}

/// Outcome of processing one manifest row.
#[derive(Debug, Clone)]
pub struct RowRecord {
    /// The manifest row this record describes.
    pub row: ManifestRow,
    /// Destination path of the clip.
    pub audio_path: PathBuf,
    /// How the row was handled.
    pub disposition: RowDisposition,
    /// Outcome detail, e.g. the downloader's last error.
    pub message: String,
}

impl RowRecord {
    /// Whether the clip is present at `audio_path` after the run.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        !matches!(self.disposition, RowDisposition::Failed)
    }
}

/// Default status file path for a manifest: `<output_dir>/<stem>.status.csv`.
#[must_use]
pub fn status_path_for(manifest_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = manifest_path
        .file_stem()
        .map_or_else(|| "manifest".to_string(), |s| s.to_string_lossy().into_owned());

    output_dir.join(format!("{stem}{STATUS_SUFFIX}"))
}

/// Write a status CSV for the given records.
///
/// The caption column is included only when `include_caption` is set, so the
/// status file mirrors the manifest it came from.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_status(path: &Path, records: &[RowRecord], include_caption: bool) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::StatusWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records, include_caption).map_err(|e| Error::StatusWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_records(
    writer: &mut impl Write,
    records: &[RowRecord],
    include_caption: bool,
) -> std::io::Result<()> {
    let mut header = format!("{IDENTIFIER},{START_TIME},{END_TIME}");
    if include_caption {
        header.push(',');
        header.push_str(CAPTION);
    }
    header.push(',');
    header.push_str(AUDIO_PATH);
    header.push(',');
    header.push_str(DOWNLOAD_STATUS);
    writeln!(writer, "{header}")?;

    for record in records {
        write!(
            writer,
            "{},{},{}",
            escape_csv(&record.row.identifier),
            record.row.start_time,
            record.row.end_time,
        )?;

        if include_caption {
            write!(
                writer,
                ",{}",
                escape_csv(record.row.caption.as_deref().unwrap_or(""))
            )?;
        }

        writeln!(
            writer,
            ",{},{}",
            escape_csv(&record.audio_path.display().to_string()),
            record.succeeded(),
        )?;
    }

    writer.flush()
}

/// Escape a value for CSV output.
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn record(identifier: &str, disposition: RowDisposition, message: &str) -> RowRecord {
        RowRecord {
            row: ManifestRow {
                identifier: identifier.to_string(),
                start_time: 30,
                end_time: 40,
                caption: Some("A dog barks".to_string()),
            },
            audio_path: PathBuf::from(format!("clips/{identifier}.wav")),
            disposition,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_write_status_basic() {
        let file = NamedTempFile::new().unwrap();
        let records = vec![
            record("abc123", RowDisposition::Downloaded, "Downloaded"),
            record("def456", RowDisposition::Failed, "ERROR: video unavailable"),
        ];

        write_status(file.path(), &records, true).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "identifier,start_time,end_time,caption,audio_path,download_status"
        );
        assert_eq!(lines[1], "abc123,30,40,A dog barks,clips/abc123.wav,true");
        assert_eq!(lines[2], "def456,30,40,A dog barks,clips/def456.wav,false");
    }

    #[test]
    fn test_write_status_without_caption_column() {
        let file = NamedTempFile::new().unwrap();
        let records = vec![record("abc123", RowDisposition::Downloaded, "Downloaded")];

        write_status(file.path(), &records, false).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "identifier,start_time,end_time,audio_path,download_status"
        );
        assert_eq!(lines[1], "abc123,30,40,clips/abc123.wav,true");
    }

    #[test]
    fn test_skipped_rows_count_as_success() {
        let skipped = record("abc123", RowDisposition::Skipped, "already exists");
        assert!(skipped.succeeded());

        let failed = record("abc123", RowDisposition::Failed, "boom");
        assert!(!failed.succeeded());
    }

    #[test]
    fn test_caption_with_comma_is_quoted() {
        let file = NamedTempFile::new().unwrap();
        let mut rec = record("abc123", RowDisposition::Downloaded, "Downloaded");
        rec.row.caption = Some("Thunder, then rain".to_string());

        write_status(file.path(), &[rec], true).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("\"Thunder, then rain\""));
    }

    #[test]
    fn test_status_path_for() {
        let path = status_path_for(Path::new("data/train.csv"), Path::new("clips"));
        assert_eq!(path, PathBuf::from("clips/train.status.csv"));
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }
}
