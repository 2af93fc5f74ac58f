//! JSON run report output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;
use crate::manifest::{RowDisposition, RowRecord};

/// JSON report file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    /// Manifest sources processed, in order.
    pub manifests: Vec<String>,
    /// Report timestamp.
    pub generated_at: DateTime<Utc>,
    /// Run settings.
    pub settings: ReportSettings,
    /// Per-row outcomes.
    pub rows: Vec<ReportRow>,
    /// Summary statistics.
    pub summary: ReportSummary,
}

/// Run settings for the JSON report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Output directory for clips.
    pub output_dir: String,
    /// Attempt cap per row.
    pub max_attempts: u32,
    /// Parallel worker count.
    pub jobs: usize,
    /// Audio format extracted.
    pub audio_format: String,
    /// Downloader program used.
    pub downloader: String,
}

/// Single row outcome in JSON format.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportRow {
    /// Row identifier.
    pub identifier: String,
    /// Clip start offset in seconds.
    pub start_time: u32,
    /// Clip end offset in seconds.
    pub end_time: u32,
    /// Destination clip path.
    pub audio_path: String,
    /// Whether the clip exists after the run.
    pub download_status: bool,
    /// Outcome detail, e.g. the downloader's last error.
    pub detail: String,
}

impl ReportRow {
    fn from_record(record: &RowRecord) -> Self {
        Self {
            identifier: record.row.identifier.clone(),
            start_time: record.row.start_time,
            end_time: record.row.end_time,
            audio_path: record.audio_path.display().to_string(),
            download_status: record.succeeded(),
            detail: record.message.clone(),
        }
    }
}

/// Summary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of rows processed.
    pub total_rows: usize,
    /// Rows downloaded this run.
    pub downloaded: usize,
    /// Rows skipped because the clip already existed.
    pub skipped: usize,
    /// Rows that failed every attempt.
    pub failed: usize,
}

impl ReportSummary {
    /// Compute summary counts from row records.
    #[must_use]
    pub fn from_records(records: &[RowRecord]) -> Self {
        let mut summary = Self {
            total_rows: records.len(),
            downloaded: 0,
            skipped: 0,
            failed: 0,
        };

        for record in records {
            match record.disposition {
                RowDisposition::Downloaded => summary.downloaded += 1,
                RowDisposition::Skipped => summary.skipped += 1,
                RowDisposition::Failed => summary.failed += 1,
            }
        }

        summary
    }
}

impl RunReport {
    /// Build a report for a finished run.
    #[must_use]
    pub fn new(manifests: Vec<String>, settings: ReportSettings, records: &[RowRecord]) -> Self {
        Self {
            manifests,
            generated_at: Utc::now(),
            settings,
            rows: records.iter().map(ReportRow::from_record).collect(),
            summary: ReportSummary::from_records(records),
        }
    }
}

/// Write a run report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails.
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report).map_err(|e| crate::error::Error::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
