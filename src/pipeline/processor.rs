//! Single manifest row processing.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::constants::{INTERRUPTED_MESSAGE, SKIPPED_MESSAGE};
use crate::fetcher::{ClipFetcher, ClipRequest, ClipWindow};
use crate::manifest::{ManifestRow, RowDisposition, RowRecord};
use crate::pipeline::{FetchCheck, destination_for, should_fetch};

/// Process a single manifest row.
///
/// Resolves the destination path, skips rows whose clip already exists
/// (unless `force`), and otherwise fetches the padded window around the
/// labeled segment. Fetch failures are recorded in the returned record,
/// never propagated, so one bad row cannot stop a batch.
pub fn process_row(
    row: &ManifestRow,
    fetcher: &ClipFetcher,
    output_dir: &Path,
    audio_format: &str,
    force: bool,
) -> RowRecord {
    let destination = destination_for(&row.identifier, output_dir, audio_format);

    if matches!(should_fetch(&destination, force), FetchCheck::SkipExists) {
        info!("Skipping (clip exists): {}", destination.display());
        return RowRecord {
            row: row.clone(),
            audio_path: destination,
            disposition: RowDisposition::Skipped,
            message: SKIPPED_MESSAGE.to_string(),
        };
    }

    let window = ClipWindow::new(row.start_time, row.end_time).padded();
    debug!(
        "Fetching {} window {} -> {}",
        row.identifier,
        window,
        destination.display()
    );

    let outcome = fetcher.fetch(&ClipRequest {
        identifier: row.identifier.clone(),
        destination: destination.clone(),
        window,
    });

    let disposition = if outcome.success {
        RowDisposition::Downloaded
    } else {
        warn!("Failed: {} ({})", row.identifier, outcome.message);
        RowDisposition::Failed
    };

    RowRecord {
        row: row.clone(),
        audio_path: destination,
        disposition,
        message: outcome.message,
    }
}

/// Record for a row that was never attempted because the run was interrupted.
pub fn interrupted_record(row: &ManifestRow, output_dir: &Path, audio_format: &str) -> RowRecord {
    RowRecord {
        row: row.clone(),
        audio_path: destination_for(&row.identifier, output_dir, audio_format),
        disposition: RowDisposition::Failed,
        message: INTERRUPTED_MESSAGE.to_string(),
    }
}
