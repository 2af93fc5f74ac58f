//! Caption file export.
//!
//! Writes each manifest row's caption to `<identifier>.txt` in the output
//! directory, pairing caption text with the downloaded clips.

use std::path::Path;

use crate::constants::CAPTION_EXTENSION;
use crate::constants::manifest::CAPTION;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::utils::filename::sanitize_identifier;

/// Write one caption file per manifest row.
///
/// The file content is exactly the caption cell; an empty cell produces an
/// empty file. Rows sharing an identifier overwrite each other, last row
/// wins. Returns the number of rows written.
///
/// # Errors
///
/// Returns an error if the manifest has no caption column, the output
/// directory cannot be created, or a file cannot be written.
pub fn write_caption_files(manifest: &Manifest, output_dir: &Path) -> Result<usize> {
    if !manifest.has_captions {
        return Err(Error::MissingCaptionColumn {
            path: manifest.path.clone(),
            column: CAPTION.to_string(),
        });
    }

    std::fs::create_dir_all(output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut written = 0;

    for row in &manifest.rows {
        let filename = format!(
            "{}.{CAPTION_EXTENSION}",
            sanitize_identifier(&row.identifier)
        );
        let path = output_dir.join(filename);

        std::fs::write(&path, row.caption.as_deref().unwrap_or("")).map_err(|e| {
            Error::CaptionWrite {
                path: path.clone(),
                source: e,
            }
        })?;

        written += 1;
    }

    Ok(written)
}
