//! Clip manifest handling.
//!
//! This module provides manifest parsing, remote manifest retrieval, and
//! status CSV output for recording per-row fetch outcomes.

mod parser;
mod remote;
mod status;

pub use parser::{Manifest, ManifestRow, read_manifest};
pub use remote::{fetch_remote_manifest, is_remote, remote_filename};
pub use status::{RowDisposition, RowRecord, status_path_for, write_status};
