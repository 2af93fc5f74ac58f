//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::MAX_JOBS;
use crate::constants::downloader::AUDIO_FORMATS;

/// Batch downloader for captioned audio clips.
#[derive(Debug, Parser)]
#[command(name = "capfetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Manifest CSV files or URLs to process.
    pub manifests: Vec<String>,

    /// Use this config file instead of the platform default.
    #[arg(long, global = true, env = "CAPFETCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Common options for fetching.
    #[command(flatten)]
    pub fetch: FetchArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export caption text files from manifests.
    Captions {
        /// Manifest CSV files or URLs to export captions from.
        #[arg(required = true)]
        manifests: Vec<String>,

        /// Output directory for caption files.
        #[arg(short, long, env = "CAPFETCH_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,
    },
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Verify the downloader program is runnable.
    Check,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Output directory for clips (default: clips).
    #[arg(short, long, env = "CAPFETCH_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Download attempts per row (default: 5).
    #[arg(short, long, value_parser = parse_attempts, env = "CAPFETCH_ATTEMPTS")]
    pub attempts: Option<u32>,

    /// Audio format to extract (aac, alac, flac, m4a, mp3, opus, vorbis, wav).
    #[arg(long, value_parser = parse_audio_format, env = "CAPFETCH_AUDIO_FORMAT")]
    pub audio_format: Option<String>,

    /// Downloader program to invoke (default: yt-dlp).
    #[arg(long, env = "CAPFETCH_DOWNLOADER")]
    pub downloader: Option<String>,

    /// Number of rows to fetch in parallel (default: 1).
    #[arg(short, long, value_parser = parse_jobs, env = "CAPFETCH_JOBS")]
    pub jobs: Option<usize>,

    /// Refetch clips even if the destination file exists.
    #[arg(long)]
    pub force: bool,

    /// Write one combined status CSV to this path.
    #[arg(long)]
    pub status_out: Option<PathBuf>,

    /// Write a JSON run report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable progress bars.
    #[arg(long)]
    pub no_progress: bool,
}

/// Parse and validate the attempt cap.
fn parse_attempts(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value == 0 {
        return Err("attempts must be at least 1".to_string());
    }

    Ok(value)
}

/// Parse and validate the worker count.
fn parse_jobs(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(1..=MAX_JOBS).contains(&value) {
        return Err(format!("jobs must be between 1 and {MAX_JOBS}, got {value}"));
    }

    Ok(value)
}

/// Parse and validate the audio format.
fn parse_audio_format(s: &str) -> Result<String, String> {
    let format = s.to_ascii_lowercase();

    if AUDIO_FORMATS.contains(&format.as_str()) {
        Ok(format)
    } else {
        Err(format!(
            "unsupported audio format '{s}', expected one of: {}",
            AUDIO_FORMATS.join(", ")
        ))
    }
}
