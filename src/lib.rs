//! Capfetch - captioned audio clip fetching CLI tool.
//!
//! This crate batch-downloads audio clips listed in CSV manifests by driving
//! an external downloader such as `yt-dlp`, and pairs the clips with their
//! caption text.

#![warn(missing_docs)]

pub mod captions;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod utils;

use clap::Parser;
use cli::{Cli, Command, FetchArgs};
use config::{Config, DownloaderConfig, config_file_path, load_config_file, load_default_config};
use fetcher::{ClipFetcher, CommandDownloader};
use manifest::{Manifest, RowRecord};
use output::{ReportSettings, ReportSummary, RunReport, write_report};
use pipeline::{interrupted_record, process_row};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for capfetch CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.fetch.verbose, cli.fetch.quiet);

    // Load configuration
    let config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => load_default_config()?,
    };
    config::validate_config(&config)?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, cli.config.as_deref(), &cli.fetch, &config);
    }

    // Default: fetch clips
    // Show help if no manifests provided
    if cli.manifests.is_empty() {
        let configured = resolve_config_path(cli.config.as_deref()).is_ok_and(|path| path.exists());
        cli::help::print_smart_help(configured);
        std::process::exit(0);
    }

    fetch_manifests(&cli.manifests, &cli.fetch, &config)
}

/// Fetch clips for every row of the given manifests.
fn fetch_manifests(sources: &[String], args: &FetchArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    // Resolve settings (CLI overrides config)
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.defaults.output_dir.clone());
    let max_attempts = args.attempts.unwrap_or(config.defaults.max_attempts);
    let jobs = args.jobs.unwrap_or(config.defaults.jobs);

    let downloader_config = resolve_downloader(args, config);
    config::validate_downloader(&downloader_config)?;
    let audio_format = downloader_config.audio_format.clone();
    let downloader_program = downloader_config.program.clone();

    std::fs::create_dir_all(&output_dir).map_err(|e| Error::OutputDirCreateFailed {
        path: output_dir.clone(),
        source: e,
    })?;

    let fetcher = ClipFetcher::new(
        Box::new(CommandDownloader::new(downloader_config)),
        max_attempts,
    );

    // Ctrl+C lets in-flight rows finish and marks the rest interrupted, so
    // status files still get written for work already done.
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::SeqCst);
        }) {
            warn!("Failed to install Ctrl+C handler: {e}");
        }
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| Error::Internal {
            message: format!("Failed to create worker pool: {e}"),
        })?;

    let progress_enabled = !args.quiet && !args.no_progress;

    let mut all_records: Vec<RowRecord> = Vec::new();
    let mut combined_captions = true;

    for source in sources {
        let manifest = load_manifest(source, args.quiet)?;
        info!(
            "Fetching {} row(s) from {}",
            manifest.rows.len(),
            manifest.path.display()
        );
        combined_captions = combined_captions && manifest.has_captions;

        let manifest_start = Instant::now();
        let row_progress = progress::create_row_progress(manifest.rows.len(), progress_enabled);

        let records: Vec<RowRecord> = pool.install(|| {
            manifest
                .rows
                .par_iter()
                .map(|row| {
                    let record = if interrupted.load(Ordering::SeqCst) {
                        interrupted_record(row, &output_dir, &audio_format)
                    } else {
                        process_row(row, &fetcher, &output_dir, &audio_format, args.force)
                    };
                    progress::inc_progress(row_progress.as_ref());
                    record
                })
                .collect()
        });

        progress::finish_progress(row_progress, "Complete");

        let summary = ReportSummary::from_records(&records);
        let duration = manifest_start.elapsed().as_secs_f64();
        info!(
            "Complete: {} downloaded, {} skipped, {} failed in {:.2}s",
            summary.downloaded, summary.skipped, summary.failed, duration
        );
        #[allow(clippy::cast_precision_loss)]
        let rows_per_sec = if duration > 0.0 {
            records.len() as f64 / duration
        } else {
            0.0
        };
        info!("Performance: {:.1} rows/sec", rows_per_sec);
        if summary.failed > 0 {
            warn!("{} row(s) failed", summary.failed);
        }

        // One status file per manifest unless a combined path was requested
        if args.status_out.is_none() {
            let status_path = manifest::status_path_for(&manifest.path, &output_dir);
            manifest::write_status(&status_path, &records, manifest.has_captions)?;
            info!("Status written to {}", status_path.display());
        }

        all_records.extend(records);

        if interrupted.load(Ordering::SeqCst) {
            warn!("Interrupted; skipping remaining manifests");
            break;
        }
    }

    if let Some(path) = &args.status_out {
        manifest::write_status(path, &all_records, combined_captions)?;
        info!("Status written to {}", path.display());
    }

    if let Some(path) = &args.report {
        let report = RunReport::new(
            sources.to_vec(),
            ReportSettings {
                output_dir: output_dir.display().to_string(),
                max_attempts,
                jobs,
                audio_format: audio_format.clone(),
                downloader: downloader_program,
            },
            &all_records,
        );
        write_report(path, &report)?;
        info!("Report written to {}", path.display());
    }

    if sources.len() > 1 {
        let overall = ReportSummary::from_records(&all_records);
        let total_duration = total_start.elapsed().as_secs_f64();
        info!(
            "All manifests: {} downloaded, {} skipped, {} failed in {:.2}s",
            overall.downloaded, overall.skipped, overall.failed, total_duration
        );
    }

    Ok(())
}

/// Resolve a manifest source to a local file and parse it.
fn load_manifest(source: &str, quiet: bool) -> Result<Manifest> {
    let path = if manifest::is_remote(source) {
        info!("Fetching remote manifest: {source}");
        manifest::fetch_remote_manifest(source, quiet)?
    } else {
        PathBuf::from(source)
    };

    manifest::read_manifest(&path)
}

/// Apply CLI downloader overrides on top of the configured downloader.
fn resolve_downloader(args: &FetchArgs, config: &Config) -> DownloaderConfig {
    let mut downloader = config.downloader.clone();

    if let Some(program) = &args.downloader {
        downloader.program.clone_from(program);
    }
    if let Some(format) = &args.audio_format {
        downloader.audio_format.clone_from(format);
    }
    if args.quiet {
        downloader.quiet = true;
    }

    downloader
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Per-attempt failures are logged at debug; -v shows them without the
    // HTTP client internals, -vv shows everything.
    let filter_str = if quiet {
        "warn".to_string()
    } else {
        match verbose {
            0 => "info".to_string(),
            1 => "debug,reqwest=info,hyper_util=info".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(
    command: Command,
    config_override: Option<&Path>,
    args: &FetchArgs,
    config: &Config,
) -> Result<()> {
    match command {
        Command::Captions {
            manifests,
            output_dir,
        } => handle_captions_command(&manifests, output_dir, args.quiet, config),
        Command::Config { action } => handle_config_command(action, config_override, config),
        Command::Check => handle_check_command(args, config),
    }
}

/// Handle the `captions` command.
fn handle_captions_command(
    sources: &[String],
    output_dir: Option<PathBuf>,
    quiet: bool,
    config: &Config,
) -> Result<()> {
    let output_dir = output_dir.unwrap_or_else(|| config.defaults.output_dir.clone());

    for source in sources {
        let manifest = load_manifest(source, quiet)?;
        let written = captions::write_caption_files(&manifest, &output_dir)?;
        println!(
            "Wrote {} caption file(s) from {} to {}",
            written,
            manifest.path.display(),
            output_dir.display()
        );
    }

    Ok(())
}

fn handle_config_command(
    action: cli::ConfigAction,
    config_override: Option<&Path>,
    config: &Config,
) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = resolve_config_path(config_override)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
                println!("Edit it to change defaults, or delete it to start over.");
            } else {
                config::save_config(&Config::default(), &path)?;
                println!("Created configuration file: {}", path.display());
                println!("\nEdit it to change the downloader, output directory, or attempt cap.");
            }
            Ok(())
        }
        ConfigAction::Show => {
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = resolve_config_path(config_override)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Handle the `check` command.
fn handle_check_command(args: &FetchArgs, config: &Config) -> Result<()> {
    let downloader_config = resolve_downloader(args, config);
    config::validate_downloader(&downloader_config)?;

    let program = downloader_config.program.clone();
    let version = CommandDownloader::new(downloader_config).probe()?;
    println!("{program}: OK ({version})");

    Ok(())
}

fn resolve_config_path(config_override: Option<&Path>) -> Result<PathBuf> {
    config_override.map_or_else(config_file_path, |path| Ok(path.to_path_buf()))
}
