//! External downloader invocation.
//!
//! Runs `yt-dlp` (or a compatible tool) as a child process with an explicit
//! argument vector. Identifiers and paths are passed as single argv elements
//! and never interpolated into a shell command line.

use crate::config::DownloaderConfig;
use crate::error::{Error, Result};
use crate::fetcher::{ClipSpec, ExtractError, Extractor};
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Runs an external downloader program for clip extraction.
#[derive(Debug, Clone)]
pub struct CommandDownloader {
    config: DownloaderConfig,
}

impl CommandDownloader {
    /// Create a downloader from resolved settings.
    #[must_use]
    pub fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Source URL for a row identifier.
    ///
    /// Every occurrence of `{id}` in the URL template is replaced with the
    /// identifier verbatim.
    #[must_use]
    pub fn source_url(&self, identifier: &str) -> String {
        self.config.url_template.replace("{id}", identifier)
    }

    /// Build the argument vector for one extraction attempt.
    ///
    /// Extra arguments from the configuration are inserted before the URL so
    /// they can override earlier flags.
    fn build_args(&self, spec: &ClipSpec<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();

        if self.config.quiet {
            args.push("--quiet".into());
            args.push("--no-warnings".into());
        }
        args.push("-x".into());
        args.push("--audio-format".into());
        args.push(self.config.audio_format.clone().into());
        args.push("--download-sections".into());
        args.push(format!("*{}", spec.window).into());
        args.push("--force-overwrites".into());
        args.push("-o".into());
        args.push(spec.destination.as_os_str().to_os_string());
        for extra in &self.config.extra_args {
            args.push(extra.clone().into());
        }
        args.push(self.source_url(spec.identifier).into());

        args
    }

    /// Probe the downloader with `--version` to confirm it is runnable.
    ///
    /// Returns the reported version string.
    pub fn probe(&self) -> Result<String> {
        let output = Command::new(&self.config.program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::DownloaderUnavailable {
                program: self.config.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::DownloaderUnavailable {
                program: self.config.program.clone(),
                reason: format!("'--version' exited with {}", output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Extractor for CommandDownloader {
    fn extract(&self, spec: &ClipSpec<'_>) -> std::result::Result<String, ExtractError> {
        let output = Command::new(&self.config.program)
            .args(self.build_args(spec))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ExtractError::new(format!("failed to run '{}': {e}", self.config.program))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            Ok(stderr)
        } else if stderr.is_empty() {
            Err(ExtractError::new(format!(
                "'{}' exited with {}",
                self.config.program, output.status
            )))
        } else {
            Err(ExtractError::new(stderr))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fetcher::ClipWindow;
    use std::path::Path;

    fn downloader(config: DownloaderConfig) -> CommandDownloader {
        CommandDownloader::new(config)
    }

    fn spec<'a>(identifier: &'a str, destination: &'a Path) -> ClipSpec<'a> {
        ClipSpec {
            identifier,
            destination,
            window: ClipWindow::new(15, 55),
        }
    }

    #[test]
    fn test_source_url_substitution() {
        let d = downloader(DownloaderConfig::default());
        assert_eq!(
            d.source_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_build_args_layout() {
        let d = downloader(DownloaderConfig::default());
        let dest = Path::new("clips/abc.wav");
        let args = d.build_args(&spec("abc", dest));

        let expected: Vec<OsString> = [
            "--quiet",
            "--no-warnings",
            "-x",
            "--audio-format",
            "wav",
            "--download-sections",
            "*15-55",
            "--force-overwrites",
            "-o",
            "clips/abc.wav",
            "https://www.youtube.com/watch?v=abc",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }

    #[test]
    fn test_build_args_without_quiet() {
        let config = DownloaderConfig {
            quiet: false,
            ..DownloaderConfig::default()
        };
        let d = downloader(config);
        let args = d.build_args(&spec("abc", Path::new("out.wav")));
        assert!(!args.contains(&OsString::from("--quiet")));
        assert!(!args.contains(&OsString::from("--no-warnings")));
        assert_eq!(args[0], OsString::from("-x"));
    }

    #[test]
    fn test_build_args_extra_args_precede_url() {
        let config = DownloaderConfig {
            extra_args: vec!["--no-playlist".to_string()],
            ..DownloaderConfig::default()
        };
        let d = downloader(config);
        let args = d.build_args(&spec("abc", Path::new("out.wav")));
        let n = args.len();
        assert_eq!(args[n - 2], OsString::from("--no-playlist"));
        assert_eq!(
            args[n - 1],
            OsString::from("https://www.youtube.com/watch?v=abc")
        );
    }

    #[test]
    fn test_build_args_hostile_identifier_stays_one_element() {
        // Shell metacharacters must remain inert data inside a single element
        let d = downloader(DownloaderConfig::default());
        let args = d.build_args(&spec("abc; rm -rf $HOME", Path::new("out.wav")));
        let url = args.last().unwrap().to_string_lossy().into_owned();
        assert_eq!(url, "https://www.youtube.com/watch?v=abc; rm -rf $HOME");
        assert!(!args.contains(&OsString::from("rm")));
    }

    #[test]
    fn test_probe_missing_program() {
        let config = DownloaderConfig {
            program: "capfetch-no-such-program".to_string(),
            ..DownloaderConfig::default()
        };
        let d = downloader(config);
        let result = d.probe();
        assert!(matches!(result, Err(Error::DownloaderUnavailable { .. })));
    }

    #[test]
    fn test_extract_missing_program_reports_spawn_failure() {
        let config = DownloaderConfig {
            program: "capfetch-no-such-program".to_string(),
            ..DownloaderConfig::default()
        };
        let d = downloader(config);
        let err = d.extract(&spec("abc", Path::new("out.wav"))).unwrap_err();
        assert!(err.message.contains("capfetch-no-such-program"));
    }
}
