//! Configuration validation.

use crate::config::{Config, DownloaderConfig};
use crate::constants::MAX_JOBS;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    validate_downloader(&config.downloader)?;
    Ok(())
}

/// Validate default settings.
fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    if defaults.max_attempts == 0 {
        return Err(Error::ConfigValidation {
            message: "max_attempts must be at least 1".to_string(),
        });
    }

    if defaults.jobs == 0 || defaults.jobs > MAX_JOBS {
        return Err(Error::ConfigValidation {
            message: format!(
                "jobs must be between 1 and {MAX_JOBS}, got {}",
                defaults.jobs
            ),
        });
    }

    Ok(())
}

/// Validate downloader settings.
pub fn validate_downloader(downloader: &DownloaderConfig) -> Result<()> {
    if downloader.program.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "downloader.program must not be empty".to_string(),
        });
    }

    if !downloader.url_template.contains("{id}") {
        return Err(Error::ConfigValidation {
            message: format!(
                "downloader.url_template must contain '{{id}}', got '{}'",
                downloader.url_template
            ),
        });
    }

    if downloader.audio_format.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "downloader.audio_format must not be empty".to_string(),
        });
    }

    Ok(())
}
