// src/config/validate.rs

use crate::config::settings::Settings;
use crate::errors::{Result, WatchrunError};

/// Run basic semantic validation against resolved settings.
///
/// This checks:
/// - the command is non-empty after tokenization
/// - the watched suffix is non-empty
/// - the poll interval is at least 1ms
/// - the watch directory exists and is a directory
///
/// All failures here are fatal: continuing would watch nothing or run
/// nothing meaningful.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    ensure_has_command(settings)?;
    validate_extension(settings)?;
    validate_interval(settings)?;
    validate_watch_dir(settings)?;
    Ok(())
}

fn ensure_has_command(settings: &Settings) -> Result<()> {
    if settings.argv.is_empty() {
        return Err(WatchrunError::ConfigError(
            "empty command; please provide something to run".to_string(),
        ));
    }
    Ok(())
}

fn validate_extension(settings: &Settings) -> Result<()> {
    if settings.extension.is_empty() {
        return Err(WatchrunError::ConfigError(
            "watched suffix must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_interval(settings: &Settings) -> Result<()> {
    if settings.interval.is_zero() {
        return Err(WatchrunError::ConfigError(
            "poll interval must be at least 1ms".to_string(),
        ));
    }
    Ok(())
}

fn validate_watch_dir(settings: &Settings) -> Result<()> {
    if !settings.dir.is_dir() {
        return Err(WatchrunError::ConfigError(format!(
            "watch directory {:?} is not a directory",
            settings.dir
        )));
    }
    Ok(())
}
