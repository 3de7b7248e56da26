// src/config/settings.rs

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::CliArgs;
use crate::config::model::ConfigFile;
use crate::errors::{Result, WatchrunError};

/// Effective runtime settings, merged from CLI flags and the config file.
///
/// Precedence: CLI flag, then config file value, then built-in default.
/// Everything here is fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// The command line as given, before tokenization. Kept for display.
    pub command_line: String,

    /// Tokenized command: program name followed by its arguments.
    pub argv: Vec<String>,

    /// Absolute path of the directory tree to watch. Also the working
    /// directory the command runs in.
    pub dir: PathBuf,

    /// Filename suffix that marks a file as watched, including the leading
    /// dot (e.g. ".rs").
    pub extension: String,

    /// Poll interval between change-detection attempts.
    pub interval: Duration,
}

impl Settings {
    /// Merge CLI arguments with a loaded config file.
    ///
    /// Tokenizes the command with shell-style word splitting and
    /// canonicalizes the watch directory. Semantic checks live in
    /// [`crate::config::validate_settings`].
    pub fn resolve(args: &CliArgs, file: &ConfigFile) -> Result<Settings> {
        let command_line = args
            .command
            .clone()
            .unwrap_or_else(|| file.command.run.clone());
        let argv = shell_words::split(&command_line)?;

        let extension = normalize_extension(
            args.ext.as_deref().unwrap_or(&file.watch.extension),
        );

        let dir = match args.dir.clone().or_else(|| file.watch.dir.clone()) {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                WatchrunError::ConfigError(format!("determining current directory: {e}"))
            })?,
        };
        let dir = dir.canonicalize().map_err(|e| {
            WatchrunError::ConfigError(format!("watch directory {:?}: {e}", dir))
        })?;

        let interval_ms = args.interval_ms.unwrap_or(file.watch.interval_ms);

        Ok(Settings {
            command_line,
            argv,
            dir,
            extension,
            interval: Duration::from_millis(interval_ms),
        })
    }
}

/// Ensure the suffix carries a leading dot, so "rs" and ".rs" mean the same
/// thing on the command line.
fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}
