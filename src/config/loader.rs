// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::{Result, WatchrunError};

/// Name of the config file looked up in the current working directory when
/// no `--config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "Watchrun.toml";

/// Load a configuration file from a given path and return the raw
/// [`ConfigFile`].
///
/// This only performs TOML deserialization; merging with CLI flags and
/// semantic validation happen in [`crate::config::Settings`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        WatchrunError::ConfigError(format!("reading config file at {:?}: {e}", path))
    })?;

    let config: ConfigFile = toml::from_str(&contents)?;
    debug!(path = ?path, "loaded config file");
    Ok(config)
}

/// Resolve the config file to use for this invocation.
///
/// - An explicit path must exist; a missing file is a configuration error.
/// - With no explicit path, `Watchrun.toml` in the current working directory
///   is used if present, and the built-in defaults otherwise.
pub fn load_or_default(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_from_path(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                load_from_path(path)
            } else {
                debug!("no config file found, using defaults");
                Ok(ConfigFile::default())
            }
        }
    }
}
