// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file:
///
/// ```toml
/// [command]
/// run = "cargo test"
///
/// [watch]
/// dir = "."
/// extension = ".rs"
/// interval_ms = 250
/// ```
///
/// All sections are optional and have reasonable defaults, so a missing
/// config file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// The `[command]` section.
    #[serde(default)]
    pub command: CommandSection,

    /// The `[watch]` section.
    #[serde(default)]
    pub watch: WatchSection,
}

/// `[command]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandSection {
    /// The command line to run on change.
    #[serde(default = "default_command")]
    pub run: String,
}

fn default_command() -> String {
    "cargo test".to_string()
}

impl Default for CommandSection {
    fn default() -> Self {
        Self {
            run: default_command(),
        }
    }
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Directory tree to watch. Relative paths resolve against the current
    /// working directory; when absent, the current working directory itself
    /// is watched.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Filename suffix that marks a file as watched.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Poll interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_extension() -> String {
    ".rs".to_string()
}

fn default_interval_ms() -> u64 {
    250
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
            interval_ms: default_interval_ms(),
        }
    }
}
