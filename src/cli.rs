// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `watchrun`.
///
/// Flags override values from the config file, which override the built-in
/// defaults. See [`crate::config::Settings`] for the merged result.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "watchrun",
    version,
    about = "Re-run a command whenever watched source files change.",
    long_about = None
)]
pub struct CliArgs {
    /// The command (with arguments) to run when a watched file changes.
    ///
    /// Tokenized with shell-style word splitting; quoting and escaping are
    /// honoured, but pipes, redirects and variable expansion are not.
    #[arg(long, value_name = "COMMAND")]
    pub command: Option<String>,

    /// Filename suffix to watch, e.g. ".rs". A leading dot is added when
    /// missing.
    #[arg(long, value_name = "SUFFIX")]
    pub ext: Option<String>,

    /// Directory tree to watch. Defaults to the current working directory.
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Poll interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Watchrun.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run the command once and exit, no watching.
    #[arg(long)]
    pub once: bool,

    /// Print the effective settings, but don't watch or execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WATCHRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
