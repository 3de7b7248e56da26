// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod render;
pub mod watch;

use anyhow::{Result, bail};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{Settings, load_or_default, validate_settings};
use crate::engine::WatchLoop;
use crate::exec::{CommandRunner, Runner};
use crate::render::{Console, Palette};
use crate::watch::FingerprintScanner;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI merging
/// - the fingerprint scanner
/// - the command runner and its console
/// - the poll loop and Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let file = load_or_default(args.config.as_deref())?;
    let settings = Settings::resolve(&args, &file)?;
    validate_settings(&settings)?;

    if args.dry_run {
        print_dry_run(&settings);
        return Ok(());
    }

    let console = Console::new(std::io::stdout(), Palette::default());
    let mut runner = CommandRunner::new(settings.argv.clone(), settings.dir.clone(), console);

    if args.once {
        let report = runner.run_once().await?;
        if !report.success {
            bail!("command failed: {}", settings.command_line);
        }
        return Ok(());
    }

    info!(
        dir = ?settings.dir,
        command = %settings.command_line,
        extension = %settings.extension,
        "watching for changes"
    );

    let scanner = FingerprintScanner::new(settings.dir.clone(), settings.extension.clone());
    WatchLoop::new(scanner, runner, settings.interval).run().await
}

/// Simple dry-run output: print the effective settings.
fn print_dry_run(settings: &Settings) {
    println!("watchrun dry-run");
    println!("  command = {}", settings.command_line);
    println!("  argv = {:?}", settings.argv);
    println!("  dir = {}", settings.dir.display());
    println!("  extension = {}", settings.extension);
    println!("  interval_ms = {}", settings.interval.as_millis());
}
