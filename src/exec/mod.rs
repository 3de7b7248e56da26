// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running the configured command,
//! using `tokio::process::Command`, and for handing each outcome to the
//! console renderer.
//!
//! - [`command`] owns the runner: it spawns the process in the watch
//!   directory, captures combined stdout + stderr in emission order, and
//!   renders the colored report.
//! - The [`Runner`] trait is the seam the orchestration loop composes
//!   against, so tests can substitute a fake that spawns nothing.

pub mod command;

pub use command::{CommandRunner, RunReport, Runner};
