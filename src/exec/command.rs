// src/exec/command.rs

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::render::Console;

/// Outcome of one command execution.
///
/// Transient: produced by a run, consumed by rendering and by the loop's
/// log line, never retained across polls.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Combined stdout + stderr, in the order the process emitted them.
    pub output: Vec<u8>,

    /// Whether the process exited with status zero. Forced false when the
    /// process could not be launched at all.
    pub success: bool,

    /// Wall-clock time from just before spawning to child exit.
    pub elapsed: Duration,
}

/// Execution capability consumed by the orchestration loop.
///
/// Production code uses [`CommandRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait Runner: Send {
    /// Execute the configured command once, render the outcome, and return
    /// the report.
    ///
    /// Command failures — a launch error or a nonzero exit — are part of the
    /// report, never an `Err`. The only `Err` is a failure to write to the
    /// output stream.
    fn run_once(&mut self) -> Pin<Box<dyn Future<Output = Result<RunReport>> + Send + '_>>;
}

/// Runs the fixed command in the watch directory and renders each outcome.
pub struct CommandRunner<W: Write + Send> {
    argv: Vec<String>,
    dir: PathBuf,
    console: Console<W>,
}

impl<W: Write + Send> CommandRunner<W> {
    /// `argv` must be non-empty; config validation guarantees this before a
    /// runner is built.
    pub fn new(argv: Vec<String>, dir: impl Into<PathBuf>, console: Console<W>) -> Self {
        Self {
            argv,
            dir: dir.into(),
            console,
        }
    }

    async fn run_inner(&mut self) -> Result<RunReport> {
        self.console
            .begin_run()
            .context("writing to the output stream")?;

        let sink = Arc::new(Mutex::new(Vec::new()));
        let started = Instant::now();

        let success = match self.spawn_and_capture(&sink).await {
            Ok(exited_zero) => exited_zero,
            Err(err) => {
                // Launch-level failures surface through the same colored
                // report as command output.
                warn!(error = %err, command = %self.argv[0], "command could not be run");
                sink.lock().await.extend_from_slice(format!("{err:#}").as_bytes());
                false
            }
        };
        let elapsed = started.elapsed();

        let output = std::mem::take(&mut *sink.lock().await);
        let report = RunReport {
            output,
            success,
            elapsed,
        };

        self.console
            .finish_run(&report)
            .context("writing to the output stream")?;
        Ok(report)
    }

    /// Spawn the command and drain both pipes into the shared sink.
    ///
    /// Returns whether the process exited with status zero. Anything already
    /// captured stays in the sink even when this fails partway.
    async fn spawn_and_capture(&self, sink: &Arc<Mutex<Vec<u8>>>) -> Result<bool> {
        debug!(command = ?self.argv, dir = ?self.dir, "spawning command");

        let mut cmd = Command::new(&self.argv[0]);
        cmd.args(&self.argv[1..])
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning `{}`", self.argv[0]))?;

        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(tokio::spawn(drain(stdout, Arc::clone(sink))));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(tokio::spawn(drain(stderr, Arc::clone(sink))));
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for `{}`", self.argv[0]))?;

        for reader in readers {
            let _ = reader.await;
        }

        Ok(status.success())
    }
}

impl<W: Write + Send + Sync> Runner for CommandRunner<W> {
    fn run_once(&mut self) -> Pin<Box<dyn Future<Output = Result<RunReport>> + Send + '_>> {
        Box::pin(self.run_inner())
    }
}

/// Copy one child pipe into the shared sink chunk by chunk.
///
/// Both pipes append to the same buffer under a lock, so stdout and stderr
/// land interleaved in the order the process emitted them, at pipe-read
/// granularity.
async fn drain(mut pipe: impl AsyncRead + Unpin, sink: Arc<Mutex<Vec<u8>>>) {
    let mut buf = [0u8; 8192];
    loop {
        match pipe.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => sink.lock().await.extend_from_slice(&buf[..n]),
        }
    }
}
