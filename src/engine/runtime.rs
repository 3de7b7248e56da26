// src/engine/runtime.rs

use std::time::Duration;

use anyhow::Result;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::exec::Runner;
use crate::watch::Scan;

/// The poll/run orchestration loop.
///
/// Two states: idle (waiting for the next tick) and running (a command
/// execution in progress). Polling, detection and execution are strictly
/// sequential: a run always completes before the next poll is considered,
/// so a long-running command delays the next poll by exactly its own
/// duration. Changes landing during a run are not dropped — they surface in
/// the following poll's fingerprint, with bursts collapsing into a single
/// re-run.
///
/// There is no cancellation and no timeout; a hung command hangs the loop.
pub struct WatchLoop<S, R> {
    scanner: S,
    runner: R,
    interval: Duration,
}

impl<S: Scan, R: Runner> WatchLoop<S, R> {
    pub fn new(scanner: S, runner: R, interval: Duration) -> Self {
        Self {
            scanner,
            runner,
            interval,
        }
    }

    /// One detection cycle: scan, and if the tree changed, run the command
    /// to completion. Returns whether a run happened.
    ///
    /// Scan failures bubble up and are fatal; command failures are consumed
    /// by the runner's report and never end the loop.
    pub async fn poll_once(&mut self) -> Result<bool> {
        if !self.scanner.scan()? {
            debug!("no change detected");
            return Ok(false);
        }

        let report = self.runner.run_once().await?;
        info!(
            success = report.success,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "command finished"
        );
        Ok(true)
    }

    /// Poll at the configured interval until Ctrl-C or a scan failure.
    ///
    /// The first tick fires immediately, so a freshly started watcher scans
    /// (and, fingerprinting from zero, runs) right away. Ctrl-C is only
    /// honoured between polls; an in-progress run always completes.
    pub async fn run(mut self) -> Result<()> {
        info!(
            interval_ms = self.interval.as_millis() as u64,
            "watch loop started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        // A long run should delay the next poll by a full interval, not be
        // chased by catch-up ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("shutdown requested, stopping watch loop");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    self.poll_once().await?;
                }
            }
        }
    }
}
