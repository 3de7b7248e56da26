// src/watch/scanner.rs

use std::path::PathBuf;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Change-detection capability consumed by the orchestration loop.
///
/// Production code uses [`FingerprintScanner`]; tests can provide their own
/// implementation with scripted results.
pub trait Scan {
    /// Decide whether the watched tree has changed since the previous call.
    ///
    /// Implementations must consume the change: two consecutive calls over
    /// an unchanged tree report `true` at most once.
    fn scan(&mut self) -> Result<bool>;
}

/// Detects changes by fingerprinting the watched tree on every poll.
///
/// The fingerprint is a single running sum: every directory contributes 1
/// (so directory creation and deletion are visible even though directories
/// carry no useful size/mtime signal), and every regular file whose name
/// ends in the watched suffix contributes its size plus its modification
/// time in seconds since the epoch.
///
/// The sum is deliberately lossy and commutative. It cannot tell "file A
/// grew by N bytes" from "file B shrank by N while file C grew by N", in
/// exchange for O(1) state and a single pass with nothing retained per
/// file. Callers that need collision resistance want a content hash, not
/// this.
pub struct FingerprintScanner {
    dir: PathBuf,
    extension: String,
    state: i64,
}

impl FingerprintScanner {
    /// Watch `dir` for changes to files whose name ends in `extension`.
    ///
    /// The initial stored fingerprint is zero, so the first scan of any
    /// non-empty tree reports a change; a freshly started watcher therefore
    /// runs its command once up front.
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            state: 0,
        }
    }

    fn fingerprint(&self) -> Result<i64> {
        let mut sum: i64 = 0;

        for entry in WalkDir::new(&self.dir) {
            let entry = entry
                .with_context(|| format!("walking watch directory {:?}", self.dir))?;

            if entry.file_type().is_dir() {
                sum = sum.wrapping_add(1);
            } else if entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(&self.extension)
            {
                let meta = entry
                    .metadata()
                    .with_context(|| format!("reading metadata for {:?}", entry.path()))?;
                let modified = meta
                    .modified()
                    .with_context(|| format!("reading mtime for {:?}", entry.path()))?;
                let mtime_secs = match modified.duration_since(UNIX_EPOCH) {
                    Ok(since) => since.as_secs() as i64,
                    Err(before) => -(before.duration().as_secs() as i64),
                };

                sum = sum.wrapping_add(meta.len() as i64);
                sum = sum.wrapping_add(mtime_secs);
            }
        }

        Ok(sum)
    }
}

impl Scan for FingerprintScanner {
    /// Walk the tree and compare against the previous fingerprint.
    ///
    /// The stored fingerprint is replaced unconditionally, whether or not it
    /// differed, so a change is never reported twice for the same tree state
    /// and a failed run does not re-trigger on the next poll by itself.
    fn scan(&mut self) -> Result<bool> {
        let next = self.fingerprint()?;
        let changed = next != self.state;
        if changed {
            debug!(previous = self.state, next, "fingerprint changed");
        }
        self.state = next;
        Ok(changed)
    }
}
