// src/render/console.rs

use std::io::{self, Write};
use std::time::Duration;

use crate::exec::RunReport;
use crate::render::round;

/// Escape sequences used to frame a run report.
///
/// Built once at startup and injected into the console; the sequences are
/// opaque bytes as far as watchrun is concerned. Any consumer of the output
/// stream must be an ANSI-capable terminal or must strip them.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Clear the screen and put the cursor at the top-left.
    pub clear: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
    pub reset: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            clear: "\x1b[2J\x1b[H",
            success: "\x1b[32m",
            failure: "\x1b[31m",
            reset: "\x1b[0m",
        }
    }
}

/// Renders run reports to a terminal-like stream.
///
/// The console must be the only writer on its stream: each run is reported
/// as one contiguous clear → timing → color → output → reset sequence, and
/// any interleaved writer would corrupt the visible state.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Self { out, palette }
    }

    /// Wipe the previous run's visible output before a new run starts.
    pub fn begin_run(&mut self) -> io::Result<()> {
        self.out.write_all(self.palette.clear.as_bytes())?;
        self.out.flush()
    }

    /// Render a finished run: the elapsed time rounded to whole
    /// milliseconds, then the captured output framed by a status color and a
    /// reset. Empty output still gets the color + reset frame.
    pub fn finish_run(&mut self, report: &RunReport) -> io::Result<()> {
        let elapsed = round::round(report.elapsed, Duration::from_millis(1));
        writeln!(self.out, "{elapsed:?}")?;

        let color = if report.success {
            self.palette.success
        } else {
            self.palette.failure
        };
        self.out.write_all(color.as_bytes())?;
        self.out.write_all(&report.output)?;
        self.out.write_all(self.palette.reset.as_bytes())?;
        self.out.flush()
    }
}
