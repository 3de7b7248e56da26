// src/render/round.rs

//! Round-half-up duration rounding for stable timing output.

use std::time::Duration;

/// Round `duration` to the nearest multiple of `precision`, both in
/// nanoseconds.
///
/// Ties round away from zero; negative durations round by magnitude with the
/// sign reapplied. A non-positive precision returns the input unchanged.
pub fn round_nanos(duration: i128, precision: i128) -> i128 {
    if precision <= 0 {
        return duration;
    }
    let negative = duration < 0;
    let mut magnitude = duration.abs();
    let remainder = magnitude % precision;
    if remainder + remainder < precision {
        magnitude -= remainder;
    } else {
        magnitude += precision - remainder;
    }
    if negative { -magnitude } else { magnitude }
}

/// Convenience wrapper over [`std::time::Duration`] for the renderer.
///
/// `Duration` is unsigned, so the negative branch of [`round_nanos`] can
/// never be hit through this entry point.
pub fn round(duration: Duration, precision: Duration) -> Duration {
    let nanos = round_nanos(duration.as_nanos() as i128, precision.as_nanos() as i128);
    Duration::from_nanos(nanos as u64)
}
