// File: crates/stripchart-core/src/harness.rs
// Summary: Wall-clock measurement of repeated update steps, plus a bounded frame loop.

use std::time::Instant;

use crate::error::StripError;

/// Measured iterations used when callers have no better number.
pub const DEFAULT_ITERATIONS: u32 = 1000;

/// Run `step` once as a discarded warm-up, then exactly `iterations` timed
/// times, and return the average wall-clock milliseconds per iteration.
///
/// A failing `step` aborts the measurement immediately; partial timing is
/// discarded, not reported.
pub fn measure<F>(mut step: F, iterations: u32) -> Result<f64, StripError>
where
    F: FnMut() -> Result<(), StripError>,
{
    if iterations < 1 {
        return Err(StripError::InvalidInput("iterations must be >= 1".into()));
    }
    step()?; // warm-up, not timed
    let started = Instant::now();
    for _ in 0..iterations {
        step()?;
    }
    Ok(started.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations))
}

/// Drive `on_frame` for frames `0..steps_count` in order. This is the flat,
/// explicitly bounded stand-in for an animation-frame callback chain: the
/// stop condition is the step count, not recursion depth.
pub fn run_frames<F>(steps_count: usize, mut on_frame: F) -> Result<(), StripError>
where
    F: FnMut(usize) -> Result<(), StripError>,
{
    for frame in 0..steps_count {
        on_frame(frame)?;
    }
    Ok(())
}
