// File: crates/stripchart-core/src/signal.rs
// Summary: Deterministic synthetic waveform for tests, benches, and the demo.

use crate::point::Point;

/// Sample `i` of the demo waveform: a slow sine ridden on a constant offset,
/// `(i, 100 + 80 * sin(i / 50))`. Deterministic on purpose; keeping RNG out
/// of the hot path keeps measurements about the update cost.
pub fn sample(i: usize) -> Point {
    let x = i as f64;
    Point { x, y: 100.0 + 80.0 * (x / 50.0).sin() }
}

/// The first `n` samples, oldest first.
pub fn initial_window(n: usize) -> Vec<Point> {
    (0..n).map(sample).collect()
}
