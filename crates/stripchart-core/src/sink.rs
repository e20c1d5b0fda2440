// File: crates/stripchart-core/src/sink.rs
// Summary: Renderer seam; the drawing surface is an external collaborator.

use crate::error::StripError;

/// Receiver for encoded path data. Implementations live outside this crate
/// (an SVG/DOM surface, a recording test double); a sink error propagates
/// straight to the caller and aborts the current measurement.
pub trait PathSink {
    /// Replace the whole series path.
    fn draw_path(&mut self, d: &str) -> Result<(), StripError>;
    /// Replace a single chunk's path.
    fn draw_chunk(&mut self, index: usize, d: &str) -> Result<(), StripError>;
}

/// Discards all output; the baseline sink for timing update cost alone.
#[derive(Default)]
pub struct NullSink;

impl PathSink for NullSink {
    fn draw_path(&mut self, _d: &str) -> Result<(), StripError> { Ok(()) }
    fn draw_chunk(&mut self, _index: usize, _d: &str) -> Result<(), StripError> { Ok(()) }
}
