// File: crates/stripchart-core/src/strategy.rs
// Summary: The two measured update pipelines: whole-path redraw vs. chunked redraw.

use crate::chunked::ChunkedView;
use crate::error::StripError;
use crate::path::encode_path;
use crate::point::Point;
use crate::series::SeriesBuffer;
use crate::sink::PathSink;

/// Re-encode and redraw the entire window on every update: O(N) per step.
pub struct FullRedraw {
    buffer: SeriesBuffer,
}

impl FullRedraw {
    pub fn new(buffer: SeriesBuffer) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> &SeriesBuffer { &self.buffer }

    /// Advance the window by one point and redraw the whole path.
    pub fn step(&mut self, next: Point, sink: &mut impl PathSink) -> Result<(), StripError> {
        self.buffer.push_evict(next)?;
        sink.draw_path(&encode_path(self.buffer.iter()))
    }
}

/// Redraw only the chunks whose membership changed: O(chunk_size) per step
/// once the initial draw is out of the way.
pub struct ChunkedRedraw {
    buffer: SeriesBuffer,
    view: ChunkedView,
}

impl ChunkedRedraw {
    pub fn new(buffer: SeriesBuffer, chunk_size: usize) -> Result<Self, StripError> {
        let view = ChunkedView::new(&buffer, chunk_size)?;
        Ok(Self { buffer, view })
    }

    pub fn buffer(&self) -> &SeriesBuffer { &self.buffer }

    /// Advance the window by one point and redraw the changed chunks. The
    /// first step after construction draws every chunk (nothing was drawn
    /// yet); from then on only the two boundary chunks are emitted.
    pub fn step(&mut self, next: Point, sink: &mut impl PathSink) -> Result<(), StripError> {
        self.buffer.push_evict(next)?;
        self.view.on_push_evict(&self.buffer)?;
        for (index, chunk) in self.view.chunks().into_iter().enumerate() {
            if chunk.changed {
                sink.draw_chunk(index, &encode_path(chunk.points.iter()))?;
            }
        }
        Ok(())
    }
}
