// File: crates/stripchart-core/src/chunked.rs
// Summary: Chunked partition of a sliding window; recomputes only boundary chunks per update.

use std::sync::Arc;

use crate::error::StripError;
use crate::point::Point;
use crate::series::SeriesBuffer;

/// One contiguous run of the window as handed to a renderer. `points` shares
/// its allocation with earlier reads whenever the chunk did not change, so a
/// renderer can skip unchanged chunks by pointer identity as well as by the
/// `changed` flag.
#[derive(Clone)]
pub struct ChunkRef {
    pub points: Arc<[Point]>,
    pub changed: bool,
}

struct Chunk {
    points: Arc<[Point]>,
    dirty: bool,
}

/// Partition of a `SeriesBuffer` into contiguous chunks of at most
/// `chunk_size` points whose concatenation always equals the buffer's current
/// contents. After each buffer update only the head chunk (which lost the
/// evicted point) and the tail chunk (which gained the new point) are
/// recomputed; interior chunks keep their allocation untouched, which is what
/// makes the incremental strategy O(chunk_size) per update instead of O(N).
pub struct ChunkedView {
    chunks: Vec<Chunk>,
    chunk_size: usize,
    seen_generation: u64,
}

impl ChunkedView {
    /// Build the initial partition from the buffer's current contents. Every
    /// chunk except possibly the last has exactly `chunk_size` points, and
    /// all of them start marked changed (nothing has been drawn yet).
    pub fn new(buffer: &SeriesBuffer, chunk_size: usize) -> Result<Self, StripError> {
        if chunk_size < 1 {
            return Err(StripError::InvalidInput("chunk size must be >= 1".into()));
        }
        let snapshot = buffer.snapshot();
        let chunks = snapshot
            .chunks(chunk_size)
            .map(|run| Chunk { points: run.into(), dirty: true })
            .collect();
        Ok(Self { chunks, chunk_size, seen_generation: buffer.generation() })
    }

    pub fn chunk_count(&self) -> usize { self.chunks.len() }

    /// Apply the effect of exactly one `push_evict` on `buffer`.
    ///
    /// The head chunk is re-sliced without its evicted point and the tail
    /// chunk is re-sliced with the new point appended; everything in between
    /// is left alone. A head chunk that empties is dropped, and a tail chunk
    /// that was already full rolls over into a fresh one-point chunk, so
    /// chunk lengths stay bounded by `chunk_size` over any number of updates.
    ///
    /// The buffer's generation counter must be exactly one ahead of the last
    /// state this view saw; calling twice for the same mutation, or skipping
    /// a mutation, is a `PreconditionViolation`.
    pub fn on_push_evict(&mut self, buffer: &SeriesBuffer) -> Result<(), StripError> {
        let generation = buffer.generation();
        if generation != self.seen_generation + 1 {
            return Err(StripError::PreconditionViolation(format!(
                "expected buffer generation {}, found {}",
                self.seen_generation + 1,
                generation
            )));
        }
        self.seen_generation = generation;
        let n = buffer.len();

        // Degenerate single-chunk mode: eviction and push land in the same
        // chunk, so the whole window is rewritten.
        if self.chunks.len() == 1 {
            if let Some(chunk) = self.chunks.first_mut() {
                chunk.points = buffer.snapshot().into();
                chunk.dirty = true;
            }
            return Ok(());
        }

        // Tail: gains the freshly pushed point, rolling over when full.
        let tail_len = self.chunks.last().map_or(0, |c| c.points.len());
        if tail_len >= self.chunk_size {
            self.chunks.push(Chunk {
                points: buffer.copy_range(n - 1, 1)?.into(),
                dirty: true,
            });
        } else if let Some(tail) = self.chunks.last_mut() {
            tail.points = buffer.copy_range(n - tail_len - 1, tail_len + 1)?.into();
            tail.dirty = true;
        }

        // Head: loses the evicted point, dropped once it empties.
        let head_len = self.chunks.first().map_or(0, |c| c.points.len());
        if head_len <= 1 {
            self.chunks.remove(0);
        } else if let Some(head) = self.chunks.first_mut() {
            head.points = buffer.copy_range(0, head_len - 1)?.into();
            head.dirty = true;
        }
        Ok(())
    }

    /// Current chunks in window order. Each handle carries a changed flag
    /// covering everything since the previous `chunks` call; reading clears
    /// the flags.
    pub fn chunks(&mut self) -> Vec<ChunkRef> {
        self.chunks
            .iter_mut()
            .map(|c| {
                let changed = c.dirty;
                c.dirty = false;
                ChunkRef { points: Arc::clone(&c.points), changed }
            })
            .collect()
    }
}
