// File: crates/stripchart-core/src/series.rs
// Summary: Fixed-length sliding window of points (index 0 = oldest).

use std::collections::VecDeque;

use crate::error::StripError;
use crate::point::Point;

/// Moving time window over a series. Length is fixed at construction and
/// preserved by every update; storage is a ring buffer so push-and-evict is
/// O(1) amortized.
pub struct SeriesBuffer {
    points: VecDeque<Point>,
    generation: u64,
}

impl SeriesBuffer {
    /// Construct a window holding `initial` in given order (oldest first).
    pub fn new(initial: Vec<Point>) -> Result<Self, StripError> {
        if initial.is_empty() {
            return Err(StripError::InvalidInput("initial window is empty".into()));
        }
        for p in &initial {
            p.check_finite()?;
        }
        Ok(Self { points: initial.into(), generation: 0 })
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Append `next` and evict the oldest point. Length is unchanged; a
    /// non-finite `next` is rejected before the window is touched.
    pub fn push_evict(&mut self, next: Point) -> Result<(), StripError> {
        next.check_finite()?;
        self.points.pop_front();
        self.points.push_back(next);
        self.generation += 1;
        Ok(())
    }

    /// Independent copy of the current window, oldest first. No aliasing with
    /// internal storage.
    pub fn snapshot(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// Copy `len` points starting at `start` (oldest = 0). Lets a consumer
    /// re-slice a boundary run in O(len) instead of copying the whole window.
    pub fn copy_range(&self, start: usize, len: usize) -> Result<Vec<Point>, StripError> {
        let end = start.checked_add(len).filter(|&e| e <= self.points.len());
        match end {
            Some(end) => Ok(self.points.range(start..end).copied().collect()),
            None => Err(StripError::InvalidInput(format!(
                "range {start}+{len} out of bounds for window of {}",
                self.points.len()
            ))),
        }
    }

    /// Bumped once per `push_evict`; consumers use it to detect missed or
    /// duplicated updates.
    pub fn generation(&self) -> u64 { self.generation }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}
