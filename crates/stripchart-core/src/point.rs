// File: crates/stripchart-core/src/point.rs
// Summary: 2D sample point with finite-coordinate validation.

use crate::error::StripError;

/// One sample of a series: x is logical time, y the measured value.
/// Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Try to construct a point enforcing finite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, StripError> {
        let p = Self { x, y };
        p.check_finite()?;
        Ok(p)
    }

    pub(crate) fn check_finite(&self) -> Result<(), StripError> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(StripError::InvalidInput(format!(
                "non-finite coordinate ({}, {})",
                self.x, self.y
            )));
        }
        Ok(())
    }
}
