// File: crates/stripchart-core/src/error.rs
// Summary: Error taxonomy for window construction, chunk bookkeeping, and measurement.

use thiserror::Error;

/// Errors raised synchronously to the immediate caller. Nothing in this crate
/// catches or retries; the surrounding harness is expected to fail fast.
#[derive(Debug, Error)]
pub enum StripError {
    /// Malformed construction or update arguments: empty initial window,
    /// non-positive chunk size, non-positive iteration count, non-finite
    /// coordinates, out-of-range slice.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A chunked view was advanced without a matching single buffer mutation.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// The external render sink rejected a draw call.
    #[error("render sink failed: {0}")]
    Render(String),
}
