// File: crates/stripchart-core/src/lib.rs
// Summary: Core library entry point; exports the sliding-window update model and harness.

pub mod error;
pub mod point;
pub mod series;
pub mod path;
pub mod chunked;
pub mod sink;
pub mod strategy;
pub mod harness;
pub mod signal;

pub use chunked::{ChunkRef, ChunkedView};
pub use error::StripError;
pub use harness::{measure, run_frames, DEFAULT_ITERATIONS};
pub use path::encode_path;
pub use point::Point;
pub use series::SeriesBuffer;
pub use sink::{NullSink, PathSink};
pub use strategy::{ChunkedRedraw, FullRedraw};
