// File: crates/stripchart-core/src/path.rs
// Summary: SVG path-data encoding for ordered point sequences.

use std::fmt::Write;

use crate::point::Point;

/// Encode an ordered point sequence as SVG path data:
/// `M<x0>,<y0>L<x1>,<y1>...`. An empty sequence encodes to the empty string
/// (no `M` prefix).
///
/// Coordinates are written with Rust's default `f64` formatting (shortest
/// round-trip decimal form), so an unchanged sequence always encodes to
/// byte-identical text.
pub fn encode_path<'a, I>(points: I) -> String
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut out = String::new();
    for (i, p) in points.into_iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{}{},{}", op, p.x, p.y);
    }
    out
}
