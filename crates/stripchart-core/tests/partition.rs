// File: crates/stripchart-core/tests/partition.rs
// Purpose: Chunk partition invariants, boundary-only dirty flags, and head/tail rollover.

use std::sync::Arc;

use stripchart_core::{signal, ChunkRef, ChunkedView, Point, SeriesBuffer, StripError};

fn concat(chunks: &[ChunkRef]) -> Vec<Point> {
    chunks.iter().flat_map(|c| c.points.iter().copied()).collect()
}

#[test]
fn initial_partition_counts() {
    let buf = SeriesBuffer::new(signal::initial_window(5000)).unwrap();
    let mut view = ChunkedView::new(&buf, 1000).unwrap();
    assert_eq!(view.chunk_count(), 5);

    let chunks = view.chunks();
    assert!(chunks.iter().all(|c| c.changed), "initial draw covers everything");
    assert!(chunks.iter().all(|c| c.points.len() == 1000));
    assert_eq!(concat(&chunks), buf.snapshot());

    // Ragged tail: ceil(4500 / 1000) = 5 chunks, last one short.
    let buf = SeriesBuffer::new(signal::initial_window(4500)).unwrap();
    let mut view = ChunkedView::new(&buf, 1000).unwrap();
    let chunks = view.chunks();
    assert_eq!(chunks.len(), 5);
    assert_eq!(chunks[4].points.len(), 500);
}

#[test]
fn zero_chunk_size_is_rejected() {
    let buf = SeriesBuffer::new(signal::initial_window(10)).unwrap();
    assert!(matches!(
        ChunkedView::new(&buf, 0),
        Err(StripError::InvalidInput(_))
    ));
}

#[test]
fn only_boundary_chunks_change() {
    let mut buf = SeriesBuffer::new(signal::initial_window(4500)).unwrap();
    let mut view = ChunkedView::new(&buf, 1000).unwrap();
    let before = view.chunks(); // clears the initial-draw flags

    buf.push_evict(signal::sample(4500)).unwrap();
    view.on_push_evict(&buf).unwrap();

    let after = view.chunks();
    assert_eq!(after.len(), 5);
    assert!(after[0].changed);
    assert_eq!(after[0].points.len(), 999);
    assert!(after[4].changed);
    assert_eq!(after[4].points.len(), 501);
    for i in 1..4 {
        assert!(!after[i].changed);
        assert!(
            Arc::ptr_eq(&before[i].points, &after[i].points),
            "interior chunk {i} must keep its allocation"
        );
    }
    assert_eq!(concat(&after), buf.snapshot());
}

#[test]
fn changed_flags_clear_on_read() {
    let mut buf = SeriesBuffer::new(signal::initial_window(4500)).unwrap();
    let mut view = ChunkedView::new(&buf, 1000).unwrap();
    view.chunks();

    buf.push_evict(signal::sample(4500)).unwrap();
    view.on_push_evict(&buf).unwrap();
    assert!(view.chunks().iter().any(|c| c.changed));
    assert!(view.chunks().iter().all(|c| !c.changed));
}

#[test]
fn full_tail_rolls_over_into_a_fresh_chunk() {
    let mut buf = SeriesBuffer::new(signal::initial_window(3000)).unwrap();
    let mut view = ChunkedView::new(&buf, 1000).unwrap();
    view.chunks();

    buf.push_evict(signal::sample(3000)).unwrap();
    view.on_push_evict(&buf).unwrap();

    let chunks = view.chunks();
    assert_eq!(chunks.len(), 4);
    assert!(chunks[0].changed);
    assert_eq!(chunks[0].points.len(), 999);
    assert!(chunks[3].changed);
    assert_eq!(chunks[3].points.len(), 1);
    assert!(!chunks[1].changed);
    assert!(!chunks[2].changed);
    assert_eq!(concat(&chunks), buf.snapshot());
}

#[test]
fn partition_round_trips_across_many_updates() {
    // Long enough to exercise head removal and tail rollover several times.
    let n = 3000;
    let chunk_size = 1000;
    let mut buf = SeriesBuffer::new(signal::initial_window(n)).unwrap();
    let mut view = ChunkedView::new(&buf, chunk_size).unwrap();

    for i in n..n + 2500 {
        buf.push_evict(signal::sample(i)).unwrap();
        view.on_push_evict(&buf).unwrap();
        let chunks = view.chunks();
        assert_eq!(concat(&chunks), buf.snapshot());
        assert!(chunks.iter().all(|c| c.points.len() <= chunk_size));
        assert!(chunks.len() <= n / chunk_size + 1);
    }
}

#[test]
fn oversized_chunk_covers_the_whole_window() {
    // chunk_size >= N degenerates to a single chunk rewritten every update.
    let mut buf = SeriesBuffer::new(signal::initial_window(10)).unwrap();
    let mut view = ChunkedView::new(&buf, 100).unwrap();
    assert_eq!(view.chunk_count(), 1);
    view.chunks();

    for i in 10..15 {
        buf.push_evict(signal::sample(i)).unwrap();
        view.on_push_evict(&buf).unwrap();
        let chunks = view.chunks();
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].changed);
        assert_eq!(concat(&chunks), buf.snapshot());
    }
}

#[test]
fn missed_or_duplicated_updates_are_detected() {
    let mut buf = SeriesBuffer::new(signal::initial_window(100)).unwrap();
    let mut view = ChunkedView::new(&buf, 10).unwrap();

    // No buffer mutation at all.
    assert!(matches!(
        view.on_push_evict(&buf),
        Err(StripError::PreconditionViolation(_))
    ));

    // One mutation, applied once: fine.
    buf.push_evict(signal::sample(100)).unwrap();
    view.on_push_evict(&buf).unwrap();

    // Applied twice for the same state: violation.
    assert!(matches!(
        view.on_push_evict(&buf),
        Err(StripError::PreconditionViolation(_))
    ));

    // Two mutations before one view update: also a violation.
    buf.push_evict(signal::sample(101)).unwrap();
    buf.push_evict(signal::sample(102)).unwrap();
    assert!(matches!(
        view.on_push_evict(&buf),
        Err(StripError::PreconditionViolation(_))
    ));
}
