// File: crates/demo/src/main.rs
// Summary: Demo measures whole-path vs. chunked updates and writes a CSV of results.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stripchart_core::{
    measure, signal, ChunkedRedraw, FullRedraw, NullSink, SeriesBuffer, DEFAULT_ITERATIONS,
};

fn main() -> Result<()> {
    // Accept window size and iteration count from CLI or fall back to defaults.
    let window: usize = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()
        .context("window size must be an integer")?
        .unwrap_or(5000);
    let iterations: u32 = std::env::args()
        .nth(2)
        .map(|s| s.parse())
        .transpose()
        .context("iteration count must be an integer")?
        .unwrap_or(DEFAULT_ITERATIONS);

    println!("Window: {window} points, {iterations} measured updates per strategy");

    let mut rows: Vec<(String, f64)> = Vec::new();

    // 1) Whole-path redraw baseline
    let buffer = SeriesBuffer::new(signal::initial_window(window))?;
    let mut full = FullRedraw::new(buffer);
    let mut sink = NullSink;
    let mut i = window;
    let avg = measure(
        || {
            let r = full.step(signal::sample(i), &mut sink);
            i += 1;
            r
        },
        iterations,
    )?;
    println!("full redraw:           {avg:.4} ms/update");
    rows.push(("full".to_string(), avg));

    // 2) Chunked redraw at a few chunk sizes
    for chunk_size in [250usize, 500, 1000] {
        let buffer = SeriesBuffer::new(signal::initial_window(window))?;
        let mut chunked = ChunkedRedraw::new(buffer, chunk_size)?;
        let mut sink = NullSink;
        let mut i = window;
        let avg = measure(
            || {
                let r = chunked.step(signal::sample(i), &mut sink);
                i += 1;
                r
            },
            iterations,
        )?;
        println!("chunked ({chunk_size:>4}/chunk): {avg:.4} ms/update");
        rows.push((format!("chunked_{chunk_size}"), avg));
    }

    let out = out_path();
    write_results(&out, window, iterations, &rows)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Produce output file name like target/out/stripchart_<date>.csv
fn out_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d_%H%M%S");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("stripchart_{date}.csv"));
    out
}

fn write_results(path: &Path, window: usize, iterations: u32, rows: &[(String, f64)]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["strategy", "window", "iterations", "avg_ms"])?;
    for (name, avg) in rows {
        wtr.write_record(&[
            name.clone(),
            window.to_string(),
            iterations.to_string(),
            format!("{avg:.6}"),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
