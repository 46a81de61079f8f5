//! Writer for resampled plot files.
//!
//! One point per line, `x` with 4 decimals and `y` with 8:
//! ```text
//! 0.0000, 51.49866347
//! 0.1000, 23.92508775
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;


/// Formats a single plot line, without the trailing newline.
pub fn format_point(x: f64, y: f64) -> String {
    format!("{:.4}, {:.8}", x, y)
}

/// Writes `points` to `path`, truncating an existing file.
pub fn write_points(path: &Path, points: &[(f64, f64)]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for &(x, y) in points {
        writeln!(out, "{}", format_point(x, y))?;
    }
    out.flush()
}
