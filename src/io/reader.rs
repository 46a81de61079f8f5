//! Reader for two-column sample files.
//!
//! One sample per line, the two fields separated by a comma, whitespace,
//! or both:
//! ```text
//! 0.0, 51.49866347
//! 0.1  23.92508775
//! 0.2,10.35390700
//! ```
//! No header row. Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use super::ParseError;
use crate::interpolation::samples::Sample;


/// Reads and parses a sample file.
pub fn read_samples<P: AsRef<Path>>(path: P) -> Result<Vec<Sample>, ParseError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(&content)
}

/// Parses samples from a string, keeping line order.
pub fn parse_samples(content: &str) -> Result<Vec<Sample>, ParseError> {
    let mut samples = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        if fields.len() != 2 {
            return Err(ParseError::Format {
                line: idx + 1,
                message: format!("expected 'x, y', got '{}'", line),
            });
        }

        let x = parse_field(fields[0], idx + 1, "x")?;
        let y = parse_field(fields[1], idx + 1, "y")?;
        samples.push(Sample::new(x, y));
    }

    Ok(samples)
}

fn parse_field(field: &str, line: usize, name: &str) -> Result<f64, ParseError> {
    field.parse().map_err(|_| ParseError::Format {
        line,
        message: format!("invalid {} value: {}", name, field),
    })
}
