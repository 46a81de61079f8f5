//! Plain-text input and output.
//!
//! - [`reader`] : two-column `x, y` sample files
//! - [`plot`]   : resampled `x, y` plot files

pub mod plot;
pub mod reader;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a sample file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file {} cannot be opened", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Format { line: usize, message: String },
}
