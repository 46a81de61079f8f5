//! Interpolation error types.
//!
//! ┌ input validation  : empty / unequal / non-finite / duplicate samples
//! ├ configuration     : x_tol, sample ceiling, resampling domain
//! ├ state             : query issued before any samples were loaded
//! └ output            : plot file could not be written

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateAbscissa { x1: f64, x2: f64 },

    #[error("too many samples: got {got}, at most {max} allowed")]
    TooManySamples { got: usize, max: usize },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("invalid max_samples {got} must be in 1..={max}")]
    InvalidMaxSamples { got: usize, max: usize },

    #[error("invalid resampling domain [{lo}, {hi}]: bounds must be finite and lo < hi")]
    InvalidDomain { lo: f64, hi: f64 },

    #[error("no samples loaded")]
    NotLoaded,

    #[error("file {} cannot be written", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
