//! Ordered sample storage.
//!
//! A [`SampleSet`] keeps `(x, y)` pairs in the order they were supplied.
//! Sortedness is not required; distinct x-values are, since every
//! divided difference divides by `x[j] - x[i]`.

use crate::interpolation::config::{non_finite_idx, NewtonCfg};
use crate::interpolation::errors::InterpolationError;


/// A single `(x, y)` data point, e.g. `(λ, <dV/dλ>)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}


/// Validated, immutable sequence of samples.
///
/// Stored as parallel `x` / `y` vectors since every downstream stage
/// reads them column-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Builds a sample set from a sequence of pairs.
    ///
    /// # Errors
    /// See [`SampleSet::from_xy`].
    pub fn from_samples(samples: &[Sample], cfg: &NewtonCfg) -> Result<Self, InterpolationError> {
        let x: Vec<f64> = samples.iter().map(|s| s.x).collect();
        let y: Vec<f64> = samples.iter().map(|s| s.y).collect();
        Self::from_xy(&x, &y, cfg)
    }

    /// Builds a sample set by zipping two parallel slices.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if either slice is empty
    /// - [`InterpolationError::UnequalLength`] if the lengths differ
    /// - [`InterpolationError::NonFiniteVec`] on NaN/inf in `x` or `y`
    ///   (`idx` is the sample index)
    /// - [`InterpolationError::TooManySamples`] past `cfg.max_samples()`
    /// - [`InterpolationError::DuplicateAbscissa`] if two x-values lie
    ///   within `cfg.x_tol()` of each other
    pub fn from_xy(x: &[f64], y: &[f64], cfg: &NewtonCfg) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }

        let bad = match (non_finite_idx(x), non_finite_idx(y)) {
            (Some(i), Some(j)) => Some(i.min(j)),
            (a, b) => a.or(b),
        };
        if let Some(idx) = bad {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        if x.len() > cfg.max_samples {
            return Err(InterpolationError::TooManySamples {
                got: x.len(),
                max: cfg.max_samples,
            });
        }

        // order is caller-defined, so every pair is checked
        for i in 0..x.len() {
            for j in (i + 1)..x.len() {
                if (x[j] - x[i]).abs() < cfg.x_tol {
                    return Err(InterpolationError::DuplicateAbscissa { x1: x[i], x2: x[j] });
                }
            }
        }

        Ok(Self { x: x.to_vec(), y: y.to_vec() })
    }

    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false` for a constructed set; kept for API symmetry.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }

    /// First-loaded sample.
    pub fn first(&self) -> Sample { Sample::new(self.x[0], self.y[0]) }

    /// Last-loaded sample.
    pub fn last(&self) -> Sample {
        let n = self.len() - 1;
        Sample::new(self.x[n], self.y[n])
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| Sample { x, y })
    }
}
