//! Configuration for the Newton interpolator.
//!
//! [`NewtonCfg`]: knobs applied at load and query time
//! - `x_tol`       : minimum allowed spacing between any two sample x-values
//! - `max_samples` : ceiling on the number of samples per fit
//! - `domain`      : `[lo, hi]` grid used when resampling the polynomial
//!
//! [`NewtonCfg::new`] initializes every field with its default;
//! setters validate and consume `self`.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;

/// Default ceiling on the sample count. Assembly enumerates `2^(n-1)`
/// subsets for the highest-degree term.
pub const DEFAULT_MAX_SAMPLES: usize = 24;

/// Subsets are enumerated as `u64` bit patterns.
pub const MAX_SUPPORTED_SAMPLES: usize = 64;

/// The normalized λ interval of thermodynamic integration.
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 1.0);


/// Newton interpolation configuration
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - `x_tol`       : [`DEFAULT_X_TOL`]
/// - `max_samples` : [`DEFAULT_MAX_SAMPLES`]
/// - `domain`      : [`DEFAULT_DOMAIN`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonCfg {
    pub(crate) x_tol       : f64,
    pub(crate) max_samples : usize,
    pub(crate) domain      : (f64, f64),
}

impl Default for NewtonCfg {
    fn default() -> Self {
        Self::new()
    }
}

impl NewtonCfg {
    pub fn new() -> Self {
        Self {
            x_tol       : DEFAULT_X_TOL,
            max_samples : DEFAULT_MAX_SAMPLES,
            domain      : DEFAULT_DOMAIN,
        }
    }

    // getters
    pub fn x_tol(&self) -> f64 { self.x_tol }
    pub fn max_samples(&self) -> usize { self.max_samples }
    pub fn domain(&self) -> (f64, f64) { self.domain }

    // setters
    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.x_tol = v;
        Ok(self)
    }

    pub fn set_max_samples(mut self, v: usize) -> Result<Self, InterpolationError> {
        if v == 0 || v > MAX_SUPPORTED_SAMPLES {
            return Err(InterpolationError::InvalidMaxSamples {
                got: v,
                max: MAX_SUPPORTED_SAMPLES,
            });
        }
        self.max_samples = v;
        Ok(self)
    }

    pub fn set_domain(mut self, lo: f64, hi: f64) -> Result<Self, InterpolationError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(InterpolationError::InvalidDomain { lo, hi });
        }
        self.domain = (lo, hi);
        Ok(self)
    }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
