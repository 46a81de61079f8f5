//! Newton (Divided-Difference) Interpolation
//!
//! Fits the global [Newton polynomial](https://en.wikipedia.org/wiki/Newton_polynomial)
//! through an ordered sample set and integrates it.
//!
//! The Newton form is expanded into plain monomial coefficients on load,
//! so every query (integral, point evaluation, resampling) runs against a
//! frozen coefficient vector `c` with
//!
//! ```text
//! P(x) = c[0] + c[1] x + c[2] x^2 + ... + c[n-1] x^(n-1)
//! ```
//!
//! High-degree fits are ill-conditioned in this basis; keep sample
//! counts around a dozen or fewer.

use std::path::Path;
use log::{debug, info};

use crate::interpolation::algorithms::Quadrature;
use crate::interpolation::config::NewtonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::expansion::assemble;
use crate::interpolation::report::{FreeEnergyReport, PolynomialReport};
use crate::interpolation::samples::{Sample, SampleSet};
use crate::interpolation::traits::Interpolator;
use crate::io::plot::write_points;


/// A built polynomial and the samples it was fitted to.
#[derive(Debug, Clone)]
struct Fit {
    samples : SampleSet,
    coeffs  : Vec<f64>,
}


/// Newton interpolator.
///
/// # States
/// - Empty : nothing loaded; only `load*` is meaningful, every query
///   returns [`InterpolationError::NotLoaded`]
/// - Ready : coefficients built; all queries valid
///
/// `load`, `load_xy` and `clear` are the only mutators. A load discards the
/// previous fit before validating, so a failed load leaves the interpolator
/// Empty.
#[derive(Debug, Clone)]
pub struct Newton {
    cfg : NewtonCfg,
    fit : Option<Fit>,
}

impl Default for Newton {
    fn default() -> Self {
        Self::new(NewtonCfg::new())
    }
}

impl Newton {
    pub fn new(cfg: NewtonCfg) -> Self {
        Self { cfg, fit: None }
    }

    /// Builds a Ready interpolator from a sequence of pairs.
    pub fn from_samples(samples: &[Sample], cfg: NewtonCfg) -> Result<Self, InterpolationError> {
        let mut newton = Self::new(cfg);
        newton.load(samples)?;
        Ok(newton)
    }

    /// Builds a Ready interpolator from parallel x / y slices.
    pub fn from_xy(x: &[f64], y: &[f64], cfg: NewtonCfg) -> Result<Self, InterpolationError> {
        let mut newton = Self::new(cfg);
        newton.load_xy(x, y)?;
        Ok(newton)
    }

    pub fn cfg(&self) -> &NewtonCfg { &self.cfg }

    pub fn is_ready(&self) -> bool {
        self.fit.is_some()
    }

    /// Replaces the sample set and rebuilds the polynomial.
    ///
    /// # Errors
    /// Any validation error of [`SampleSet::from_samples`]; the
    /// interpolator is Empty afterwards.
    pub fn load(&mut self, samples: &[Sample]) -> Result<&SampleSet, InterpolationError> {
        self.clear();
        let set = SampleSet::from_samples(samples, &self.cfg)?;
        Ok(self.build(set))
    }

    /// Replaces the sample set with `x` / `y` zipped pairwise.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] if the slices differ in length
    /// - any other validation error of [`SampleSet::from_xy`]
    pub fn load_xy(&mut self, x: &[f64], y: &[f64]) -> Result<&SampleSet, InterpolationError> {
        self.clear();
        let set = SampleSet::from_xy(x, y, &self.cfg)?;
        Ok(self.build(set))
    }

    /// Drops samples and coefficients.
    pub fn clear(&mut self) {
        self.fit = None;
    }

    fn build(&mut self, samples: SampleSet) -> &SampleSet {
        let coeffs = assemble(samples.x(), samples.y());
        debug!("loaded {} samples", samples.len());

        &self.fit.insert(Fit { samples, coeffs }).samples
    }

    fn fit(&self) -> Result<&Fit, InterpolationError> {
        self.fit.as_ref().ok_or(InterpolationError::NotLoaded)
    }

    pub fn samples(&self) -> Result<&SampleSet, InterpolationError> {
        Ok(&self.fit()?.samples)
    }

    /// Monomial coefficients; `coefficients()[i]` multiplies `x^i`.
    /// Length equals the number of loaded samples.
    pub fn coefficients(&self) -> Result<&[f64], InterpolationError> {
        Ok(&self.fit()?.coeffs)
    }

    pub fn polynomial(&self) -> Result<PolynomialReport, InterpolationError> {
        Ok(PolynomialReport::new(self.coefficients()?.to_vec()))
    }

    /// Closed-form integral of the fitted polynomial.
    ///
    /// # Behavior
    /// Bounds are the first- and last-loaded sample's x, not the minimum and
    /// maximum; reverse-ordered samples integrate right to left and flip the
    /// sign.
    ///
    /// ```text
    /// area = sum_i c[i] * (upper^(i+1) - lower^(i+1)) / (i+1)
    /// ```
    pub fn integral(&self) -> Result<f64, InterpolationError> {
        let fit = self.fit()?;
        let lower = fit.samples.first().x;
        let upper = fit.samples.last().x;

        let area = fit.coeffs.iter().enumerate().fold(0.0, |acc, (i, &c)| {
            let power = (i + 1) as f64;
            acc + (upper.powf(power) / power) * c - (lower.powf(power) / power) * c
        });

        Ok(area)
    }

    /// Trapezoidal rule over consecutive raw samples, independent of the
    /// polynomial.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] for a single sample
    pub fn quadrature(&self) -> Result<f64, InterpolationError> {
        let samples = &self.fit()?.samples;
        if samples.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: samples.len() });
        }

        let x = samples.x();
        let y = samples.y();
        let area = x
            .windows(2)
            .zip(y.windows(2))
            .map(|(xs, ys)| (ys[1] + ys[0]) * 0.5 * (xs[1] - xs[0]))
            .sum();

        Ok(area)
    }

    /// Integral estimate by method.
    pub fn integrate(&self, method: Quadrature) -> Result<f64, InterpolationError> {
        match method {
            Quadrature::Polynomial => self.integral(),
            Quadrature::Trapezoid  => self.quadrature(),
        }
    }

    /// Both free-energy estimates; the trapezoid is omitted for one sample.
    pub fn report(&self) -> Result<FreeEnergyReport, InterpolationError> {
        let n_samples  = self.fit()?.samples.len();
        let polynomial = self.integral()?;
        let trapezoid  = match self.quadrature() {
            Ok(area) => Some(area),
            Err(InterpolationError::InsufficientPoints { .. }) => None,
            Err(e) => return Err(e),
        };

        Ok(FreeEnergyReport { n_samples, polynomial, trapezoid })
    }

    /// Evaluates the polynomial on `steps + 1` evenly spaced points of the
    /// configured domain ([`NewtonCfg::domain`], `[0, 1]` by default).
    ///
    /// The default domain is the λ interval and ignores the sample range.
    pub fn resample(&self, steps: usize) -> Result<Vec<(f64, f64)>, InterpolationError> {
        self.fit()?;
        let (lo, hi) = self.cfg.domain;
        self.eval_grid(lo, hi, steps)
    }

    /// Writes [`Newton::resample`] to `path` as `x, y` lines, truncating
    /// any existing file. Returns the number of lines written.
    ///
    /// # Errors
    /// - [`InterpolationError::NotLoaded`] before any load
    /// - [`InterpolationError::Io`] if `path` cannot be created or written
    pub fn estimate<P: AsRef<Path>>(&self, path: P, steps: usize) -> Result<usize, InterpolationError> {
        let path = path.as_ref();
        let points = self.resample(steps)?;

        write_points(path, &points).map_err(|source| InterpolationError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!("wrote {} resampled points to {}", points.len(), path.display());
        Ok(points.len())
    }
}

impl Interpolator for Newton {
    /// Horner evaluation of the monomial form. No bounds check.
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        let coeffs = &self.fit()?.coeffs;
        Ok(coeffs.iter().rev().fold(0.0, |p, &c| p * x + c))
    }
}
