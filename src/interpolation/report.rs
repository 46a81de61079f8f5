//! Defines the reports printed after a fit.
//!
//! - [`PolynomialReport`] : coefficient table of the fitted polynomial
//! - [`FreeEnergyReport`] : polynomial and trapezoidal integral estimates
//!
//! Both implement [`std::fmt::Display`] in the fixed-width layout of the
//! console output; the numbers themselves are plain public fields.

use std::fmt;
use crate::interpolation::algorithms::Quadrature;


/// Monomial coefficients of a fit.
///
/// [`PolynomialReport`]
/// - `coefficients` : `coefficients[i]` multiplies `x^i`
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialReport {
    pub coefficients: Vec<f64>,
}

impl PolynomialReport {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

impl fmt::Display for PolynomialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Degree, Coefficients")?;
        for (i, c) in self.coefficients.iter().enumerate() {
            writeln!(f, "{:6}, {:.8}", i, c)?;
        }
        Ok(())
    }
}


/// Summary of the two free-energy estimates.
///
/// [`FreeEnergyReport`]
/// - `n_samples`  : number of `(x, y)` samples integrated
/// - `polynomial` : closed-form integral of the fitted polynomial
/// - `trapezoid`  : trapezoidal integral of the raw samples, `None` for a
///   single sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeEnergyReport {
    pub n_samples  : usize,
    pub polynomial : f64,
    pub trapezoid  : Option<f64>,
}

impl FreeEnergyReport {
    /// Polynomial minus trapezoid estimate, when both exist.
    pub fn divergence(&self) -> Option<f64> {
        self.trapezoid.map(|t| self.polynomial - t)
    }
}

impl fmt::Display for FreeEnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Free energy difference")?;
        writeln!(f, "{:>9}: {:.8}", Quadrature::Polynomial.label(), self.polynomial)?;
        match self.trapezoid {
            Some(t) => writeln!(f, "{:>9}: {:.8}", Quadrature::Trapezoid.label(), t),
            None    => writeln!(f, "{:>9}: n/a", Quadrature::Trapezoid.label()),
        }
    }
}
