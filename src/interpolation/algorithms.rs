//! Defines the integration method variants
//!
//! Provides the [`Quadrature`] enum, which enumerates the two estimates
//! of the area under the sampled curve.

use std::fmt;

/// Integration method variants.
/// - [`Quadrature::Polynomial`] closed-form integral of the fitted polynomial
/// - [`Quadrature::Trapezoid`]  trapezoidal rule over the raw samples
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quadrature {
    Polynomial,
    Trapezoid,
}

impl Quadrature {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Quadrature::Polynomial => "polynomial",
            Quadrature::Trapezoid  => "trapezoid",
        }
    }

    /// Label used in the free-energy report. The polynomial estimate keeps
    /// its historical "Lagrange" label; Newton and Lagrange forms describe
    /// the same interpolant.
    pub fn label(self) -> &'static str {
        match self {
            Quadrature::Polynomial => "Lagrange",
            Quadrature::Trapezoid  => "Trapezoid",
        }
    }
}

impl fmt::Display for Quadrature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}
