//! Newton divided-difference polynomials for free-energy estimates.
//!
//! [`interpolation`] fits and integrates the polynomial, [`io`] reads
//! two-column sample files and writes resampled plot files.

pub mod interpolation;
pub mod io;
