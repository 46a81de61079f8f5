//! Monomial expansion of the Newton form.
//!
//! Turns divided differences into coefficients of
//!
//! ```text
//! P(x) = sum_{s=0}^{n-1} fdd[s] * (x - x_0)(x - x_1)...(x - x_{s-1})
//! ```
//!
//! expressed in powers of `x`. Each root product is expanded by
//! enumerating every subset of its roots as a bit pattern, so the
//! degree-`s` term costs `O(s * 2^s)`. Fits beyond roughly a dozen points
//! are slow and numerically unstable; neither is mitigated here.

use log::debug;
use crate::interpolation::divided::forward_differences;


/// Expands `(x - r_0)(x - r_1)...(x - r_{s-1})` into `s + 1` coefficients.
///
/// `term[j]` is the coefficient of `x^(s - j)`: it accumulates the signed
/// product `prod_{k in T} (-r_k)` over every subset `T` with `|T| = j`,
/// i.e. the elementary symmetric polynomial `e_j` of the negated roots.
///
/// Callers guarantee `roots.len() < 64`.
pub(crate) fn expand_roots(roots: &[f64]) -> Vec<f64> {
    let s = roots.len();
    let mut term = vec![0.0; s + 1];

    for pattern in 0..(1u64 << s) {
        let mut unit = 1.0;
        for (k, &r) in roots.iter().enumerate() {
            if pattern & (1u64 << k) != 0 {
                unit *= -r;
            }
        }
        term[pattern.count_ones() as usize] += unit;
    }

    term
}


/// Builds monomial coefficients `c` with `c[i]` the coefficient of `x^i`.
///
/// `c.len() == x.len()`. Callers guarantee a validated sample set.
pub(crate) fn assemble(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let fdd = forward_differences(x, y);
    let mut coeffs = vec![0.0; n];

    for (s, &d) in fdd.iter().enumerate() {
        let term = expand_roots(&x[..s]);
        for t in 0..=s {
            coeffs[t] += d * term[s - t];
        }
    }

    debug!("assembled degree-{} polynomial from {} samples", n - 1, n);
    coeffs
}
