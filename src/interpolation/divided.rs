//! Forward divided differences.
//!
//! Produces `f[x0], f[x0,x1], ..., f[x0,...,x_{n-1}]`, the leading
//! entry of each level of the divided-difference table.

use log::trace;


/// Computes the forward divided differences of `(x, y)`.
///
/// Level `s` is built from level `s - 1` as
///
/// ```text
/// y_s[t] = (y_{s-1}[t+1] - y_{s-1}[t]) / (x[t+s] - x[t])
/// ```
///
/// and shrinks by one entry; only `y_s[0]` is kept. `O(n^2)`.
///
/// Callers guarantee `x.len() == y.len() >= 1` and distinct x-values.
pub(crate) fn forward_differences(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut fdd = Vec::with_capacity(n);

    let mut level = y.to_vec();
    fdd.push(level[0]);

    for s in 1..n {
        let next: Vec<f64> = (0..level.len() - 1)
            .map(|t| (level[t + 1] - level[t]) / (x[t + s] - x[t]))
            .collect();

        trace!("divided differences level {s}: {} entries", next.len());
        fdd.push(next[0]);
        level = next;
    }

    fdd
}
