use crate::interpolation::errors::InterpolationError;

pub trait Interpolator {
    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates `steps + 1` evenly spaced points on `[lo, hi]`,
    /// both ends included; `steps == 0` yields `lo` alone
    fn eval_grid(&self, lo: f64, hi: f64, steps: usize) -> Result<Vec<(f64, f64)>, InterpolationError> {
        (0..=steps)
            .map(|s| {
                let xq = match s {
                    0 => lo,
                    s if s == steps => hi,
                    s => lo + (hi - lo) * (s as f64 / steps as f64),
                };
                self.eval(xq).map(|yq| (xq, yq))
            })
            .collect()
    }
}
