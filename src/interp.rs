pub mod cubic_spline;
pub mod hermite;
pub mod linear;
pub use cubic_spline::CubicSpline;
pub use linear::PiecewiseLinear;
use crate::error::Result;

/// Interpolation over `n + 1` equidistant samples of `[a, b]`.
///
/// Implementations clamp: evaluating left of `a` yields the first sample,
/// right of `b` the last one.
pub trait InterpolationMethod {
    /// Takes the first `n + 1` values of `y` as samples at `a + i * (b - a) / n`.
    fn init(&mut self, a: f64, b: f64, n: usize, y: &[f64]) -> Result<()>;
    fn evaluate(&self, z: f64) -> f64;
    fn bounds(&self) -> (f64, f64);
    fn interval_count(&self) -> usize;
    fn evaluate_many(&self, zs: &[f64]) -> Vec<f64> {
        zs.iter().map(|&z| self.evaluate(z)).collect()
    }
}

pub(crate) fn validate_samples(a: f64, b: f64, n: usize, y: &[f64]) -> Result<()> {
    use crate::error::NumericError::InvalidArgument;
    if n < 1 {
        return Err(InvalidArgument("interval count must be at least 1".to_string()));
    }
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(InvalidArgument(format!("invalid bounds [{}, {}]", a, b)));
    }
    if y.len() < n + 1 {
        return Err(InvalidArgument(format!(
            "{} intervals need {} samples, got {}", n, n + 1, y.len()
        )));
    }
    Ok(())
}
