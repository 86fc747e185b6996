use crate::{
    error::Result,
    interp::{InterpolationMethod, validate_samples},
    utils::{lerp, locate_interval},
};

/// Broken-line interpolation over equidistant knots.
#[derive(Debug, Clone, Default)]
pub struct PiecewiseLinear {
    a: f64,
    b: f64,
    n: usize,
    h: f64,
    y: Vec<f64>,
}

impl InterpolationMethod for PiecewiseLinear {
    fn init(&mut self, a: f64, b: f64, n: usize, y: &[f64]) -> Result<()> {
        validate_samples(a, b, n, y)?;
        self.a = a;
        self.b = b;
        self.n = n;
        self.h = (b - a) / n as f64;
        self.y = y[..=n].to_vec();
        Ok(())
    }
    fn evaluate(&self, z: f64) -> f64 {
        match self.y.as_slice() {
            [] => f64::NAN,
            _ if z.is_nan() => f64::NAN,
            [first, ..] if z <= self.a => *first,
            [.., last] if z >= self.b => *last,
            _ => {
                let i = locate_interval(self.a, self.h, self.n, z);
                let t = (z - (self.a + i as f64 * self.h)) / self.h;
                lerp(self.y[i], self.y[i + 1], t.clamp(0.0, 1.0))
            }
        }
    }
    fn bounds(&self) -> (f64, f64) {
        (self.a, self.b)
    }
    fn interval_count(&self) -> usize {
        self.n
    }
}
