use tracing::debug;
use crate::{
    error::{NumericError, Result},
    interp::{InterpolationMethod, hermite, validate_samples},
    linalg::TridiagonalMatrix,
    utils::locate_interval,
};

/// C¹ cubic spline over equidistant knots with clamped end slopes.
///
/// Interior slopes come from the `1 4 1` tridiagonal system; each interval is
/// then evaluated as a cubic Hermite segment.
#[derive(Debug, Clone, Default)]
pub struct CubicSpline {
    a: f64,
    b: f64,
    n: usize,
    h: f64,
    y: Vec<f64>,
    yprime: Vec<f64>,
}

impl CubicSpline {
    pub fn new(a: f64, b: f64, n: usize, y: &[f64]) -> Result<Self> {
        let mut spline = Self::default();
        spline.init(a, b, n, y)?;
        Ok(spline)
    }
    /// Slopes at the knots, boundary values included.
    pub fn get_derivatives(&self) -> &[f64] {
        &self.yprime
    }
    /// Replaces the end slopes and re-solves every interior slope.
    pub fn set_boundary_conditions(&mut self, yprime0: f64, yprimen: f64) -> Result<()> {
        if self.yprime.is_empty() {
            return Err(NumericError::Uninitialized);
        }
        let n = self.n;
        self.yprime[0] = yprime0;
        self.yprime[n] = yprimen;
        if n > 1 {
            self.compute_derivatives()?;
        }
        Ok(())
    }
    /// Interior slopes `yprime[1..n]` from the current samples and end slopes.
    ///
    /// Row `i - 1` reads `yprime[i-1] + 4 yprime[i] + yprime[i+1] = 3/h (y[i+1] - y[i-1])`;
    /// the known end slopes move to the right-hand side of the first and last
    /// rows. With `n == 2` both corrections land on the single row.
    fn compute_derivatives(&mut self) -> Result<()> {
        let (n, h) = (self.n, self.h);
        let scale = 3.0 / h;
        let mut c: Vec<f64> = (1..n)
            .map(|i| scale * (self.y[i + 1] - self.y[i - 1]))
            .collect();
        c[0] -= self.yprime[0];
        c[n - 2] -= self.yprime[n];
        let matrix = TridiagonalMatrix::from_constant_bands(n - 1, 1.0, 4.0, 1.0)?;
        let interior = matrix.solve(&c)?;
        self.yprime[1..n].copy_from_slice(&interior);
        debug!(
            "Spline slopes solved: n={}, boundary=({}, {})",
            n, self.yprime[0], self.yprime[n]
        );
        Ok(())
    }
    /// First derivative of the spline; zero outside `[a, b]`, where it is clamped.
    pub fn derivative(&self, z: f64) -> f64 {
        if self.y.is_empty() || z.is_nan() {
            return f64::NAN;
        }
        if z < self.a || z > self.b {
            return 0.0;
        }
        let (i, t) = self.segment(z);
        (self.y[i] * hermite::dh0(t)
            + self.y[i + 1] * hermite::dh1(t)
            + self.h * self.yprime[i] * hermite::dh2(t)
            + self.h * self.yprime[i + 1] * hermite::dh3(t))
            / self.h
    }
    #[inline]
    fn segment(&self, z: f64) -> (usize, f64) {
        let i = locate_interval(self.a, self.h, self.n, z);
        let t = (z - (self.a + i as f64 * self.h)) / self.h;
        (i, t.clamp(0.0, 1.0))
    }
    #[inline]
    fn hermite(&self, t: f64, i: usize) -> f64 {
        self.y[i] * hermite::h0(t)
            + self.y[i + 1] * hermite::h1(t)
            + self.h * self.yprime[i] * hermite::h2(t)
            + self.h * self.yprime[i + 1] * hermite::h3(t)
    }
}

impl InterpolationMethod for CubicSpline {
    /// End slopes start at zero; call [`CubicSpline::set_boundary_conditions`]
    /// to clamp them to other values.
    fn init(&mut self, a: f64, b: f64, n: usize, y: &[f64]) -> Result<()> {
        validate_samples(a, b, n, y)?;
        self.a = a;
        self.b = b;
        self.n = n;
        self.h = (b - a) / n as f64;
        self.y = y[..=n].to_vec();
        self.yprime = vec![0.0; n + 1];
        if n > 1 {
            self.compute_derivatives()?;
        }
        Ok(())
    }
    fn evaluate(&self, z: f64) -> f64 {
        match self.y.as_slice() {
            [] => f64::NAN,
            _ if z.is_nan() => f64::NAN,
            [first, ..] if z <= self.a => *first,
            [.., last] if z >= self.b => *last,
            _ => {
                let (i, t) = self.segment(z);
                self.hermite(t, i)
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
