//! Recursive radix-2 decimation-in-time transforms.
//!
//! Neither direction is normalized: `ifft(fft(x))` equals `n * x`. Use
//! [`normalize`] to divide by the length explicitly.

use num_complex::Complex64;
use std::f64::consts::PI;
use tracing::warn;
use crate::error::{NumericError, Result};

/// Sign of the twiddle exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `e^{-2πi jk/n}`
    Forward,
    /// `e^{+2πi jk/n}`
    Inverse,
}

impl Direction {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }
}

pub fn transform(c: &[Complex64], direction: Direction) -> Result<Vec<Complex64>> {
    let n = c.len();
    if !n.is_power_of_two() {
        warn!("Rejected {:?} transform of length {}", direction, n);
        return Err(NumericError::InvalidArgument(format!(
            "transform length must be a power of two, got {}", n
        )));
    }
    Ok(butterfly(c, direction.sign()))
}
pub fn fft(c: &[Complex64]) -> Result<Vec<Complex64>> {
    transform(c, Direction::Forward)
}
/// Inverse transform with positive twiddle exponent and no `1/n` factor.
pub fn ifft(c: &[Complex64]) -> Result<Vec<Complex64>> {
    transform(c, Direction::Inverse)
}
pub fn normalize(c: &mut [Complex64]) {
    let scale = 1.0 / c.len() as f64;
    c.iter_mut().for_each(|v| *v *= scale);
}
fn butterfly(c: &[Complex64], sign: f64) -> Vec<Complex64> {
    let n = c.len();
    if n == 1 {
        return c.to_vec();
    }
    let m = n / 2;
    let even: Vec<Complex64> = c.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = c.iter().skip(1).step_by(2).copied().collect();
    let z1 = butterfly(&even, sign);
    let z2 = butterfly(&odd, sign);
    let mut v = vec![Complex64::new(0.0, 0.0); n];
    for j in 0..m {
        let t = Complex64::from_polar(1.0, sign * 2.0 * PI * j as f64 / n as f64) * z2[j];
        v[j] = z1[j] + t;
        v[m + j] = z1[j] - t;
    }
    v
}
