use ndarray::Array2;
use tracing::warn;
use crate::error::{NumericError, Result};

/// Square matrix that is zero outside the main diagonal and its two neighbours.
///
/// `lower[i]` sits at `(i + 1, i)`, `upper[i]` at `(i, i + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalMatrix {
    lower: Vec<f64>,
    diag: Vec<f64>,
    upper: Vec<f64>,
}

impl TridiagonalMatrix {
    pub fn new(lower: Vec<f64>, diag: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if diag.is_empty() {
            return Err(NumericError::InvalidArgument("diag is empty".to_string()));
        }
        let off = diag.len() - 1;
        if lower.len() != off || upper.len() != off {
            return Err(NumericError::InvalidArgument(format!(
                "band lengths lower={}, diag={}, upper={} (expected {}, {}, {})",
                lower.len(), diag.len(), upper.len(), off, off + 1, off
            )));
        }
        Ok(Self { lower, diag, upper })
    }
    /// Constant-band matrix, e.g. the `1 4 1` system used by the cubic spline.
    pub fn from_constant_bands(size: usize, lower: f64, diag: f64, upper: f64) -> Result<Self> {
        let off = size.saturating_sub(1);
        Self::new(vec![lower; off], vec![diag; size], vec![upper; off])
    }
    #[inline]
    pub fn size(&self) -> usize {
        self.diag.len()
    }
    /// Thomas algorithm: forward elimination followed by back substitution.
    /// Works on private copies, `self` and `rhs` are left untouched.
    pub fn solve(&self, rhs: &[f64]) -> Result<Vec<f64>> {
        let k = self.size();
        if rhs.len() != k {
            return Err(NumericError::InvalidArgument(format!(
                "rhs length {} does not match matrix size {}", rhs.len(), k
            )));
        }
        let mut diag = self.diag.clone();
        let mut c = rhs.to_vec();
        if diag[0] == 0.0 {
            warn!("Zero pivot at row 0");
            return Err(NumericError::Singular { row: 0 });
        }
        for i in 1..k {
            let factor = self.lower[i - 1] / diag[i - 1];
            diag[i] -= factor * self.upper[i - 1];
            c[i] -= factor * c[i - 1];
            if diag[i] == 0.0 {
                warn!("Zero pivot at row {}", i);
                return Err(NumericError::Singular { row: i });
            }
        }
        let mut x = vec![0.0; k];
        x[k - 1] = c[k - 1] / diag[k - 1];
        for i in (0..k - 1).rev() {
            x[i] = (c[i] - self.upper[i] * x[i + 1]) / diag[i];
        }
        Ok(x)
    }
    pub fn mul_vec(&self, x: &[f64]) -> Result<Vec<f64>> {
        let k = self.size();
        if x.len() != k {
            return Err(NumericError::InvalidArgument(format!(
                "vector length {} does not match matrix size {}", x.len(), k
            )));
        }
        Ok((0..k)
            .map(|i| {
                let mut acc = self.diag[i] * x[i];
                if i > 0 {
                    acc += self.lower[i - 1] * x[i - 1];
                }
                if i + 1 < k {
                    acc += self.upper[i] * x[i + 1];
                }
                acc
            })
            .collect())
    }
    pub fn to_dense(&self) -> Array2<f64> {
        let k = self.size();
        Array2::from_shape_fn((k, k), |(r, c)| match () {
            _ if r == c => self.diag[r],
            _ if r == c + 1 => self.lower[c],
            _ if c == r + 1 => self.upper[r],
            _ => 0.0,
        })
    }
}

/// Solves `A x = rhs` for the tridiagonal `A` given by its three bands.
pub fn tridiagonal_solve(lower: &[f64], diag: &[f64], upper: &[f64], rhs: &[f64]) -> Result<Vec<f64>> {
    if diag.len() != rhs.len() {
        return Err(NumericError::InvalidArgument(format!(
            "diag length {} does not match rhs length {}", diag.len(), rhs.len()
        )));
    }
    TridiagonalMatrix::new(lower.to_vec(), diag.to_vec(), upper.to_vec())?.solve(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    const EPS: f64 = 1e-9;
    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "Length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() <= EPS * e.abs().max(1.0), "Row {}: expected {}, got {}", i, e, a);
        }
    }
    #[test]
    fn test_spline_system_residual() -> Result<()> {
        for k in [1, 2, 3, 7, 50] {
            let matrix = TridiagonalMatrix::from_constant_bands(k, 1.0, 4.0, 1.0)?;
            let rhs: Vec<f64> = (0..k).map(|i| (i as f64 * 0.7).sin() * 10.0 + 1.0).collect();
            let x = matrix.solve(&rhs)?;
            assert_close(&matrix.mul_vec(&x)?, &rhs);
        }
        Ok(())
    }
    #[test]
    fn test_general_system() -> Result<()> {
        let lower = [2.0, -1.0, 0.5];
        let diag = [5.0, 6.0, 7.0, 3.0];
        let upper = [1.0, 1.5, -2.0];
        let expected = [1.0, -2.0, 3.0, 0.5];
        let matrix = TridiagonalMatrix::new(lower.to_vec(), diag.to_vec(), upper.to_vec())?;
        let rhs = matrix.mul_vec(&expected)?;
        let x = tridiagonal_solve(&lower, &diag, &upper, &rhs)?;
        assert_close(&x, &expected);
        Ok(())
    }
    #[test]
    fn test_dense_matches_band_product() -> Result<()> {
        let matrix = TridiagonalMatrix::new(vec![1.0, 2.0], vec![4.0, 5.0, 6.0], vec![3.0, 7.0])?;
        let dense = matrix.to_dense();
        assert_eq!(dense[[1, 0]], 1.0);
        assert_eq!(dense[[0, 1]], 3.0);
        assert_eq!(dense[[2, 0]], 0.0);
        let x = [1.0, -1.0, 2.0];
        let dense_product = dense.dot(&Array1::from(x.to_vec()));
        assert_close(dense_product.as_slice().unwrap(), &matrix.mul_vec(&x)?);
        Ok(())
    }
    #[test]
    fn test_inputs_not_mutated() -> Result<()> {
        let diag = vec![4.0, 4.0, 4.0];
        let rhs = vec![1.0, 2.0, 3.0];
        let matrix = TridiagonalMatrix::from_constant_bands(3, 1.0, 4.0, 1.0)?;
        let _ = matrix.solve(&rhs)?;
        assert_eq!(rhs, vec![1.0, 2.0, 3.0]);
        assert_eq!(matrix, TridiagonalMatrix::new(vec![1.0; 2], diag, vec![1.0; 2])?);
        Ok(())
    }
    #[test]
    fn test_length_mismatch() {
        let err = tridiagonal_solve(&[1.0], &[4.0, 4.0], &[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
        let err = tridiagonal_solve(&[1.0, 1.0], &[4.0, 4.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
        let err = tridiagonal_solve(&[], &[], &[], &[]).unwrap_err();
        assert!(matches!(err, NumericError::InvalidArgument(_)));
    }
    #[test]
    fn test_zero_pivot() {
        let err = tridiagonal_solve(&[], &[0.0], &[], &[1.0]).unwrap_err();
        assert_eq!(err, NumericError::Singular { row: 0 });
        // second pivot: 1 - (1/1) * 1 = 0
        let err = tridiagonal_solve(&[1.0], &[1.0, 1.0], &[1.0], &[1.0, 2.0]).unwrap_err();
        assert_eq!(err, NumericError::Singular { row: 1 });
    }
}
