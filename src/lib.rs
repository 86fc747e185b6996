//! Equidistant cubic spline interpolation and radix-2 Fourier transforms.
pub mod consts;
pub mod dft;
pub mod error;
pub mod interp;
pub mod linalg;
pub mod utils;
pub use error::{NumericError, Result};
