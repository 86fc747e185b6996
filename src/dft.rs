pub mod radix2;
pub use num_complex::Complex64;
pub use radix2::{Direction, fft, ifft, normalize, transform};
