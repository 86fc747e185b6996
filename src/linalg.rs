pub mod tridiagonal;
pub use tridiagonal::{TridiagonalMatrix, tridiagonal_solve};
