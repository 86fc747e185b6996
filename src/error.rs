use thiserror::Error;

/// Errors raised by the solver, the interpolators and the transforms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Singular system: zero pivot at row {row}")]
    Singular { row: usize },

    #[error("Interpolator used before init")]
    Uninitialized,
}

pub type Result<T> = std::result::Result<T, NumericError>;
