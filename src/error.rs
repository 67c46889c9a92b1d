use thiserror::Error;

/// Failures that abort a Newton run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Denominator of a Newton ratio vanished (typically the second derivative)
    #[error("division by zero (numerator {numerator})")]
    DivisionByZero {
        /// Value that was to be divided
        numerator: f64,
    },
    /// Hessian matrix could not be inverted
    #[error("singular Hessian matrix")]
    SingularMatrix,
    /// Parameter rejected in strict mode
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// Length of the start vector does not match the objective
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the objective
        expected: usize,
        /// Length of the given point
        found: usize,
    },
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
