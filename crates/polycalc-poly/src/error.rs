//! Errors produced by polynomial construction and numeric search.

use thiserror::Error;

/// Errors that can occur when building or searching a polynomial.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// A polynomial needs at least one coefficient.
    #[error("polynomial requires at least one coefficient")]
    EmptyCoefficients,

    /// Newton's method reached a point where the derivative is exactly zero.
    #[error("derivative evaluated to zero at x = {x} (iteration {iteration}), Newton step would divide by zero")]
    DivisionByZero {
        /// Zero-based index of the iteration that failed.
        iteration: usize,
        /// The iterate at which the derivative vanished.
        x: f64,
    },
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
