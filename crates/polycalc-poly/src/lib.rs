//! # polycalc-poly
//!
//! Dense univariate polynomials over floating-point coefficients.
//!
//! This crate provides:
//! - A `Polynomial` value type with coefficients in ascending degree order
//! - Arithmetic: addition, subtraction, convolution product, scalar multiple
//! - Calculus: derivative, antiderivative, definite integral
//! - Numeric search: Newton root finding, gradient descent and ascent
//!
//! ## Representation
//!
//! Coefficients are never normalized. `Polynomial::new(vec![1.0, 0.0])`
//! keeps both entries and reports degree 1, even though it prints as `1`.
//!
//! ## Pure and in-place operations
//!
//! Differentiation, integration and scalar multiplication come in two forms:
//! a pure one returning a new polynomial (`derivative`, `integral`, `scaled`)
//! and an in-place one (`differentiate`, `integrate`, `scalar_multiply`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculus;
pub mod coefficient;
pub mod dense;
pub mod error;
pub mod format;
pub mod search;

#[cfg(test)]
mod proptests;

pub use coefficient::Coefficient;
pub use dense::Polynomial;
pub use error::{PolyError, Result};
pub use search::SearchOptions;

/// Builds a [`Polynomial`] from a non-empty list of coefficients,
/// constant term first.
///
/// ```
/// use polycalc_poly::poly;
///
/// let p: polycalc_poly::Polynomial = poly![1.0, 2.0, -5.0];
/// assert_eq!(p.to_string(), "1 + 2x - 5x^2");
/// ```
#[macro_export]
macro_rules! poly {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Polynomial::from_nonempty($first, ::std::vec![$($rest),*])
    };
}
