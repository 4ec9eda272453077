//! Numeric bound for polynomial coefficients.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating-point type usable as a polynomial coefficient.
///
/// Anything implementing [`Float`] with a textual form qualifies; in
/// practice this is `f32` and `f64`.
pub trait Coefficient: Float + Display + Debug {}

impl<T: Float + Display + Debug> Coefficient for T {}
