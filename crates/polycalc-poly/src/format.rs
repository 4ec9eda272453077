//! Textual forms of a polynomial.
//!
//! `Display` gives the algebraic form, `1 + 2x - 5x^2`. `Debug` gives a
//! constructor-like form, `Poly(1, 2, -5)`, that lists every stored
//! coefficient including trailing zeros.

use std::fmt;

use crate::coefficient::Coefficient;
use crate::dense::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// Returns the algebraic form, same as `to_string()`.
    #[must_use]
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Returns the constructor-like form, same as `format!("{self:?}")`.
    #[must_use]
    pub fn debug_repr(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: Coefficient> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &c) in self.coeffs.iter().enumerate() {
            if i == 0 {
                write!(f, "{c}")?;
                continue;
            }
            if c.is_zero() {
                continue;
            }

            let sign = if c < T::zero() { '-' } else { '+' };
            write!(f, " {sign} ")?;

            let magnitude = c.abs();
            if magnitude != T::one() {
                write!(f, "{magnitude}")?;
            }
            f.write_str("x")?;
            if i > 1 {
                write!(f, "^{i}")?;
            }
        }
        Ok(())
    }
}

impl<T: Coefficient> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Poly(")?;
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str(")")
    }
}
