//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order and are never
//! normalized: trailing zeros survive every operation, and the reported
//! degree is always `len - 1`.

use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use crate::coefficient::Coefficient;
use crate::error::{PolyError, Result};

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order; index 0 is the
/// constant term. There is always at least one coefficient.
#[derive(Clone, PartialEq)]
pub struct Polynomial<T: Coefficient = f64> {
    /// Coefficients in ascending degree order. Never empty.
    pub(crate) coeffs: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a new polynomial from coefficients, constant term first.
    ///
    /// Trailing zeros are kept as given.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyCoefficients`] if `coeffs` is empty.
    pub fn new(coeffs: Vec<T>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(PolyError::EmptyCoefficients);
        }
        Ok(Self { coeffs })
    }

    /// Creates a polynomial from a leading constant term and the remaining
    /// coefficients. Cannot fail.
    #[must_use]
    pub fn from_nonempty(constant: T, rest: Vec<T>) -> Self {
        let mut coeffs = Vec::with_capacity(rest.len() + 1);
        coeffs.push(constant);
        coeffs.extend(rest);
        Self { coeffs }
    }

    /// Creates the zero polynomial, a single zero coefficient.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(T::zero())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: T) -> Self {
        Self { coeffs: vec![c] }
    }

    /// Returns the degree, `len - 1`, regardless of the leading coefficient.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the highest-index coefficient, which may be zero.
    #[must_use]
    pub fn leading_coeff(&self) -> T {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i, or zero past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).copied().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Each term is `c_i * x.powf(i)`, summed from the constant upward, so
    /// results match a direct left-to-right sum bit for bit.
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        let mut result = T::zero();
        let mut exponent = T::zero();
        for &c in &self.coeffs {
            result = result + c * x.powf(exponent);
            exponent = exponent + T::one();
        }
        result
    }

    /// Adds two polynomials. The shorter one is padded with zeros.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_padded(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self`. The shorter one is padded with zeros.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_padded(other, |a, b| a - b)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// The result always has `len(self) + len(other) - 1` coefficients.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![T::zero(); n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j] + a * b;
            }
        }

        Self { coeffs: result }
    }

    /// Returns `s * self`. A zero scalar yields the single-coefficient
    /// zero polynomial.
    #[must_use]
    pub fn scaled(&self, s: T) -> Self {
        if s.is_zero() {
            return Self::zero();
        }
        Self {
            coeffs: self.coeffs.iter().map(|&c| s * c).collect(),
        }
    }

    /// Multiplies in place by a scalar.
    ///
    /// A zero scalar collapses the coefficients to `[0]`, so the degree
    /// drops to 0.
    pub fn scalar_multiply(&mut self, s: T) {
        if s.is_zero() {
            self.coeffs = vec![T::zero()];
        } else {
            for c in &mut self.coeffs {
                *c = s * *c;
            }
        }
    }

    fn zip_padded(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| op(self.coeff(i), other.coeff(i)))
            .collect();
        Self { coeffs }
    }
}

impl<T: Coefficient> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = PolyError;

    fn try_from(coeffs: Vec<T>) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl<T: Coefficient> TryFrom<&[T]> for Polynomial<T> {
    type Error = PolyError;

    fn try_from(coeffs: &[T]) -> Result<Self> {
        Self::new(coeffs.to_vec())
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// Operators are implemented on references only. Owned impls would shadow
// the inherent `add`/`sub`/`mul`/`neg` methods whenever `std::ops` is in scope.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident) => {
        impl<T: Coefficient> $trait<&Polynomial<T>> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, rhs: &Polynomial<T>) -> Polynomial<T> {
                Polynomial::$method(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::neg(self)
    }
}

impl<T: Coefficient> MulAssign<T> for Polynomial<T> {
    fn mul_assign(&mut self, s: T) {
        self.scalar_multiply(s);
    }
}
