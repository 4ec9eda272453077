//! Differentiation and integration.
//!
//! Each operation has a pure form returning a new polynomial and an
//! in-place form rewriting the receiver.

use crate::coefficient::Coefficient;
use crate::dense::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// Computes the formal derivative, `[1*c1, 2*c2, ..., n*cn]`.
    ///
    /// The derivative of a constant is the single-coefficient zero
    /// polynomial, never an empty one.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(self.coeffs.len() - 1);
        let mut k = T::zero();
        for &c in self.coeffs.iter().skip(1) {
            k = k + T::one();
            result.push(c * k);
        }

        Self { coeffs: result }
    }

    /// Replaces the polynomial with its derivative.
    pub fn differentiate(&mut self) {
        *self = self.derivative();
    }

    /// Computes the antiderivative with integration constant `c`:
    /// `[c, c0/1, c1/2, ..., cn/(n+1)]`.
    #[must_use]
    pub fn integral(&self, c: T) -> Self {
        let mut result = Vec::with_capacity(self.coeffs.len() + 1);
        result.push(c);

        let mut k = T::zero();
        for &coeff in &self.coeffs {
            k = k + T::one();
            result.push(coeff / k);
        }

        Self { coeffs: result }
    }

    /// Computes the antiderivative with integration constant zero.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        self.integral(T::zero())
    }

    /// Replaces the polynomial with its antiderivative, using integration
    /// constant `c`.
    pub fn integrate(&mut self, c: T) {
        *self = self.integral(c);
    }

    /// Computes the definite integral from `x1` to `x2`.
    #[must_use]
    pub fn definite_integral(&self, x1: T, x2: T) -> T {
        let antiderivative = self.antiderivative();
        antiderivative.eval(x2) - antiderivative.eval(x1)
    }
}
