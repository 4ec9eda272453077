//! Numeric root and extremum search.
//!
//! All searches run a fixed number of iterations with no convergence test.
//! They return whatever point the iteration lands on, which may be a
//! non-real fixed point, a saddle, or a diverged (infinite or NaN) value.
//!
//! - Newton's method: `x ← x - p(x) / p'(x)`
//! - Gradient descent: `x ← x - lr · p'(x)`
//! - Gradient ascent: `x ← x + lr · p'(x)`

use num_traits::NumCast;
use tracing::{debug, warn};

use crate::coefficient::Coefficient;
use crate::dense::Polynomial;
use crate::error::{PolyError, Result};

/// Default number of iterations for every search.
pub const DEFAULT_ITERATIONS: usize = 2500;

/// Default step size for gradient descent and ascent.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Tuning knobs for the gradient searches.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions<T = f64> {
    /// Step size applied to the derivative on each iteration.
    pub learning_rate: T,
    /// Number of iterations to run.
    pub iterations: usize,
}

impl<T: Coefficient> SearchOptions<T> {
    /// Creates options with the given learning rate and iteration count.
    #[must_use]
    pub fn new(learning_rate: T, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: T) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the iteration count.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl<T: Coefficient> Default for SearchOptions<T> {
    fn default() -> Self {
        Self {
            learning_rate: <T as NumCast>::from(DEFAULT_LEARNING_RATE).unwrap_or_else(T::epsilon),
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Descent,
    Ascent,
}

impl<T: Coefficient> Polynomial<T> {
    /// Finds a root by Newton's method from `start_x`, running
    /// [`DEFAULT_ITERATIONS`] steps.
    ///
    /// Returns the final iterate and the polynomial's value there.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if the derivative is exactly
    /// zero at any iterate, including `start_x`.
    pub fn find_root(&self, start_x: T) -> Result<(T, T)> {
        self.find_root_with(start_x, DEFAULT_ITERATIONS)
    }

    /// Finds a root by Newton's method, running exactly `iterations` steps.
    ///
    /// The derivative is checked before every update; a zero derivative
    /// aborts the search at once.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if the derivative is exactly
    /// zero at any iterate.
    pub fn find_root_with(&self, start_x: T, iterations: usize) -> Result<(T, T)> {
        debug!(start_x = %start_x, iterations, degree = self.degree(), "newton search");

        let derivative = self.derivative();
        let mut x = start_x;
        for iteration in 0..iterations {
            let slope = derivative.eval(x);
            if slope.is_zero() {
                warn!(iteration, x = %x, "derivative vanished, aborting newton search");
                return Err(PolyError::DivisionByZero {
                    iteration,
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }
            x = x - self.eval(x) / slope;
        }

        let value = self.eval(x);
        debug!(x = %x, value = %value, "newton search finished");
        Ok((x, value))
    }

    /// Approaches a local minimum by gradient descent with default options.
    ///
    /// Returns the final point and the polynomial's value there.
    #[must_use]
    pub fn local_minimum(&self, start_x: T) -> (T, T) {
        self.gradient_walk(start_x, &SearchOptions::default(), Direction::Descent)
    }

    /// Approaches a local minimum by gradient descent, running the step size
    /// and iteration count in `options` as given.
    #[must_use]
    pub fn local_minimum_with(&self, start_x: T, options: &SearchOptions<T>) -> (T, T) {
        self.gradient_walk(start_x, options, Direction::Descent)
    }

    /// Approaches a local maximum by gradient ascent with default options.
    ///
    /// Returns the final point and the polynomial's value there.
    #[must_use]
    pub fn local_maximum(&self, start_x: T) -> (T, T) {
        self.gradient_walk(start_x, &SearchOptions::default(), Direction::Ascent)
    }

    /// Approaches a local maximum by gradient ascent, running the step size
    /// and iteration count in `options` as given.
    #[must_use]
    pub fn local_maximum_with(&self, start_x: T, options: &SearchOptions<T>) -> (T, T) {
        self.gradient_walk(start_x, options, Direction::Ascent)
    }

    fn gradient_walk(&self, start_x: T, options: &SearchOptions<T>, direction: Direction) -> (T, T) {
        debug!(
            start_x = %start_x,
            learning_rate = %options.learning_rate,
            iterations = options.iterations,
            ascent = matches!(direction, Direction::Ascent),
            "gradient search"
        );

        let derivative = self.derivative();
        let lr = options.learning_rate;
        let mut x = start_x;
        for _ in 0..options.iterations {
            let step = lr * derivative.eval(x);
            x = match direction {
                Direction::Descent => x - step,
                Direction::Ascent => x + step,
            };
        }

        let value = self.eval(x);
        debug!(x = %x, value = %value, "gradient search finished");
        (x, value)
    }
}
