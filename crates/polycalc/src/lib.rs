//! # polycalc
//!
//! Polynomial arithmetic, calculus and numeric search over floating-point
//! coefficients.
//!
//! ## Quick Start
//!
//! ```rust
//! use polycalc::prelude::*;
//!
//! let p: Polynomial = poly![1.0, 2.0, -5.0];
//! assert_eq!(p.to_string(), "1 + 2x - 5x^2");
//! assert_eq!(p.derivative().coeffs(), &[2.0, -10.0]);
//!
//! let (root, value) = p.find_root(1.0)?;
//! assert!(value.abs() < 1e-12);
//! assert!((root - 0.6899).abs() < 1e-4);
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polycalc_poly as poly;
pub use polycalc_poly::poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polycalc_poly::poly;
    pub use polycalc_poly::{Coefficient, PolyError, Polynomial, SearchOptions};
}
