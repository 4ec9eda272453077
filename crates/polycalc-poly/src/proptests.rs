//! Property-based tests for polynomial arithmetic and calculus.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    // Small integer coefficients keep every sum and product exact in f64.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Polynomials of degree 0-4, trailing zeros allowed
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|coeffs| Polynomial::new(coeffs).expect("strategy yields non-empty vectors"))
    }

    // Polynomials whose leading coefficient is non-zero
    fn proper_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("leading coefficient must be non-zero", |p| {
            p.leading_coeff() != 0.0
        })
    }

    fn sample_point() -> impl Strategy<Value = f64> {
        (-10i32..10i32).prop_map(f64::from)
    }

    proptest! {
        #[test]
        fn degree_is_len_minus_one(coeffs in proptest::collection::vec(small_coeff(), 1..=8)) {
            let len = coeffs.len();
            let p = Polynomial::new(coeffs).unwrap();
            prop_assert_eq!(p.degree(), len - 1);
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_length_is_max(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert_eq!(sum.coeffs().len(), a.coeffs().len().max(b.coeffs().len()));
        }

        #[test]
        fn sub_inverts_add(a in small_poly(), b in small_poly(), x in sample_point()) {
            let back = a.add(&b).sub(&b);
            prop_assert_eq!(back.eval(x), a.eval(x));
            for i in 0..a.coeffs().len() {
                prop_assert_eq!(back.coeff(i), a.coeff(i));
            }
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_length(a in small_poly(), b in small_poly()) {
            let product = a.mul(&b);
            prop_assert_eq!(product.coeffs().len(), a.coeffs().len() + b.coeffs().len() - 1);
        }

        #[test]
        fn mul_degree(a in proper_poly(), b in proper_poly()) {
            // deg(a * b) = deg(a) + deg(b) with no cancellation over the reals
            let product = a.mul(&b);
            prop_assert_eq!(product.degree(), a.degree() + b.degree());
            prop_assert!(product.leading_coeff() != 0.0);
        }

        #[test]
        fn distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in sample_point()) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).eval(x), a.eval(x) + b.eval(x));
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in sample_point()) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).eval(x), a.eval(x) * b.eval(x));
        }

        #[test]
        fn derivative_then_integral_round_trip(a in small_poly()) {
            // Holds only when a has degree >= 1, otherwise the derivative is
            // [0] and the integral [c0, 0] gains a coefficient.
            prop_assume!(a.degree() >= 1);
            let back = a.derivative().integral(a.coeff(0));
            prop_assert_eq!(back, a);
        }

        #[test]
        fn integral_then_derivative_round_trip(a in small_poly(), c in small_coeff()) {
            let back = a.integral(c).derivative();
            prop_assert_eq!(back.coeffs().len(), a.coeffs().len());
            for (got, want) in back.coeffs().iter().zip(a.coeffs()) {
                prop_assert!((got - want).abs() <= 1e-9 * want.abs().max(1.0));
            }
        }

        #[test]
        fn definite_integral_empty_interval(a in small_poly(), x in sample_point()) {
            prop_assert_eq!(a.definite_integral(x, x), 0.0);
        }

        #[test]
        fn scalar_multiply_by_zero_collapses(mut a in small_poly()) {
            a.scalar_multiply(0.0);
            prop_assert_eq!(a.coeffs(), &[0.0][..]);
        }

        #[test]
        fn scaled_matches_in_place(a in small_poly(), s in small_coeff()) {
            let mut b = a.clone();
            b.scalar_multiply(s);
            prop_assert_eq!(a.scaled(s), b);
        }

        #[test]
        fn derivative_never_empty(a in small_poly()) {
            let d = a.derivative();
            prop_assert!(!d.coeffs().is_empty());
            prop_assert_eq!(d.degree(), a.degree().saturating_sub(1));
        }
    }
}
