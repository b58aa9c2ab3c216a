//! The fixed integrand of the quadrature benchmark.

/// Evaluates `f(x) = (x³ - 3)·x`.
///
/// The operations are performed in the order `(x*x*x - 3)*x`, which is what
/// the C and Python versions of the benchmark compute; reordering them (for
/// example as `x⁴ - 3x`) would change the low bits of the result.
///
/// NaN and infinities propagate through the arithmetic unchanged.
///
/// ```rust
/// use lb_core::integrand::f;
///
/// assert_eq!(f(2.0), 10.0);
/// assert_eq!(f(0.0), 0.0);
/// ```
#[inline(always)]
pub fn f(x: f64) -> f64 {
    (x * x * x - 3.0) * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(f(2.0), 10.0);
        assert_eq!(f(-1.5), 9.5625);
        assert_eq!(f(0.5), -1.4375);
        assert_eq!(f(1.0), -2.0);
    }

    #[test]
    fn test_matches_expanded_polynomial_on_exact_inputs() {
        for x in [-100.0, -3.0, -1.0, 0.0, 1.0, 3.0, 100.0] {
            assert_eq!(f(x), x * x * x * x - 3.0 * x);
        }
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        assert!(f(f64::NAN).is_nan());
        assert_eq!(f(f64::INFINITY), f64::INFINITY);
        assert_eq!(f(f64::NEG_INFINITY), f64::INFINITY);
    }
}
