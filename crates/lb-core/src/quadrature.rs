//! Composite trapezoidal rule over the fixed integrand.
//!
//! The sum is accumulated strictly left to right: the left endpoint weighted
//! by `dx / 2`, then every interior point weighted by `dx`, then the right
//! endpoint weighted by `dx / 2`. Keeping this order is what makes the result
//! bit-identical to the C reference (`x=4000000002.666731` for the reference
//! arguments). See [`crate::simd::integrate_f_lanes`] for a vectorized
//! variant that gives up that property.

use crate::error::{BenchError, Result};
use crate::integrand::f;
use crate::workload::Workload;

/// Lower bound used by the `integrate` program.
pub const REFERENCE_A: f64 = -100.0;
/// Upper bound used by the `integrate` program.
pub const REFERENCE_B: f64 = 100.0;
/// Subinterval count used by the `integrate` program.
pub const REFERENCE_N: u32 = 100_000;

/// Integrates `func` over `[a, b]` with `n` equal subintervals.
///
/// Bounds are not required to be ordered; `a > b` yields the negated
/// integral. `n = 0` is not rejected and produces a non-finite result.
#[inline]
pub fn trapezoid<F>(func: F, a: f64, b: f64, n: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let dx = (b - a) / n as f64;
    let half_dx = dx / 2.0;
    let mut s = func(a) * half_dx;
    for i in 1..n {
        s += func(a + i as f64 * dx) * dx;
    }
    s += func(b) * half_dx;
    s
}

/// Integrates [`f`] over `[a, b]` with `n` equal subintervals.
///
/// ```rust
/// use lb_core::integrate_f;
///
/// let x = integrate_f(-100.0, 100.0, 100_000);
/// assert_eq!(format!("{:.6}", x), "4000000002.666731");
/// ```
#[inline]
pub fn integrate_f(a: f64, b: f64, n: u32) -> f64 {
    trapezoid(f, a, b, n)
}

/// Exact value of `∫ₐᵇ f(x) dx`, i.e. `[x⁵/5 - 3x²/2]` evaluated at the bounds.
pub fn analytic_integral(a: f64, b: f64) -> f64 {
    let antiderivative = |x: f64| x * x * x * x * x / 5.0 - 1.5 * x * x;
    antiderivative(b) - antiderivative(a)
}

/// One fully parameterized trapezoidal integration of [`f`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    a: f64,
    b: f64,
    n: u32,
}

impl Trapezoid {
    /// Creates a checked integration workload.
    ///
    /// # Errors
    ///
    /// - [`BenchError::InvalidSubintervals`] if `n == 0`
    /// - [`BenchError::NonFiniteBound`] if `a` or `b` is NaN or infinite
    pub fn new(a: f64, b: f64, n: u32) -> Result<Self> {
        if n == 0 {
            return Err(BenchError::invalid_subintervals(n));
        }
        if !a.is_finite() {
            return Err(BenchError::non_finite_bound("a", a));
        }
        if !b.is_finite() {
            return Err(BenchError::non_finite_bound("b", b));
        }
        Ok(Trapezoid { a, b, n })
    }

    /// The arguments of the `integrate` program: `[-100, 100]`, `n = 100000`.
    pub const fn reference() -> Self {
        Trapezoid {
            a: REFERENCE_A,
            b: REFERENCE_B,
            n: REFERENCE_N,
        }
    }

    /// Lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Number of subintervals.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Runs the integration.
    #[inline]
    pub fn integrate(&self) -> f64 {
        integrate_f(self.a, self.b, self.n)
    }

    /// Absolute difference between this estimate and [`analytic_integral`].
    pub fn abs_error(&self) -> f64 {
        (self.integrate() - analytic_integral(self.a, self.b)).abs()
    }
}

impl Workload for Trapezoid {
    type Output = f64;

    fn name(&self) -> &'static str {
        "integrate_f"
    }

    #[inline]
    fn run(&self) -> f64 {
        self.integrate()
    }
}
