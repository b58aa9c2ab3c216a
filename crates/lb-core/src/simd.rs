//! # Portable SIMD variants
//!
//! Lane-parallel versions of both kernels, built on the `wide` crate so the
//! same code vectorizes on x86_64, aarch64 and wasm32.
//!
//! ## Bit-compatibility
//!
//! - [`running_sum_lanes`] is exact: integer addition is associative, so the
//!   result equals [`crate::running_sum`] for every bound.
//! - [`integrate_f_lanes`] is NOT bit-identical to [`crate::integrate_f`].
//!   Each interior sample is computed exactly as the scalar path computes
//!   it, but samples are accumulated in four partial sums that are reduced at
//!   the end, which changes the rounding. The benchmark programs never use it.

use crate::integrand::f;
use wide::{f64x4, i64x4};

/// Number of lanes processed per step.
pub const LANES: usize = 4;

/// Trapezoidal integral of [`f`] over `[a, b]`, interior points four at a time.
///
/// ```rust
/// use lb_core::{integrate_f, simd::integrate_f_lanes};
///
/// let scalar = integrate_f(-100.0, 100.0, 100_000);
/// let lanes = integrate_f_lanes(-100.0, 100.0, 100_000);
/// assert!(((lanes - scalar) / scalar).abs() < 1e-9);
/// ```
pub fn integrate_f_lanes(a: f64, b: f64, n: u32) -> f64 {
    let dx = (b - a) / n as f64;
    let half_dx = dx / 2.0;

    let a_v = f64x4::splat(a);
    let dx_v = f64x4::splat(dx);
    let three = f64x4::splat(3.0);
    let step = f64x4::splat(LANES as f64);

    let interior = n.saturating_sub(1);
    let chunks = interior / LANES as u32;

    let mut idx = f64x4::from([1.0, 2.0, 3.0, 4.0]);
    let mut acc = f64x4::splat(0.0);
    for _ in 0..chunks {
        let x = a_v + idx * dx_v;
        acc = acc + (x * x * x - three) * x * dx_v;
        idx = idx + step;
    }

    let mut s = f(a) * half_dx + acc.reduce_add();
    for i in (1 + chunks * LANES as u32)..n {
        s += f(a + i as f64 * dx) * dx;
    }
    s + f(b) * half_dx
}

/// Sum of `0..=n` using four integer lanes.
///
/// ```rust
/// use lb_core::simd::running_sum_lanes;
///
/// assert_eq!(running_sum_lanes(1_000_000), 500_000_500_000);
/// ```
pub fn running_sum_lanes(n: u32) -> u64 {
    let terms = n as u64 + 1;
    let chunks = terms / LANES as u64;

    let step = i64x4::splat(LANES as i64);
    let mut values = i64x4::new([0, 1, 2, 3]);
    let mut acc = i64x4::splat(0);
    for _ in 0..chunks {
        acc = acc + values;
        values = values + step;
    }

    let mut s = acc.to_array().iter().sum::<i64>() as u64;
    for i in (chunks * LANES as u64)..terms {
        s += i;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integrate_f, running_sum};

    #[test]
    fn test_running_sum_lanes_small_bounds() {
        // Covers every remainder length.
        for n in 0..=64 {
            assert_eq!(running_sum_lanes(n), running_sum(n), "n = {}", n);
        }
    }

    #[test]
    fn test_running_sum_lanes_reference() {
        assert_eq!(running_sum_lanes(1_000_000), 500_000_500_000);
    }

    #[test]
    fn test_integrate_lanes_short_inputs_fall_back_to_scalar_order() {
        // Fewer than LANES interior points never touch the vector path.
        for n in 1..=4 {
            assert_eq!(
                integrate_f_lanes(-3.0, 5.0, n).to_bits(),
                integrate_f(-3.0, 5.0, n).to_bits()
            );
        }
    }

    #[test]
    fn test_integrate_lanes_close_to_scalar() {
        for n in [5, 17, 1000, 100_000] {
            let scalar = integrate_f(-100.0, 100.0, n);
            let lanes = integrate_f_lanes(-100.0, 100.0, n);
            assert!(((lanes - scalar) / scalar).abs() < 1e-9, "n = {}", n);
        }
    }

    #[test]
    fn test_integrate_lanes_empty_interval() {
        assert_eq!(integrate_f_lanes(2.0, 2.0, 1000), 0.0);
    }
}
