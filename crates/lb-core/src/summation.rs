//! Running sum over `0..=N`.
//!
//! The bound is a `u32` and the accumulator a `u64`: `N(N+1)/2` stays below
//! `2⁶³` for every `u32`, so the loop can never overflow.

use crate::workload::Workload;

/// Bound used by the `runningloop` program.
pub const REFERENCE_N: u32 = 1_000_000;

/// Sums every integer in `0..=n` with an explicit accumulator loop.
///
/// ```rust
/// use lb_core::running_sum;
///
/// assert_eq!(running_sum(10), 55);
/// ```
#[inline]
pub fn running_sum(n: u32) -> u64 {
    let mut s: u64 = 0;
    for i in 0..=n {
        s += i as u64;
    }
    s
}

/// Closed form `n(n+1)/2`, equal to [`running_sum`] for every `n`.
#[inline]
pub const fn triangular(n: u32) -> u64 {
    let n = n as u64;
    n * (n + 1) / 2
}

/// One fully parameterized running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningSum {
    n: u32,
}

impl RunningSum {
    /// Creates a summation workload over `0..=n`.
    pub const fn new(n: u32) -> Self {
        RunningSum { n }
    }

    /// The argument of the `runningloop` program: `N = 1000000`.
    pub const fn reference() -> Self {
        RunningSum::new(REFERENCE_N)
    }

    /// Inclusive upper bound.
    pub fn n(&self) -> u32 {
        self.n
    }
}

impl Workload for RunningSum {
    type Output = u64;

    fn name(&self) -> &'static str {
        "running_sum"
    }

    #[inline]
    fn run(&self) -> u64 {
        running_sum(self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sums() {
        assert_eq!(running_sum(0), 0);
        assert_eq!(running_sum(1), 1);
        assert_eq!(running_sum(10), 55);
        assert_eq!(running_sum(REFERENCE_N), 500_000_500_000);
    }

    #[test]
    fn test_closed_form_matches_loop_exhaustively() {
        for n in 0..=10_000 {
            assert_eq!(running_sum(n), triangular(n), "n = {}", n);
        }
    }

    #[test]
    fn test_closed_form_does_not_overflow_at_u32_max() {
        assert_eq!(triangular(u32::MAX), 9_223_372_034_707_292_160);
    }

    #[test]
    fn test_reference_workload() {
        let w = RunningSum::reference();
        assert_eq!(w.n(), 1_000_000);
        assert_eq!(w.name(), "running_sum");
        assert_eq!(w.run(), 500_000_500_000);
    }
}
