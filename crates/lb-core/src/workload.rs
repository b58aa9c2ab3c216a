//! Workload trait and repetition driver
//!
//! A benchmark program is a single workload run many times in a row, with
//! only the last result kept. Repeating the call exists purely to make the
//! execution long enough to time; it has no effect on the printed value,
//! because every run with the same arguments returns the same bits.
//!
//! ## Optimizer Barriers
//!
//! [`repeat`] passes the workload through [`core::hint::black_box`] on every
//! iteration. Without the barrier the compiler is free to notice that the
//! call is pure and evaluate it once, which would defeat the measurement.

/// A fully parameterized kernel invocation
///
/// Implementors carry their arguments by value, so running them has no side
/// effects and `run` is referentially transparent.
///
/// # Example
///
/// ```rust
/// use lb_core::{RunningSum, Workload};
///
/// let w = RunningSum::new(10);
/// assert_eq!(w.name(), "running_sum");
/// assert_eq!(w.run(), 55);
/// ```
pub trait Workload {
    /// Scalar result of one run
    type Output: Copy + PartialEq + core::fmt::Debug;

    /// Short identifier used in log lines and benchmark ids
    fn name(&self) -> &'static str;

    /// Executes the kernel once
    fn run(&self) -> Self::Output;
}

/// Runs `workload` `times` times and returns the last result.
///
/// Returns `None` when `times` is zero.
///
/// ```rust
/// use lb_core::{repeat, RunningSum};
///
/// assert_eq!(repeat(&RunningSum::new(4), 3), Some(10));
/// assert_eq!(repeat(&RunningSum::new(4), 0), None);
/// ```
pub fn repeat<W: Workload>(workload: &W, times: usize) -> Option<W::Output> {
    let mut last = None;
    for _ in 0..times {
        last = Some(core::hint::black_box(workload).run());
    }
    last
}

/// Repetition count of the `integrate` program.
pub const INTEGRATE_REPEATS: usize = 1000;

/// Repetition count of the `runningloop` program.
pub const SUM_REPEATS: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RunningSum, Trapezoid};
    use core::cell::Cell;

    struct Counting<'a> {
        calls: &'a Cell<u32>,
    }

    impl Workload for Counting<'_> {
        type Output = u32;

        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(&self) -> u32 {
            self.calls.set(self.calls.get() + 1);
            self.calls.get()
        }
    }

    #[test]
    fn test_repeat_runs_exactly_n_times_and_keeps_last() {
        let calls = Cell::new(0);
        let w = Counting { calls: &calls };
        assert_eq!(repeat(&w, 5), Some(5));
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_repeat_zero_times() {
        let calls = Cell::new(0);
        let w = Counting { calls: &calls };
        assert_eq!(repeat(&w, 0), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_repeated_result_equals_single_invocation() {
        let t = Trapezoid::new(-10.0, 10.0, 1000).unwrap();
        assert_eq!(repeat(&t, 25).map(f64::to_bits), Some(t.run().to_bits()));

        let s = RunningSum::new(12_345);
        assert_eq!(repeat(&s, 25), Some(s.run()));
    }
}
