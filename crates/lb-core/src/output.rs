//! Lines printed by the benchmark programs.
//!
//! Both formats match the C reference programs byte for byte: `x=%f` for the
//! integral (six digits after the point) and `%ld` for the sum.

use core::fmt;

/// Result line of the `integrate` program, displayed as `x=<value>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralLine(pub f64);

impl fmt::Display for IntegralLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={:.6}", self.0)
    }
}

/// Result line of the `runningloop` program, displayed as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumLine(pub u64);

impl fmt::Display for SumLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
