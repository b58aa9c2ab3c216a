//! Error types for the checked entry points
//!
//! The kernels themselves never fail: `integrate_f` with `n = 0` simply
//! produces NaN/Inf, exactly like the reference programs. Callers that accept
//! user input (the Python and Wasm bindings) go through the checked
//! constructors instead, which report a `BenchError`.

/// Error type for checked workload construction
///
/// The enum carries no heap data so it stays usable without `alloc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BenchError {
    /// The subinterval count of a trapezoidal integration was zero
    InvalidSubintervals {
        /// The rejected subinterval count
        n: u32,
    },

    /// An integration bound was NaN or infinite
    NonFiniteBound {
        /// Which bound (`"a"` or `"b"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl BenchError {
    /// Creates an InvalidSubintervals error
    ///
    /// # Example
    ///
    /// ```rust
    /// use lb_core::error::BenchError;
    ///
    /// let err = BenchError::invalid_subintervals(0);
    /// ```
    pub fn invalid_subintervals(n: u32) -> Self {
        BenchError::InvalidSubintervals { n }
    }

    /// Creates a NonFiniteBound error
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the offending bound
    /// * `value` - The non-finite value
    ///
    /// # Example
    ///
    /// ```rust
    /// use lb_core::error::BenchError;
    ///
    /// let err = BenchError::non_finite_bound("a", f64::NAN);
    /// ```
    pub fn non_finite_bound(name: &'static str, value: f64) -> Self {
        BenchError::NonFiniteBound { name, value }
    }
}

impl core::fmt::Display for BenchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BenchError::InvalidSubintervals { n } => {
                write!(f, "Invalid subinterval count {}: must be at least 1", n)
            }
            BenchError::NonFiniteBound { name, value } => {
                write!(f, "Integration bound '{}' must be finite, got {}", name, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BenchError {}

#[cfg(all(not(feature = "std"), feature = "core_error"))]
impl core::error::Error for BenchError {}

/// Result type alias for checked loopbench operations
///
/// # Example
///
/// ```rust
/// use lb_core::error::Result;
/// use lb_core::Trapezoid;
///
/// fn unit_interval(n: u32) -> Result<f64> {
///     Ok(Trapezoid::new(0.0, 1.0, n)?.integrate())
/// }
///
/// assert!(unit_interval(0).is_err());
/// ```
pub type Result<T> = core::result::Result<T, BenchError>;
