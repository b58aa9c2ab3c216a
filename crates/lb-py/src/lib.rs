//! LB-Py: Python bindings for the loopbench kernels
//!
//! Exposes the compiled kernels to Python so they can be timed next to the
//! pure-Python, Cython and Numba versions of the same loops.
//!
//! Note: This crate requires a Python 3.x interpreter to build.

use lb_core::error::BenchError;
use lb_core::{integrand, summation, Trapezoid};
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python module for the loopbench kernels
#[pymodule]
fn lb_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(f, m)?)?;
    m.add_function(wrap_pyfunction!(f_array, m)?)?;
    m.add_function(wrap_pyfunction!(integrate_f, m)?)?;
    m.add_function(wrap_pyfunction!(running_sum, m)?)?;
    m.add_function(wrap_pyfunction!(triangular, m)?)?;
    Ok(())
}

fn value_error(err: BenchError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Evaluate `(x**3 - 3) * x`
#[pyfunction]
fn f(x: f64) -> f64 {
    integrand::f(x)
}

/// Evaluate `f` element-wise over a 1-D float64 array
#[pyfunction]
fn f_array<'py>(py: Python<'py>, xs: PyReadonlyArray1<'py, f64>) -> Bound<'py, PyArray1<f64>> {
    xs.as_array().mapv(integrand::f).into_pyarray_bound(py)
}

/// Trapezoidal integral of `f` over `[a, b]` with `n` subintervals
///
/// Raises `ValueError` for `n == 0` or non-finite bounds.
#[pyfunction]
fn integrate_f(py: Python<'_>, a: f64, b: f64, n: u32) -> PyResult<f64> {
    let workload = Trapezoid::new(a, b, n).map_err(value_error)?;
    Ok(py.allow_threads(|| workload.integrate()))
}

/// Sum of `0..=n` computed with an accumulator loop
#[pyfunction]
fn running_sum(n: u32) -> u64 {
    summation::running_sum(n)
}

/// Closed form `n * (n + 1) // 2`
#[pyfunction]
fn triangular(n: u32) -> u64 {
    summation::triangular(n)
}
