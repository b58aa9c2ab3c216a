//! LB-Core: fixed-function numeric kernels for throughput baselines
//!
//! This crate holds the two kernels timed by the loopbench programs, written
//! so that their results are bit-comparable with the C, Cython and Numba
//! versions they are measured against.
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`error::BenchError`]
//! - `core_error`: implements `core::error::Error` when `std` is disabled
//!
//! # Modules
//!
//! - [`integrand`]: the fixed integrand `f(x) = (x³ - 3)·x`
//! - [`quadrature`]: composite trapezoidal rule over `f`
//! - [`summation`]: running sum over `0..=N`
//! - [`simd`]: portable-SIMD lane variants of both kernels
//! - [`workload`]: the [`Workload`] trait and the repetition driver
//! - [`output`]: the lines printed by the benchmark programs
//! - [`error`]: error type for the checked entry points

#![no_std]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod error;
pub mod integrand;
pub mod output;
pub mod quadrature;
pub mod simd;
pub mod summation;
pub mod workload;

pub use error::{BenchError, Result};
pub use quadrature::{integrate_f, Trapezoid};
pub use summation::{running_sum, triangular, RunningSum};
pub use workload::{repeat, Workload};
