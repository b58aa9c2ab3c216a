//! Trapezoidal integration baseline
//!
//! Integrates `(x³ - 3)·x` over `[-100, 100]` with 100000 subintervals, 1000
//! times in a row, and prints the last estimate as `x=<value>`.

use std::time::Instant;

use lb_core::output::IntegralLine;
use lb_core::workload::INTEGRATE_REPEATS;
use lb_core::{repeat, Trapezoid, Workload};

fn main() {
    env_logger::init();

    let workload = Trapezoid::reference();
    log::info!(
        "{}: a={} b={} n={} repeats={}",
        workload.name(),
        workload.a(),
        workload.b(),
        workload.n(),
        INTEGRATE_REPEATS
    );

    let start = Instant::now();
    let x = repeat(&workload, INTEGRATE_REPEATS).unwrap_or_else(|| workload.run());
    let elapsed = start.elapsed();

    log::info!(
        "{} repeats in {:?} ({:.3} ms/call)",
        INTEGRATE_REPEATS,
        elapsed,
        elapsed.as_secs_f64() * 1e3 / INTEGRATE_REPEATS as f64
    );
    log::debug!("absolute error vs analytic integral: {:e}", workload.abs_error());

    println!("{}", IntegralLine(x));
}
