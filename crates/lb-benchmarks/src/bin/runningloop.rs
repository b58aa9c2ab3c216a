//! Running-sum baseline
//!
//! Sums `0..=1000000` 10000 times in a row and prints the last sum.

use std::time::Instant;

use lb_core::output::SumLine;
use lb_core::workload::SUM_REPEATS;
use lb_core::{repeat, RunningSum, Workload};

fn main() {
    env_logger::init();

    let workload = RunningSum::reference();
    log::info!("{}: n={} repeats={}", workload.name(), workload.n(), SUM_REPEATS);

    let start = Instant::now();
    let s = repeat(&workload, SUM_REPEATS).unwrap_or_else(|| workload.run());
    let elapsed = start.elapsed();

    log::info!(
        "{} repeats in {:?} ({:.3} us/call)",
        SUM_REPEATS,
        elapsed,
        elapsed.as_secs_f64() * 1e6 / SUM_REPEATS as f64
    );

    println!("{}", SumLine(s));
}
