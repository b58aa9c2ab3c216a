//! LB-Wasm: WebAssembly bindings for the loopbench kernels
//!
//! Lets the compiled kernels run inside a JS engine, next to hand-written
//! JavaScript versions of the same loops.

use lb_core::output::{IntegralLine, SumLine};
use lb_core::workload::{INTEGRATE_REPEATS, SUM_REPEATS};
use lb_core::{integrand, repeat, RunningSum, Trapezoid, Workload};
use wasm_bindgen::prelude::*;

/// Installs the panic hook when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Evaluate `(x³ - 3)·x`
#[wasm_bindgen]
pub fn f(x: f64) -> f64 {
    integrand::f(x)
}

/// Trapezoidal integral of `f` over `[a, b]` with `n` subintervals
///
/// Throws for `n == 0` or non-finite bounds.
#[wasm_bindgen(js_name = integrateF)]
pub fn integrate_f(a: f64, b: f64, n: u32) -> Result<f64, JsError> {
    let workload = Trapezoid::new(a, b, n).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(workload.integrate())
}

/// Sum of `0..=n` (returned as a `BigInt`)
#[wasm_bindgen(js_name = runningSum)]
pub fn running_sum(n: u32) -> u64 {
    lb_core::running_sum(n)
}

/// Output line of the `integrate` program
#[wasm_bindgen(js_name = integrateProgram)]
pub fn integrate_program() -> String {
    let workload = Trapezoid::reference();
    let x = repeat(&workload, INTEGRATE_REPEATS).unwrap_or_else(|| workload.run());
    IntegralLine(x).to_string()
}

/// Output line of the `runningloop` program
#[wasm_bindgen(js_name = runningloopProgram)]
pub fn runningloop_program() -> String {
    let workload = RunningSum::reference();
    let s = repeat(&workload, SUM_REPEATS).unwrap_or_else(|| workload.run());
    SumLine(s).to_string()
}

/// Runs both programs and logs their output lines to the browser console
#[wasm_bindgen(js_name = printPrograms)]
pub fn print_programs() {
    web_sys::console::log_1(&integrate_program().into());
    web_sys::console::log_1(&runningloop_program().into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f() {
        assert_eq!(f(2.0), 10.0);
    }

    #[test]
    fn test_running_sum() {
        assert_eq!(running_sum(10), 55);
    }

    #[test]
    fn test_integrate_f_ok() {
        assert_eq!(integrate_f(0.0, 2.0, 1).ok(), Some(10.0));
    }
}
