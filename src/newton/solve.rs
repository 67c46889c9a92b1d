use super::params::Params;
use crate::division::division;
use crate::error::Result;
use crate::objective::ScalarObjective;
use crate::status::{Status, StatusCode};
use crate::time::{now, until_now};

/// Uses Newton's method to find an extremum of the given objective starting from `x0`.
pub fn solve(
    objective: &dyn ScalarObjective,
    x0: f64,
    params: &Params,
    callback: Option<&dyn Fn(&Status<f64>) -> bool>,
) -> Result<Status<f64>> {
    solve_with_status(Status::new(x0), objective, params, callback)
}

/// Uses Newton's method to find an extremum of the given objective starting from a particular [`Status`].
///
/// Every step computes `dx = f'(x) / f''(x)`; the run stops once `|dx|` is at most the threshold.
/// A vanishing second derivative aborts the run with [`crate::Error::DivisionByZero`].
pub fn solve_with_status(
    status: Status<f64>,
    objective: &dyn ScalarObjective,
    params: &Params,
    callback: Option<&dyn Fn(&Status<f64>) -> bool>,
) -> Result<Status<f64>> {
    params.validate()?;
    let eps = params.eps();
    let threshold = params.threshold();

    let mut status = status;
    let start = now();
    let mut step: usize = 0;

    if params.verbose > 0 {
        println!(
            "{:>10} {:>10} {:>24} {:>12}",
            "step", "time", "x", "|d1/d2|"
        );
    }

    loop {
        // update steps and time
        status.steps = step;
        let elapsed = until_now(start);
        status.time = elapsed;

        // compute Newton step
        let d1 = objective.d_value(status.x, eps);
        let d2 = objective.d2_value(status.x, eps);
        let dx = division(d1, d2)?;
        status.value = objective.value(status.x);
        status.step_norm = dx.abs();

        // check for optimality
        let mut stop = false;
        if status.step_norm <= threshold {
            status.code = StatusCode::Optimal;
            stop = true;
        }

        // handle step limit
        if !stop && step >= params.max_steps {
            status.code = StatusCode::MaxSteps;
            stop = true;
        }

        // handle time limit
        if !stop && params.time_limit > 0.0 && elapsed >= params.time_limit {
            status.code = StatusCode::TimeLimit;
            stop = true;
        }

        // handle callback
        if let Some(callback_fn) = callback {
            if !stop && callback_fn(&status) {
                status.code = StatusCode::Callback;
                stop = true;
            }
        };

        // handle progress output
        if params.verbose > 0 && (step % params.verbose == 0 || stop) {
            println!(
                "{:10} {:10.2} {:24.16e} {:12.4e}",
                step, elapsed, status.x, status.step_norm,
            )
        }

        // terminate
        if stop {
            break;
        }

        status.x -= dx;
        step += 1;
    }
    Ok(status)
}
