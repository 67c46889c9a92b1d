use super::derivatives::{gradient, hessian};
use super::direction::newton_direction;
use super::params::Params;
use crate::error::{Error, Result};
use crate::objective::Objective;
use crate::status::{Status, StatusCode};
use crate::time::{now, until_now};
use ndarray::ArrayView1;

/// Uses Newton's method to find an extremum of the given objective starting from `x0`.
pub fn solve(
    objective: &dyn Objective,
    x0: &[f64],
    params: &Params,
    callback: Option<&dyn Fn(&Status<Vec<f64>>) -> bool>,
) -> Result<Status<Vec<f64>>> {
    solve_with_status(Status::new(x0.to_vec()), objective, params, callback)
}

/// Uses Newton's method to find an extremum of the given objective starting from a particular [`Status`].
pub fn solve_with_status(
    status: Status<Vec<f64>>,
    objective: &dyn Objective,
    params: &Params,
    callback: Option<&dyn Fn(&Status<Vec<f64>>) -> bool>,
) -> Result<Status<Vec<f64>>> {
    params.validate()?;
    if status.x.len() != objective.dim() {
        return Err(Error::DimensionMismatch {
            expected: objective.dim(),
            found: status.x.len(),
        });
    }
    let eps = params.eps;
    let tol = params.tol();

    let mut status = status;
    let start = now();
    let mut step: usize = 0;

    if params.verbose > 0 {
        println!(
            "{:>10} {:>10} {:>12} {:>14}",
            "step", "time", "|dx|", "value"
        );
    }

    loop {
        // update steps and time
        status.steps = step;
        let elapsed = until_now(start);
        status.time = elapsed;

        // compute Newton direction
        let x = ArrayView1::from(&status.x[..]);
        let g = gradient(objective, x, eps);
        let dx = newton_direction(hessian(objective, x, eps), &g)?;
        status.value = objective.value(x);
        status.step_norm = dx.dot(&dx).sqrt();

        // check for optimality
        let mut stop = false;
        if status.step_norm <= tol {
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
                "{:10} {:10.2} {:12.4e} {:14.6e}",
                step, elapsed, status.step_norm, status.value,
            )
        }

        // terminate
        if stop {
            break;
        }

        for (xi, dxi) in status.x.iter_mut().zip(dx.iter()) {
            *xi -= dxi;
        }
        step += 1;
    }
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{CachedObjective, QuadraticBowl, VectorFn};
    use approx::assert_abs_diff_eq;

    fn assert_near(x: &[f64], expected: &[f64], epsilon: f64) {
        assert_eq!(x.len(), expected.len());
        for (xi, ei) in x.iter().zip(expected) {
            assert_abs_diff_eq!(*xi, *ei, epsilon = epsilon);
        }
    }

    #[test]
    fn bowl_minimum() {
        let bowl = QuadraticBowl::new();
        let status = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new(), None).unwrap();
        assert!(status.is_optimal());
        assert!(status.step_norm <= 1e-4);
        assert_near(&status.x, &[0.0, 1.0, 0.0], 1e-3);
        assert!(status.steps <= 3);
    }

    #[test]
    fn invalid_eps_uses_estimator_default() {
        let bowl = QuadraticBowl::new();
        let reference = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new().with_eps(1e-6), None).unwrap();
        for eps in [0.0, -1.0] {
            let status = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new().with_eps(eps), None).unwrap();
            assert_eq!(status.x, reference.x);
            assert_eq!(status.steps, reference.steps);
        }
    }

    #[test]
    fn invalid_tol_uses_default() {
        let bowl = QuadraticBowl::new();
        let reference = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new(), None).unwrap();
        let status = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new().with_tol(-2.0), None).unwrap();
        assert_eq!(status.x, reference.x);
    }

    #[test]
    fn strict_mode_rejects_tol() {
        let bowl = QuadraticBowl::new();
        let params = Params::new().with_tol(0.0).with_strict(true);
        assert_eq!(
            solve(&bowl, &[1.0, 1.0, 1.0], &params, None).unwrap_err(),
            Error::InvalidParameter {
                name: "tol",
                value: 0.0
            }
        );
    }

    #[test]
    fn shifted_bowl() {
        let bowl = QuadraticBowl::with_center(vec![3.0, -2.0]);
        let status = solve(&bowl, &[0.0, 0.0], &Params::new(), None).unwrap();
        assert!(status.is_optimal());
        assert_near(&status.x, bowl.center(), 1e-3);
    }

    #[test]
    fn flat_direction_is_singular() {
        let f = VectorFn::new(3, |x: ArrayView1<f64>| x[0] * x[0] + x[2] * x[2]);
        assert_eq!(
            solve(&f, &[1.0, 1.0, 1.0], &Params::new(), None).unwrap_err(),
            Error::SingularMatrix
        );
    }

    #[test]
    fn wrong_dimension() {
        let bowl = QuadraticBowl::new();
        assert_eq!(
            solve(&bowl, &[1.0, 1.0], &Params::new(), None).unwrap_err(),
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn step_limit() {
        let bowl = QuadraticBowl::new();
        let status = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new().with_max_steps(0), None).unwrap();
        assert_eq!(status.code, StatusCode::MaxSteps);
        assert_eq!(status.x, vec![1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(status.value, 2.0);
    }

    #[test]
    fn analytic_non_quadratic() {
        // f(x) = exp(x0) - x0 + (x1 - 1)^4 / 4 + (x1 - 1)^2 has its minimum at (0, 1)
        let f = VectorFn::new(2, |x: ArrayView1<f64>| {
            x[0].exp() - x[0] + (x[1] - 1.0).powi(4) / 4.0 + (x[1] - 1.0).powi(2)
        })
        .with_partial(|x: ArrayView1<f64>, i| match i {
            0 => x[0].exp() - 1.0,
            _ => (x[1] - 1.0).powi(3) + 2.0 * (x[1] - 1.0),
        })
        .with_second_partial(|x: ArrayView1<f64>, i, j| match (i, j) {
            (0, 0) => x[0].exp(),
            (1, 1) => 3.0 * (x[1] - 1.0).powi(2) + 2.0,
            _ => 0.0,
        });
        let params = Params::new().with_tol(1e-10);
        let status = solve(&f, &[0.5, 0.0], &params, None).unwrap();
        assert!(status.is_optimal());
        assert_near(&status.x, &[0.0, 1.0], 1e-8);
    }

    #[test]
    fn cached_objective_gives_same_result() {
        let bowl = QuadraticBowl::new();
        let cached = CachedObjective::from(&bowl, 256).unwrap();
        let plain = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new(), None).unwrap();
        let status = solve(&cached, &[1.0, 1.0, 1.0], &Params::new(), None).unwrap();
        assert_eq!(status.x, plain.x);
        assert!(cached.hits() > cached.misses());
    }

    #[test]
    fn warm_start_from_optimum() {
        let bowl = QuadraticBowl::new();
        let first = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new(), None).unwrap();
        let second =
            solve_with_status(first.clone(), &bowl, &Params::new().with_verbose(1), None).unwrap();
        assert!(second.is_optimal());
        assert_eq!(second.steps, 0);
        assert_eq!(second.x, first.x);
    }

    #[test]
    fn callback_stops() {
        let bowl = QuadraticBowl::new();
        let stop = |status: &Status<Vec<f64>>| status.step_norm > 1.0;
        let status = solve(&bowl, &[1.0, 1.0, 1.0], &Params::new(), Some(&stop)).unwrap();
        assert_eq!(status.code, StatusCode::Callback);
        assert_eq!(status.steps, 0);
    }
}
