use super::direction::invert;
use crate::error::Result;
use crate::objective::Objective;
use ndarray::{Array1, Array2, ArrayView1};

/// Calculates the gradient of the objective at `x`.
pub fn gradient(objective: &dyn Objective, x: ArrayView1<f64>, eps: f64) -> Array1<f64> {
    Array1::from_shape_fn(x.len(), |i| objective.partial(x, i, eps))
}

/// Calculates the Hessian matrix of the objective at `x`.
pub fn hessian(objective: &dyn Objective, x: ArrayView1<f64>, eps: f64) -> Array2<f64> {
    let n = x.len();
    Array2::from_shape_fn((n, n), |(i, j)| objective.second_partial(x, i, j, eps))
}

/// Calculates the inverse of the Hessian matrix of the objective at `x`.
pub fn hessian_inv(objective: &dyn Objective, x: ArrayView1<f64>, eps: f64) -> Result<Array2<f64>> {
    invert(hessian(objective, x, eps))
}
