//! Forward-difference derivative estimates
use ndarray::ArrayView1;

/// Step used by the scalar estimates when the given one is not positive
pub const DEFAULT_SCALAR_EPS: f64 = 1e-4;
/// Step used by the partial estimates when the given one is not positive
pub const DEFAULT_VECTOR_EPS: f64 = 1e-6;

/// Returns `value` if it is positive and `default` otherwise (this includes `NaN`).
pub fn positive_or(value: f64, default: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        default
    }
}

/// Estimates `f'(x)` by `(f(x + eps) - f(x)) / eps`.
pub fn derivative(f: &dyn Fn(f64) -> f64, x: f64, eps: f64) -> f64 {
    let eps = positive_or(eps, DEFAULT_SCALAR_EPS);
    (f(x + eps) - f(x)) / eps
}

/// Estimates `f''(x)` as forward difference of the forward-difference derivative.
pub fn second_derivative(f: &dyn Fn(f64) -> f64, x: f64, eps: f64) -> f64 {
    let eps = positive_or(eps, DEFAULT_SCALAR_EPS);
    derivative(&|t| derivative(f, t, eps), x, eps)
}

/// Estimates the partial derivative of `f` w.r.t. the `i`th coordinate.
pub fn partial(f: &dyn Fn(ArrayView1<f64>) -> f64, x: ArrayView1<f64>, i: usize, eps: f64) -> f64 {
    let eps = positive_or(eps, DEFAULT_VECTOR_EPS);
    let mut x1 = x.to_owned();
    x1[i] += eps;
    (f(x1.view()) - f(x)) / eps
}

/// Estimates the second partial derivative w.r.t. coordinates `i` and `j`.
///
/// The first partial w.r.t. `i` is taken at `x` and at `x` shifted by `eps` in coordinate `j`.
/// `d_i` receives the point and the coordinate, so analytic first partials can be plugged in.
pub fn second_partial(
    d_i: &dyn Fn(ArrayView1<f64>, usize) -> f64,
    x: ArrayView1<f64>,
    i: usize,
    j: usize,
    eps: f64,
) -> f64 {
    let eps = positive_or(eps, DEFAULT_VECTOR_EPS);
    let mut x1 = x.to_owned();
    x1[j] += eps;
    (d_i(x1.view(), i) - d_i(x, i)) / eps
}
