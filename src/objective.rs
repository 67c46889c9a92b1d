//! Functions whose extrema are searched
use crate::difference;
use ndarray::ArrayView1;

pub mod bowl;
pub use bowl::QuadraticBowl;
pub mod cached;
pub use cached::CachedObjective;
pub mod closure;
pub use closure::{ScalarFn, VectorFn};
pub mod cosine;
pub use cosine::Cosine;

/// Function of a single variable
///
/// The derivatives default to forward differences and may be overridden by analytic ones.
pub trait ScalarObjective {
    /// Evaluates the function at `x`.
    fn value(&self, x: f64) -> f64;

    /// Returns the first derivative at `x`.
    fn d_value(&self, x: f64, eps: f64) -> f64 {
        difference::derivative(&|t| self.value(t), x, eps)
    }

    /// Returns the second derivative at `x`.
    fn d2_value(&self, x: f64, eps: f64) -> f64 {
        difference::derivative(&|t| self.d_value(t, eps), x, eps)
    }
}

/// Function of several variables
pub trait Objective {
    /// Returns the number of variables.
    fn dim(&self) -> usize;

    /// Evaluates the function at `x`.
    fn value(&self, x: ArrayView1<f64>) -> f64;

    /// Returns the partial derivative w.r.t. the `i`th variable.
    fn partial(&self, x: ArrayView1<f64>, i: usize, eps: f64) -> f64 {
        difference::partial(&|y: ArrayView1<f64>| self.value(y), x, i, eps)
    }

    /// Returns the second partial derivative w.r.t. the variables `i` and `j`.
    fn second_partial(&self, x: ArrayView1<f64>, i: usize, j: usize, eps: f64) -> f64 {
        difference::second_partial(
            &|y: ArrayView1<f64>, k: usize| self.partial(y, k, eps),
            x,
            i,
            j,
            eps,
        )
    }
}
