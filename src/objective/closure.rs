//! Objectives built from closures
use super::{Objective, ScalarObjective};
use crate::difference;
use ndarray::ArrayView1;

/// Scalar objective given by closures
///
/// Derivatives which are not supplied are estimated by forward differences.
pub struct ScalarFn<'a> {
    f: Box<dyn Fn(f64) -> f64 + 'a>,
    d: Option<Box<dyn Fn(f64) -> f64 + 'a>>,
    d2: Option<Box<dyn Fn(f64) -> f64 + 'a>>,
}

impl<'a> ScalarFn<'a> {
    /// Wraps the function `f`.
    pub fn new(f: impl Fn(f64) -> f64 + 'a) -> Self {
        Self {
            f: Box::new(f),
            d: None,
            d2: None,
        }
    }

    /// Supplies the analytic first derivative.
    pub fn with_derivative(mut self, d: impl Fn(f64) -> f64 + 'a) -> Self {
        self.d = Some(Box::new(d));
        self
    }

    /// Supplies the analytic second derivative.
    pub fn with_second_derivative(mut self, d2: impl Fn(f64) -> f64 + 'a) -> Self {
        self.d2 = Some(Box::new(d2));
        self
    }
}

impl ScalarObjective for ScalarFn<'_> {
    fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn d_value(&self, x: f64, eps: f64) -> f64 {
        match &self.d {
            Some(d) => d(x),
            None => difference::derivative(&*self.f, x, eps),
        }
    }

    fn d2_value(&self, x: f64, eps: f64) -> f64 {
        match &self.d2 {
            Some(d2) => d2(x),
            None => difference::derivative(&|t| self.d_value(t, eps), x, eps),
        }
    }
}

type Partial<'a> = Box<dyn Fn(ArrayView1<f64>, usize) -> f64 + 'a>;
type SecondPartial<'a> = Box<dyn Fn(ArrayView1<f64>, usize, usize) -> f64 + 'a>;

/// Objective of several variables given by closures
pub struct VectorFn<'a> {
    dim: usize,
    f: Box<dyn Fn(ArrayView1<f64>) -> f64 + 'a>,
    partial: Option<Partial<'a>>,
    second_partial: Option<SecondPartial<'a>>,
}

impl<'a> VectorFn<'a> {
    /// Wraps the function `f` of `dim` variables.
    pub fn new(dim: usize, f: impl Fn(ArrayView1<f64>) -> f64 + 'a) -> Self {
        Self {
            dim,
            f: Box::new(f),
            partial: None,
            second_partial: None,
        }
    }

    /// Supplies the analytic partial derivatives `(x, i) ↦ ∂f/∂xᵢ(x)`.
    pub fn with_partial(mut self, partial: impl Fn(ArrayView1<f64>, usize) -> f64 + 'a) -> Self {
        self.partial = Some(Box::new(partial));
        self
    }

    /// Supplies the analytic second partial derivatives `(x, i, j) ↦ ∂²f/∂xᵢ∂xⱼ(x)`.
    pub fn with_second_partial(
        mut self,
        second_partial: impl Fn(ArrayView1<f64>, usize, usize) -> f64 + 'a,
    ) -> Self {
        self.second_partial = Some(Box::new(second_partial));
        self
    }
}

impl Objective for VectorFn<'_> {
    fn dim(&self) -> usize {
        self.dim
    }

    fn value(&self, x: ArrayView1<f64>) -> f64 {
        (self.f)(x)
    }

    fn partial(&self, x: ArrayView1<f64>, i: usize, eps: f64) -> f64 {
        match &self.partial {
            Some(partial) => partial(x, i),
            None => difference::partial(&*self.f, x, i, eps),
        }
    }

    fn second_partial(&self, x: ArrayView1<f64>, i: usize, j: usize, eps: f64) -> f64 {
        match &self.second_partial {
            Some(second_partial) => second_partial(x, i, j),
            None => difference::second_partial(
                &|y: ArrayView1<f64>, k: usize| self.partial(y, k, eps),
                x,
                i,
                j,
                eps,
            ),
        }
    }
}
