//! Quadratic bowl
use super::Objective;
use ndarray::ArrayView1;

/// `f(x) = Σ (xᵢ - cᵢ)²` with its unique minimum at the center `c`
#[derive(Clone, Debug)]
pub struct QuadraticBowl {
    center: Vec<f64>,
}

impl QuadraticBowl {
    /// Center of the bowl `x0² + (x1 - 1)² + x2²`
    pub const DEFAULT_CENTER: [f64; 3] = [0.0, 1.0, 0.0];

    /// Creates the bowl `x0² + (x1 - 1)² + x2²`.
    pub fn new() -> Self {
        Self::with_center(Self::DEFAULT_CENTER.to_vec())
    }

    /// Creates a bowl around an arbitrary center.
    pub fn with_center(center: Vec<f64>) -> Self {
        Self { center }
    }

    /// Returns the minimizer.
    pub fn center(&self) -> &[f64] {
        &self.center
    }
}

impl Default for QuadraticBowl {
    fn default() -> Self {
        Self::new()
    }
}

impl Objective for QuadraticBowl {
    fn dim(&self) -> usize {
        self.center.len()
    }

    fn value(&self, x: ArrayView1<f64>) -> f64 {
        x.iter()
            .zip(self.center.iter())
            .fold(0.0, |acc, (xi, ci)| acc + (xi - ci).powi(2))
    }
}
