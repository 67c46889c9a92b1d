//! Cosine function
use super::ScalarObjective;

/// `f(x) = cos(x)`, extremal at every multiple of π
#[derive(Clone, Copy, Debug, Default)]
pub struct Cosine;

impl ScalarObjective for Cosine {
    fn value(&self, x: f64) -> f64 {
        x.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn derivative_ratio_approximates_tangent() {
        let (d1, d2) = (Cosine.d_value(1.0, 1e-4), Cosine.d2_value(1.0, 1e-4));
        assert_abs_diff_eq!(d1 / d2, (1.0f64).tan(), epsilon = 1e-3);
    }
}
