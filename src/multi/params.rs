use crate::difference::positive_or;
use crate::error::{Error, Result};

/// Parameters of Newton's method for several variables
#[derive(Clone, Debug)]
pub struct Params {
    /// Step length of the finite differences (non-positive values fall back to `1e-6`)
    pub eps: f64,
    /// Termination tolerance on the norm of the Newton step
    pub tol: f64,
    /// Maximum number of steps
    pub max_steps: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
    /// Time limit (in seconds)
    pub time_limit: f64,
    /// Reject non-positive `eps` and `tol` instead of replacing them by defaults
    pub strict: bool,
}

impl Params {
    const DEFAULT_EPS: f64 = 1e-4;
    const DEFAULT_TOL: f64 = 1e-4;
    const DEFAULT_MAX_STEPS: usize = 1000;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            eps: Self::DEFAULT_EPS,
            tol: Self::DEFAULT_TOL,
            max_steps: Self::DEFAULT_MAX_STEPS,
            verbose: 0,
            time_limit: f64::INFINITY,
            strict: false,
        }
    }

    /// Sets the step length of the finite differences.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Sets the termination tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the frequency of logging.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the time limit (in seconds).
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Enables rejection of invalid parameters.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Checks the parameters (only fails in strict mode).
    pub fn validate(&self) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        for (name, value) in [("eps", self.eps), ("tol", self.tol)] {
            if !(value > 0.0) {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Returns the termination tolerance in effect.
    pub fn tol(&self) -> f64 {
        positive_or(self.tol, Self::DEFAULT_TOL)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_falls_back() {
        assert_eq!(Params::new().with_tol(1e-6).tol(), 1e-6);
        for tol in [0.0, -3.0, f64::NAN] {
            assert_eq!(Params::new().with_tol(tol).tol(), 1e-4);
        }
    }

    #[test]
    fn strict_rejects_eps() {
        let params = Params::new().with_eps(f64::NAN).with_strict(true);
        assert!(matches!(
            params.validate(),
            Err(Error::InvalidParameter { name: "eps", .. })
        ));
    }
}
