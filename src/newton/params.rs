use crate::difference::{positive_or, DEFAULT_SCALAR_EPS};
use crate::error::{Error, Result};

/// Parameters of Newton's method for a single variable
#[derive(Clone, Debug)]
pub struct Params {
    /// Step length of the finite differences
    pub eps: f64,
    /// Termination tolerance on `|f'(x) / f''(x)|`
    pub threshold: f64,
    /// Maximum number of steps
    pub max_steps: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
    /// Time limit (in seconds)
    pub time_limit: f64,
    /// Reject non-positive `eps` and `threshold` instead of replacing them by defaults
    pub strict: bool,
}

impl Params {
    const DEFAULT_EPS: f64 = DEFAULT_SCALAR_EPS;
    const DEFAULT_THRESHOLD: f64 = 0.01;
    const DEFAULT_MAX_STEPS: usize = 1000;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            eps: Self::DEFAULT_EPS,
            threshold: Self::DEFAULT_THRESHOLD,
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
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
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
        if !(self.eps > 0.0) {
            return Err(Error::InvalidParameter {
                name: "eps",
                value: self.eps,
            });
        }
        if !(self.threshold > 0.0) {
            return Err(Error::InvalidParameter {
                name: "threshold",
                value: self.threshold,
            });
        }
        Ok(())
    }

    /// Returns the step length in effect.
    pub fn eps(&self) -> f64 {
        positive_or(self.eps, Self::DEFAULT_EPS)
    }

    /// Returns the termination tolerance in effect.
    pub fn threshold(&self) -> f64 {
        positive_or(self.threshold, Self::DEFAULT_THRESHOLD)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
