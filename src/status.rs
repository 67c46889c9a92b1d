use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of a Newton run
pub enum StatusCode {
    /// Iteration not started
    Initialized,
    /// Step norm dropped to the threshold
    Optimal,
    /// Maximum number of steps reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing information about the current point and state of a Newton run
pub struct Status<X> {
    /// Current position (a scalar or a vector of coordinates)
    pub x: X,
    /// Objective function value at `x`
    pub value: f64,
    /// Norm of the Newton step computed at `x` (`|f'/f''|` for a single variable)
    pub step_norm: f64,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted steps
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl<X> Status<X> {
    /// Create a [`Status`] struct starting at `x`
    pub fn new(x: X) -> Status<X> {
        Status {
            x,
            value: f64::NAN,
            step_norm: f64::INFINITY,
            code: StatusCode::Initialized,
            steps: 0,
            time: 0.0,
        }
    }

    /// Checks whether the run ended at a point satisfying the threshold.
    pub fn is_optimal(&self) -> bool {
        self.code == StatusCode::Optimal
    }
}
