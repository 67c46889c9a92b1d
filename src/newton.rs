//! Newton's method for a function of a single variable

mod params;
mod solve;

pub use params::Params;
pub use solve::{solve, solve_with_status};
