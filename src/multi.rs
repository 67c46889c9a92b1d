//! Newton's method for a function of several variables
//!
//! Each step solves `x ← x - H(x)⁻¹ ∇f(x)` with gradient and Hessian taken from the objective
//! (forward differences unless it supplies analytic partials).

mod derivatives;
mod direction;
mod params;
mod solve;

pub use derivatives::{gradient, hessian, hessian_inv};
pub use direction::{invert, newton_step};
pub use params::Params;
pub use solve::{solve, solve_with_status};
