//! Find extrema with Newton's method.
//!
//! Derivatives are estimated by forward differences unless the objective supplies them.
#![warn(missing_docs)]

#[cfg(feature = "wasm")]
#[macro_use]
mod console;

pub mod difference;
mod division;
mod error;
pub mod multi;
pub mod newton;
pub mod objective;
mod time;

mod status;
pub use crate::division::division;
pub use crate::error::{Error, Result};
pub use crate::status::{Status, StatusCode};
