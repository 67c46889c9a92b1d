use crate::error::{Error, Result};

/// Divides `numerator` by `denominator`, reporting a zero denominator instead of producing `inf` or `NaN`.
pub fn division(numerator: f64, denominator: f64) -> Result<f64> {
    if denominator == 0.0 {
        return Err(Error::DivisionByZero { numerator });
    }
    Ok(numerator / denominator)
}
