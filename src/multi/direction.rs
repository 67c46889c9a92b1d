use crate::error::Result;
use ndarray::{Array1, Array2};

#[cfg(feature = "lapack")]
use crate::error::Error;
#[cfg(feature = "lapack")]
use ndarray_linalg::Inverse;

#[cfg(not(feature = "lapack"))]
mod nolapack;
#[cfg(not(feature = "lapack"))]
pub use nolapack::invert;

/// Inverts a square matrix, failing with [`Error::SingularMatrix`] if it is singular.
#[cfg(feature = "lapack")]
pub fn invert(mat: Array2<f64>) -> Result<Array2<f64>> {
    mat.inv().map_err(|_| Error::SingularMatrix)
}

/// Computes the Newton step `H⁻¹ ∇f`.
pub fn newton_step(hessian_inv: &Array2<f64>, gradient: &Array1<f64>) -> Array1<f64> {
    hessian_inv.dot(gradient)
}

/// Inverts the Hessian and computes the Newton step.
pub(super) fn newton_direction(hessian: Array2<f64>, gradient: &Array1<f64>) -> Result<Array1<f64>> {
    let hessian_inv = invert(hessian)?;
    Ok(newton_step(&hessian_inv, gradient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn inverse_of_regular_matrix() {
        let inv = invert(array![[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let expected = array![[0.6, -0.7], [-0.2, 0.4]];
        for (a, e) in inv.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*a, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_matrix_is_reported() {
        let mat = array![[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 2.0]];
        assert_eq!(invert(mat), Err(Error::SingularMatrix));
    }

    #[test]
    fn step_of_diagonal_system() {
        let dir = newton_direction(array![[2.0, 0.0], [0.0, 4.0]], &array![1.0, -2.0]).unwrap();
        assert_abs_diff_eq!(dir[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dir[1], -0.5, epsilon = 1e-12);
    }
}
