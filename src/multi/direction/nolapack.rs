use crate::error::{Error, Result};
use ndarray::Array2;

use rulinalg::matrix::decomposition::PartialPivLu;
use rulinalg::matrix::Matrix;

/// Inverts a square matrix, failing with [`Error::SingularMatrix`] if it is singular.
pub fn invert(mat: Array2<f64>) -> Result<Array2<f64>> {
    let n = mat.nrows();
    let mat = Matrix::new(n, mat.ncols(), mat.iter().cloned().collect::<Vec<f64>>());
    let mat_fact = PartialPivLu::decompose(mat).map_err(|_| Error::SingularMatrix)?;
    // an exactly vanishing pivot makes the determinant zero
    let det = mat_fact.det();
    if det == 0.0 || !det.is_finite() {
        return Err(Error::SingularMatrix);
    }
    let inv = mat_fact.inverse().map_err(|_| Error::SingularMatrix)?;
    Ok(Array2::from_shape_fn((n, n), |(i, j)| inv[[i, j]]))
}
