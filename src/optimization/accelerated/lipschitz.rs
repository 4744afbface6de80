//! accelerated::lipschitz — curvature bound of the data term.
//!
//! Purpose
//! -------
//! Compute `λ_max(X Xᵀ / n)`, the largest eigenvalue of the scaled Gram
//! matrix of a `d × n` feature matrix. Adding the ridge strength gives the
//! curvature bound `L` and the initial learning rate `1 / L`.
//!
//! Key behaviors
//! -------------
//! - Decompose whichever Gram matrix is smaller: `X Xᵀ / n` (`d × d`) when
//!   `d ≤ n`, else `Xᵀ X / n` (`n × n`). Both share their non-zero spectrum.
//! - Copy the `ndarray` Gram matrix into a `nalgebra::DMatrix` and run
//!   `try_symmetric_eigen` with [`EIGEN_TOL`] / [`EIGEN_MAX_NITER`].
//! - Report non-convergence as [`OptError::EigenDecompositionFailed`];
//!   there is no fallback step size.
//!
//! Conventions
//! -----------
//! - The Gram matrix is symmetric by construction; only the lower triangle
//!   is computed and mirrored.
use crate::optimization::{
    errors::{OptError, OptResult},
    numerical_stability::{EIGEN_MAX_NITER, EIGEN_TOL},
};
use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

/// Largest eigenvalue of `X Xᵀ / n` for a `d × n` matrix `X`.
///
/// # Errors
/// - [`OptError::EmptyData`] if `X` has no rows or no columns.
/// - [`OptError::EigenDecompositionFailed`] if the symmetric
///   eigen-decomposition does not converge.
/// - [`OptError::NonFiniteEigenvalue`] if any eigenvalue is NaN or infinite,
///   which includes Gram matrices that overflow for very large features.
pub fn max_gram_eigenvalue(x: ArrayView2<f64>) -> OptResult<f64> {
    let (d, n) = x.dim();
    if d == 0 || n == 0 {
        return Err(OptError::EmptyData { rows: d, cols: n });
    }
    let gram = (if d <= n { x.dot(&x.t()) } else { x.t().dot(&x) }) / n as f64;
    let dim = gram.nrows();
    let mut gram_nalg = DMatrix::<f64>::zeros(dim, dim);
    fill_dmatrix(&gram, &mut gram_nalg);
    let eigen = gram_nalg
        .try_symmetric_eigen(EIGEN_TOL, EIGEN_MAX_NITER)
        .ok_or(OptError::EigenDecompositionFailed { dim })?;
    top_eigenvalue(eigen.eigenvalues.as_slice())
}

/// Largest of `values`, rejecting the whole spectrum if any entry is NaN or
/// infinite. `f64::max` skips NaN, so the finiteness scan runs first.
fn top_eigenvalue(values: &[f64]) -> OptResult<f64> {
    if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
        return Err(OptError::NonFiniteEigenvalue { value });
    }
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(OptError::EigenDecompositionFailed { dim: 0 })
}

/// Copy a symmetric `ndarray` matrix into a `nalgebra::DMatrix`, mirroring
/// the lower triangle so the result is exactly symmetric.
fn fill_dmatrix(src: &Array2<f64>, dst: &mut DMatrix<f64>) {
    let n = src.ncols();
    for j in 0..n {
        dst[(j, j)] = src[[j, j]];
        for i in (j + 1)..n {
            let v = src[[i, j]];
            dst[(i, j)] = v;
            dst[(j, i)] = v;
        }
    }
}
