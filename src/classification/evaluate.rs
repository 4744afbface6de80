//! Prediction and misclassification rate for a fitted coefficient vector.
//!
//! Both functions are pure: they read `X` and `β` and allocate only the
//! returned predictions.
use crate::optimization::{
    errors::{OptError, OptResult},
    numerical_stability::safe_logistic,
};
use ndarray::{Array1, ArrayView1, ArrayView2, Zip};

/// Predict ±1 labels for the columns of a `d × m` matrix `x`.
///
/// An example is labeled `+1.0` iff `σ(xᵢᵀβ) > 0.5`; a score of exactly zero
/// is labeled `-1.0`.
///
/// # Errors
/// - [`OptError::DimensionMismatch`] if `x.nrows() != beta.len()`.
pub fn predict(x: ArrayView2<f64>, beta: ArrayView1<f64>) -> OptResult<Array1<f64>> {
    if x.nrows() != beta.len() {
        return Err(OptError::DimensionMismatch {
            what: "features",
            expected: beta.len(),
            found: x.nrows(),
        });
    }
    Ok(x.t().dot(&beta).mapv(|s| if safe_logistic(s) > 0.5 { 1.0 } else { -1.0 }))
}

/// Percentage (0 to 100) of examples whose prediction differs from `y`.
///
/// # Errors
/// - [`OptError::EmptyData`] if `x` has no columns.
/// - [`OptError::DimensionMismatch`] if `y.len() != x.ncols()` or
///   `x.nrows() != beta.len()`.
pub fn misclassification_error(
    x: ArrayView2<f64>, y: ArrayView1<f64>, beta: ArrayView1<f64>,
) -> OptResult<f64> {
    let (d, n) = x.dim();
    if n == 0 {
        return Err(OptError::EmptyData { rows: d, cols: n });
    }
    if y.len() != n {
        return Err(OptError::DimensionMismatch { what: "labels", expected: n, found: y.len() });
    }
    let predictions = predict(x, beta)?;
    let wrong = Zip::from(&predictions)
        .and(&y)
        .fold(0usize, |acc, &p, &yi| if p != yi { acc + 1 } else { acc });
    Ok(100.0 * wrong as f64 / n as f64)
}
