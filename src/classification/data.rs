//! Labeled training data for binary classification.
//!
//! Purpose
//! -------
//! Provide a small, validated container for a feature matrix and its ±1
//! labels, so the objective and the optimizer can assume clean, finite,
//! shape-consistent inputs.
//!
//! Key behaviors
//! -------------
//! - [`LabeledData::new`] checks shape agreement, finiteness of every
//!   feature and that every label is exactly `-1.0` or `+1.0`.
//! - The container never mutates its arrays after construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x` is `d × n` (features × examples) with `d ≥ 1` and `n ≥ 1`.
//! - `y.len() == n`.
//! - All entries of `x` are finite.
//! - All entries of `y` are in `{-1, +1}`.
//!
//! Conventions
//! -----------
//! - Examples are **columns** of `x`; `x.column(i)` is example `i`.
//! - Labels are stored as `f64` so they can multiply scores directly.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path and each rejection (empty data,
//!   mismatched lengths, non-finite features, labels outside `{-1, +1}`).
use crate::optimization::errors::{OptError, OptResult};
use ndarray::{Array1, Array2};

/// `LabeledData` — validated feature matrix plus ±1 labels.
///
/// Fields
/// ------
/// - `x`: `Array2<f64>`
///   Feature matrix of shape `d × n`, one example per column.
/// - `y`: `Array1<f64>`
///   Labels of length `n`, each `-1.0` or `+1.0`.
///
/// Performance
/// -----------
/// - Validation is a single O(d·n) scan over `x` plus O(n) over `y`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledData {
    /// Feature matrix, `d × n`.
    pub x: Array2<f64>,
    /// Labels in `{-1, +1}`, length `n`.
    pub y: Array1<f64>,
}

impl LabeledData {
    /// Construct validated [`LabeledData`] from raw arrays.
    ///
    /// Errors
    /// ------
    /// - `OptError::EmptyData { rows, cols }`
    ///   Returned when `x` has no rows or no columns.
    /// - `OptError::DimensionMismatch { what: "labels", expected, found }`
    ///   Returned when `y.len()` differs from the number of columns of `x`.
    /// - `OptError::NonFiniteFeature { row, col, value }`
    ///   Returned for the first NaN or ±∞ feature, in column-major order.
    /// - `OptError::InvalidLabel { index, value }`
    ///   Returned for the first label that is not exactly `-1.0` or `+1.0`.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> OptResult<Self> {
        let (d, n) = x.dim();
        if d == 0 || n == 0 {
            return Err(OptError::EmptyData { rows: d, cols: n });
        }
        if y.len() != n {
            return Err(OptError::DimensionMismatch { what: "labels", expected: n, found: y.len() });
        }
        for (col, example) in x.columns().into_iter().enumerate() {
            if let Some((row, &value)) = example.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(OptError::NonFiniteFeature { row, col, value });
            }
        }
        if let Some((index, &value)) = y.iter().enumerate().find(|(_, v)| **v != 1.0 && **v != -1.0) {
            return Err(OptError::InvalidLabel { index, value });
        }
        Ok(Self { x, y })
    }

    /// Number of features `d`.
    pub fn n_features(&self) -> usize {
        self.x.nrows()
    }

    /// Number of examples `n`.
    pub fn n_samples(&self) -> usize {
        self.x.ncols()
    }
}
