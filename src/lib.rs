//! rust_logreg — L2-regularized logistic regression trained with accelerated
//! gradient descent, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the classifier to Python via the `_rust_logreg` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing class and the `rust_logreg.classification` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`classification` and `optimization`)
//!   as the public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_rust_logreg` extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion and error mapping.
//! - Python inputs use the same layout as the Rust API: `X` is
//!   `(features, examples)` and labels are ±1.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are `OptError` values internally and are
//!   converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! ```
//! use ndarray::array;
//! use rust_logreg::classification::LogisticRegression;
//!
//! let x = array![[1.0, 2.0, -1.0, -2.0], [1.0, 2.0, -1.0, -2.0]];
//! let y = array![1.0, 1.0, -1.0, -1.0];
//! let mut model = LogisticRegression::new(x.clone(), y.clone(), 0.01, 1e-4, 500)?;
//! model.train()?;
//! assert_eq!(model.misclassification_error(x.view(), y.view())?, 0.0);
//! # Ok::<(), rust_logreg::optimization::errors::OptError>(())
//! ```

pub mod classification;
pub mod optimization;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    classification::{LogisticRegression, misclassification_error, predict},
    utils::{extract_f64_matrix, extract_f64_vector},
};

/// Python wrapper around [`classification::LogisticRegression`].
///
/// Holds the trained model; `beta`, `cost_history`, `beta_history` and
/// `init_learning_rate` raise `ValueError` until `train()` has succeeded.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "LogisticRegression", module = "rust_logreg.classification")]
pub struct PyLogisticRegression {
    inner: LogisticRegression,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyLogisticRegression {
    /// Create an untrained model from `x_train` `(d, n)` and ±1 `y_train`,
    /// given as `(n,)` or an `(n, 1)` column.
    #[new]
    #[pyo3(
        signature = (x_train, y_train, lamd, eps, max_iterations = 500),
        text_signature = "(x_train, y_train, lamd, eps, /, max_iterations=500)"
    )]
    pub fn new<'py>(
        py: Python<'py>, x_train: &Bound<'py, PyAny>, y_train: &Bound<'py, PyAny>, lamd: f64,
        eps: f64, max_iterations: usize,
    ) -> PyResult<Self> {
        let x = extract_f64_matrix(py, x_train)?.as_array().to_owned();
        let y = extract_f64_vector(py, y_train)?;
        let inner = LogisticRegression::new(x, y, lamd, eps, max_iterations)?;
        Ok(PyLogisticRegression { inner })
    }

    /// Run accelerated gradient descent and cache the result.
    pub fn train(&mut self) -> PyResult<()> {
        self.inner.train()?;
        Ok(())
    }

    #[getter]
    pub fn beta(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.beta()?.to_vec())
    }

    #[getter]
    pub fn cost_history(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.cost_history()?.to_vec())
    }

    /// Row-major `(d, iterations + 1)` history of coefficient vectors.
    #[getter]
    pub fn beta_history(&self) -> PyResult<Vec<Vec<f64>>> {
        let hist = self.inner.beta_history()?;
        Ok(hist.rows().into_iter().map(|r| r.to_vec()).collect())
    }

    #[getter]
    pub fn init_learning_rate(&self) -> PyResult<f64> {
        Ok(self.inner.init_learning_rate()?)
    }

    #[getter]
    pub fn converged(&self) -> PyResult<bool> {
        Ok(self.inner.outcome()?.converged())
    }

    #[getter]
    pub fn iterations(&self) -> PyResult<usize> {
        Ok(self.inner.outcome()?.iterations)
    }

    /// ±1 predictions for the columns of `x`, using `beta` or the trained one.
    #[pyo3(signature = (x, beta = None), text_signature = "(self, x, /, beta=None)")]
    pub fn predict<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, beta: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Vec<f64>> {
        let x = extract_f64_matrix(py, x)?;
        let beta = self.resolve_beta(py, beta)?;
        Ok(predict(x.as_array(), beta.view())?.to_vec())
    }

    /// Misclassification percentage on `(x, y)`, using `beta` or the trained one.
    #[pyo3(signature = (x, y, beta = None), text_signature = "(self, x, y, /, beta=None)")]
    pub fn mis_classification_error<'py>(
        &self, py: Python<'py>, x: &Bound<'py, PyAny>, y: &Bound<'py, PyAny>,
        beta: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<f64> {
        let x = extract_f64_matrix(py, x)?;
        let y = extract_f64_vector(py, y)?;
        let beta = self.resolve_beta(py, beta)?;
        Ok(misclassification_error(x.as_array(), y.view(), beta.view())?)
    }
}

#[cfg(feature = "python-bindings")]
impl PyLogisticRegression {
    fn resolve_beta<'py>(
        &self, py: Python<'py>, beta: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Array1<f64>> {
        match beta {
            Some(raw) => extract_f64_vector(py, raw),
            None => Ok(self.inner.beta()?.clone()),
        }
    }
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_logreg<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let classification_mod = PyModule::new(_py, "classification")?;
    classification(_py, m, &classification_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("rust_logreg.classification", classification_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn classification<'py>(
    _py: Python, rust_logreg: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyLogisticRegression>()?;
    rust_logreg.add_submodule(m)?;
    Ok(())
}
