use ndarray::{Array1, ArrayView2};

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec / Array2 → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Accept a 2-D float64 ndarray, a DataFrame, or a list of equal-length rows.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro);
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64")
    })?;
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(PyTypeError::new_err("all rows must have the same length"));
    }
    let nrows = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let matrix = Array2::from_shape_vec((nrows, ncols), flat)
        .map_err(|e| PyTypeError::new_err(e.to_string()))?;
    Ok(matrix.into_pyarray(py).readonly())
}

/// Accept a label or coefficient vector as either a 1-D array/sequence or a
/// single-column (or single-row) 2-D array, which is flattened.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vector<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(flat) = extract_f64_array(py, raw_data) {
        return Ok(flat.as_array().to_owned());
    }
    let matrix = extract_f64_matrix(py, raw_data).map_err(|_| {
        PyTypeError::new_err("expected a 1-D array or an (n, 1) column of float64")
    })?;
    let (rows, cols) = matrix.as_array().dim();
    ravel_vector(matrix.as_array()).ok_or_else(|| {
        PyTypeError::new_err(format!("expected a vector or an (n, 1) column, got shape ({rows}, {cols})"))
    })
}

/// Flatten an `(n, 1)` or `(1, n)` matrix into a length-`n` vector.
///
/// Returns `None` for any other shape.
pub fn ravel_vector(matrix: ArrayView2<f64>) -> Option<Array1<f64>> {
    match matrix.dim() {
        (_, 1) => Some(matrix.column(0).to_owned()),
        (1, _) => Some(matrix.row(0).to_owned()),
        _ => None,
    }
}
