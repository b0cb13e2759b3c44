//! Python-side argument extraction shared by the PyO3 wrappers in `lib.rs`.
//!
//! Inputs may arrive as contiguous `numpy` arrays, pandas objects exposing
//! `to_numpy`, or plain (nested) Python sequences. Data is copied out of
//! numpy through slices into this crate's own `ndarray` containers.

#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,           // Vec → PyArray
    PyArrayMethods,        // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
    PyUntypedArrayMethods, // .shape()
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Row-major `float64` copy of a 2-D design matrix as `(rows, cols, data)`.
///
/// Any input `numpy.ascontiguousarray` accepts is allowed (arrays in either
/// memory order, pandas frames, nested sequences). Ragged rows raise
/// `ValueError` from numpy.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<(usize, usize, Vec<f64>)> {
    let contiguous = py.import("numpy")?.call_method1("ascontiguousarray", (raw_data, "float64"))?;
    let arr_ro = contiguous.extract::<PyReadonlyArray2<f64>>().map_err(|_| {
        PyTypeError::new_err(
            "expected a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64",
        )
    })?;
    let (rows, cols) = (arr_ro.shape()[0], arr_ro.shape()[1]);
    let data = arr_ro
        .as_slice()
        .map_err(|_| PyValueError::new_err("X must be convertible to a C-contiguous array"))?;
    Ok((rows, cols, data.to_vec()))
}

/// Owned copies of `(y, X)` ready for `LogisticModel::new`.
///
/// Values cross the numpy boundary as plain slices, so the `ndarray` version
/// numpy links against never has to match this crate's.
#[cfg(feature = "python-bindings")]
pub fn extract_logit_data<'py>(
    py: Python<'py>, y: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
) -> PyResult<(Array1<f64>, Array2<f64>)> {
    let y_arr = extract_f64_array(py, y)?;
    let y_vec = y_arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("y must be a 1-D contiguous float64 array or sequence"))?
        .to_vec();
    let (rows, cols, x_vec) = extract_f64_matrix(py, x)?;
    let x = Array2::from_shape_vec((rows, cols), x_vec)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((Array1::from(y_vec), x))
}

/// Starting values; `None` means zeros for every column of `X`.
#[cfg(feature = "python-bindings")]
pub fn extract_beta0<'py>(
    py: Python<'py>, beta0: Option<&Bound<'py, PyAny>>, n_cols: usize,
) -> PyResult<Array1<f64>> {
    match beta0 {
        Some(obj) => {
            let arr = extract_f64_array(py, obj)?;
            let slice = arr.as_slice().map_err(|_| {
                PyValueError::new_err("beta0 must be a 1-D contiguous float64 array or sequence")
            })?;
            Ok(Array1::from(slice.to_vec()))
        }
        None => Ok(Array1::zeros(n_cols)),
    }
}
