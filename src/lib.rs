//! rust_logit — Newton–Raphson logistic regression with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the logit estimator to Python via the `_rust_logit` extension module. When
//! the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes used by the `rust_logit` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`logit`, `optimization`, `inference`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers (`Logit`, `LogitFit`) and the `#[pymodule]`
//!   initializer for the `_rust_logit` Python extension.
//! - Register the `rust_logit.models` submodule in `sys.modules` so dotted
//!   imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python-visible types mirror the invariants of their Rust counterparts
//!   (`LogisticModel`, `FitResult`, `LogitSummary`).
//!
//! Conventions
//! -----------
//! - Validation failures surface as `ValueError`; a fit that exhausts
//!   `max_iter` surfaces as `RuntimeError` carrying the convergence
//!   diagnostic.
//! - Coefficient vectors are ordered intercept first when `constant=True`.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`logit`] and [`inference`] directly
//!   and can ignore the PyO3 items guarded by `python-bindings`.
//! - The Python packaging layer imports `_rust_logit` and wraps its classes in
//!   user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the Rust integration tests under `tests/`.

pub mod inference;
pub mod logit;
pub mod optimization;
#[cfg(feature = "python-bindings")]
mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyRuntimeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    inference::LogitSummary,
    logit::{FitOutcome, FitResult, LogisticModel, LogitOptions},
    utils::{extract_beta0, extract_logit_data},
};

/// Logit — Python-facing logistic regression estimator.
///
/// Purpose
/// -------
/// Hold fit options and run [`LogisticModel::fit`] on Python inputs.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `Logit(constant=True, tol=1e-9, max_iter=200, verbose=False)`:
/// - `constant`: prepend an intercept column to `X`.
/// - `tol`: stopping tolerance on `max|score|`; finite and `> 0`.
/// - `max_iter`: Newton step budget.
/// - `verbose`: log iterations to stderr (needs the `obs_slog` feature).
///
/// Fields
/// ------
/// - `options`: [`LogitOptions`]
///   Validated at construction.
///
/// Notes
/// -----
/// - Each `fit` call builds a fresh model; the estimator keeps no state
///   between calls.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_logit.models")]
pub struct Logit {
    options: LogitOptions,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Logit {
    #[new]
    #[pyo3(
        signature = (constant = true, tol = 1e-9, max_iter = 200, verbose = false),
        text_signature = "(constant=True, tol=1e-9, max_iter=200, verbose=False)"
    )]
    pub fn new(constant: bool, tol: f64, max_iter: usize, verbose: bool) -> PyResult<Self> {
        let options = LogitOptions::new(constant, tol, max_iter, verbose)?;
        Ok(Logit { options })
    }

    /// Fit to `(y, X)` starting from `beta0` (zeros when omitted).
    ///
    /// `beta0` has one entry per column of `X`; the intercept always starts
    /// at zero.
    #[pyo3(signature = (y, x, beta0 = None), text_signature = "(self, y, x, /, beta0=None)")]
    pub fn fit<'py>(
        &self, py: Python<'py>, y: &Bound<'py, PyAny>, x: &Bound<'py, PyAny>,
        beta0: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<LogitFit> {
        let (y, x) = extract_logit_data(py, y, x)?;
        let beta0 = extract_beta0(py, beta0, x.ncols())?;
        let model = LogisticModel::new(y, x, self.options)?;
        match model.fit(&beta0)? {
            FitOutcome::Converged(result) => {
                let summary = LogitSummary::from_fit(&result)?;
                Ok(LogitFit { result, summary })
            }
            FitOutcome::FailedToConverge(fail) => Err(PyRuntimeError::new_err(fail.to_string())),
        }
    }

    #[getter]
    pub fn constant(&self) -> bool {
        self.options.constant
    }

    #[getter]
    pub fn tol(&self) -> f64 {
        self.options.tol
    }

    #[getter]
    pub fn max_iter(&self) -> usize {
        self.options.max_iter
    }
}

/// LogitFit — converged fit plus inference, exposed to Python.
///
/// Instances are created by `Logit.fit` and are read-only. Vector-valued
/// getters copy into fresh Python lists.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_logit.models")]
pub struct LogitFit {
    result: FitResult,
    summary: LogitSummary,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LogitFit {
    #[getter]
    pub fn coefficients(&self) -> Vec<f64> {
        self.result.coefficients.to_vec()
    }

    #[getter]
    pub fn std_errors(&self) -> Vec<f64> {
        self.summary.std_errors.to_vec()
    }

    #[getter]
    pub fn z_values(&self) -> Vec<f64> {
        self.summary.z_values.to_vec()
    }

    #[getter]
    pub fn p_values(&self) -> Vec<f64> {
        self.summary.p_values.to_vec()
    }

    /// Total log-likelihood at the estimate.
    #[getter]
    pub fn loglik(&self) -> f64 {
        self.summary.loglik
    }

    /// Total log-likelihood at `β = 0`.
    #[getter]
    pub fn loglik_null(&self) -> f64 {
        self.summary.loglik_null
    }

    #[getter]
    pub fn lr_stat(&self) -> f64 {
        self.summary.lr_stat
    }

    #[getter]
    pub fn lr_pvalue(&self) -> f64 {
        self.summary.lr_p_value
    }

    #[getter]
    pub fn pseudo_r2(&self) -> f64 {
        self.summary.pseudo_r2
    }

    #[getter]
    pub fn aic(&self) -> f64 {
        self.summary.aic
    }

    #[getter]
    pub fn bic(&self) -> f64 {
        self.summary.bic
    }

    /// Score of the average log-likelihood at the estimate.
    #[getter]
    pub fn score(&self) -> Vec<f64> {
        self.result.score.to_vec()
    }

    /// Hessian of the average log-likelihood, row-major.
    #[getter]
    pub fn hessian(&self) -> Vec<Vec<f64>> {
        self.result.hessian.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    #[getter]
    pub fn fitted_probabilities(&self) -> Vec<f64> {
        self.result.fitted_probabilities.to_vec()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.result.iterations
    }

    #[getter]
    pub fn n_obs(&self) -> usize {
        self.result.n_obs
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.result.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}

/// _rust_logit — PyO3 module initializer for the Python extension.
///
/// Creates the `models` submodule holding `Logit` and `LogitFit`, attaches it
/// to `_rust_logit`, and registers it in `sys.modules` as
/// `rust_logit.models`.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or touching `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_logit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let models_mod = PyModule::new(_py, "models")?;
    models(_py, m, &models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_logit.models", models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn models<'py>(
    _py: Python, rust_logit: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<Logit>()?;
    m.add_class::<LogitFit>()?;
    rust_logit.add_submodule(m)?;
    Ok(())
}
