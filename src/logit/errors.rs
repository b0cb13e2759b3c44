//! Errors for the logistic-regression model (input validation, coefficient
//! checks, and optimizer failures).
//!
//! This module defines [`LogitError`], the model-level error type returned by
//! data construction, the likelihood functions and `LogisticModel::fit`,
//! together with the [`LogitResult<T>`] alias.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Non-convergence within the iteration cap is **not** an error; it is the
//!   `FitOutcome::FailedToConverge` branch of a successful call.
//! - Failures raised inside the Newton loop arrive as
//!   [`OptError`](crate::optimization::errors::OptError) and are wrapped in
//!   [`LogitError::Optimization`].
#[cfg(feature = "python-bindings")]
use pyo3::{
    PyErr,
    exceptions::{PyRuntimeError, PyValueError},
};

use crate::optimization::errors::OptError;

/// Result alias for logistic-regression operations.
pub type LogitResult<T> = Result<T, LogitError>;

/// Unified error type for the logistic-regression model.
#[derive(Debug, Clone, PartialEq)]
pub enum LogitError {
    // ---- Input/data validation ----
    /// Response vector or design matrix has no observations.
    EmptyData,

    /// Design matrix has no columns and no constant was requested.
    NoRegressors,

    /// Response value is NaN/±inf.
    NonFiniteResponse { index: usize, value: f64 },

    /// Design matrix entry is NaN/±inf.
    NonFiniteDesign { row: usize, col: usize, value: f64 },

    /// `Y.len()` disagrees with `X.nrows()`.
    DimensionMismatch { y_len: usize, x_rows: usize },

    // ---- Coefficients ----
    /// Coefficient vector length disagrees with the number of columns.
    BetaLengthMismatch { expected: usize, actual: usize },

    /// Starting coefficient is NaN/±inf.
    NonFiniteBeta { index: usize, value: f64 },

    // ---- Options ----
    /// Convergence tolerance must be finite and > 0.
    InvalidTolerance { tol: f64, reason: &'static str },

    // ---- Estimation / optimizer ----
    /// Newton–Raphson aborted (singular Hessian, non-finite step, ...).
    Optimization(OptError),
}

impl std::error::Error for LogitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogitError::Optimization(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            LogitError::EmptyData => {
                write!(f, "Input data is empty: at least one observation is required.")
            }
            LogitError::NoRegressors => {
                write!(f, "Design matrix has no columns and no constant was requested.")
            }
            LogitError::NonFiniteResponse { index, value } => {
                write!(f, "Response at index {index} is non-finite: {value}")
            }
            LogitError::NonFiniteDesign { row, col, value } => {
                write!(f, "Design matrix entry ({row}, {col}) is non-finite: {value}")
            }
            LogitError::DimensionMismatch { y_len, x_rows } => {
                write!(
                    f,
                    "Dimension mismatch: response has length {y_len} but design matrix has {x_rows} rows"
                )
            }
            // ---- Coefficients ----
            LogitError::BetaLengthMismatch { expected, actual } => {
                write!(f, "Coefficient length mismatch: expected {expected}, got {actual}")
            }
            LogitError::NonFiniteBeta { index, value } => {
                write!(f, "Starting coefficient at index {index} is non-finite: {value}")
            }
            // ---- Options ----
            LogitError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid convergence tolerance {tol}: {reason}")
            }
            // ---- Estimation / optimizer ----
            LogitError::Optimization(err) => {
                write!(f, "Newton-Raphson failed: {err}")
            }
        }
    }
}

impl LogitError {
    /// `true` for errors caused by the caller's inputs or options, `false`
    /// for failures of the Newton iteration itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, LogitError::Optimization(_))
    }
}

/// Input errors raise `ValueError`; optimizer failures raise `RuntimeError`,
/// like a fit that runs out of iterations.
#[cfg(feature = "python-bindings")]
impl From<LogitError> for PyErr {
    fn from(err: LogitError) -> PyErr {
        if err.is_input_error() {
            PyValueError::new_err(err.to_string())
        } else {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}

impl From<OptError> for LogitError {
    fn from(err: OptError) -> LogitError {
        match err {
            OptError::InvalidTolGrad { tol, reason } => LogitError::InvalidTolerance { tol, reason },
            other => LogitError::Optimization(other),
        }
    }
}

/// Model errors raised inside `LogLikelihood` callbacks travel through the
/// optimizer as `OptError`.
impl From<LogitError> for OptError {
    fn from(err: LogitError) -> OptError {
        match err {
            LogitError::BetaLengthMismatch { expected, actual } => {
                OptError::ThetaLengthMismatch { expected, actual }
            }
            LogitError::NonFiniteBeta { index, value } => OptError::InvalidThetaHat {
                index,
                value,
                reason: "Coefficients must be finite.",
            },
            LogitError::InvalidTolerance { tol, reason } => OptError::InvalidTolGrad { tol, reason },
            LogitError::Optimization(inner) => inner,
            other => OptError::BackendError { text: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` messages carrying their payloads.
    // - Conversions between `LogitError` and `OptError` in both directions.
    // - The input/optimizer split that selects the Python exception type.
    //
    // They intentionally DO NOT cover:
    // - The `From<LogitError> for PyErr` conversion itself, which needs the
    //   Python C API at link time.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The dimension-mismatch message names both lengths.
    //
    // Given
    // -----
    // - `DimensionMismatch { y_len: 10, x_rows: 8 }`.
    //
    // Expect
    // ------
    // - The message contains "10" and "8".
    fn dimension_mismatch_display_contains_lengths() {
        // Arrange
        let err = LogitError::DimensionMismatch { y_len: 10, x_rows: 8 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("10"));
        assert!(msg.contains("8 rows"));
    }

    #[test]
    // Purpose
    // -------
    // Optimizer errors are wrapped, except an invalid tolerance which is a
    // configuration problem on the model side.
    //
    // Given
    // -----
    // - `OptError::SingularHessian { dim: 3 }` and
    //   `OptError::InvalidTolGrad { tol: 0.0, .. }`.
    //
    // Expect
    // ------
    // - `LogitError::Optimization(SingularHessian)` and
    //   `LogitError::InvalidTolerance` respectively; the wrapped error is
    //   exposed as `source()`.
    fn opt_error_maps_into_logit_error() {
        // Arrange
        let singular = OptError::SingularHessian { dim: 3 };
        let bad_tol = OptError::InvalidTolGrad { tol: 0.0, reason: "must be > 0" };

        // Act
        let singular = LogitError::from(singular);
        let bad_tol = LogitError::from(bad_tol);

        // Assert
        assert_eq!(singular, LogitError::Optimization(OptError::SingularHessian { dim: 3 }));
        assert!(std::error::Error::source(&singular).is_some());
        assert!(matches!(bad_tol, LogitError::InvalidTolerance { tol, .. } if tol == 0.0));
    }

    #[test]
    // Purpose
    // -------
    // A wrong-length coefficient vector raised inside a likelihood callback
    // becomes the optimizer's theta-length error.
    //
    // Given
    // -----
    // - `BetaLengthMismatch { expected: 2, actual: 3 }`.
    //
    // Expect
    // ------
    // - `OptError::ThetaLengthMismatch { expected: 2, actual: 3 }`.
    fn beta_length_mismatch_maps_to_theta_length_mismatch() {
        let err = OptError::from(LogitError::BetaLengthMismatch { expected: 2, actual: 3 });
        assert_eq!(err, OptError::ThetaLengthMismatch { expected: 2, actual: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Data errors raised inside a likelihood callback keep their message
    // when they travel through the optimizer.
    //
    // Given
    // -----
    // - `DimensionMismatch { y_len: 10, x_rows: 8 }` and `NoRegressors`.
    //
    // Expect
    // ------
    // - `OptError::BackendError` whose text equals the original message.
    fn data_errors_keep_message_through_optimizer() {
        for err in [LogitError::DimensionMismatch { y_len: 10, x_rows: 8 }, LogitError::NoRegressors]
        {
            let msg = err.to_string();
            assert_eq!(OptError::from(err), OptError::BackendError { text: msg });
        }
    }

    #[test]
    // Purpose
    // -------
    // Only optimizer failures are classified as non-input errors; this
    // decides between `ValueError` and `RuntimeError` at the Python boundary.
    //
    // Given
    // -----
    // - Validation errors and wrapped `SingularHessian` / `NonFiniteStep`.
    //
    // Expect
    // ------
    // - `is_input_error()` is `true` for the former and `false` for the latter.
    fn input_errors_are_distinguished_from_optimizer_failures() {
        assert!(LogitError::EmptyData.is_input_error());
        assert!(LogitError::DimensionMismatch { y_len: 3, x_rows: 2 }.is_input_error());
        assert!(LogitError::InvalidTolerance { tol: 0.0, reason: "bad" }.is_input_error());

        assert!(!LogitError::Optimization(OptError::SingularHessian { dim: 2 }).is_input_error());
        assert!(
            !LogitError::Optimization(OptError::NonFiniteStep { index: 0, value: f64::NAN })
                .is_input_error()
        );
    }
}
