//! Unified error handling for post-fit inference.
//!
//! This module defines `InferenceError`, the error type used when turning a
//! converged logit fit into standard errors and test statistics, together
//! with the `InferenceResult<T>` alias.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Unified error type for inference routines.
///
/// Covers malformed Hessians, degenerate sample sizes, and failures
/// constructing reference distributions.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceError {
    // ---- Hessian ----
    /// Hessian must be square and match the coefficient vector.
    HessianDimMismatch { expected: usize, found: (usize, usize) },

    /// Hessian entries must be finite.
    NonFiniteHessian { row: usize, col: usize, value: f64 },

    // ---- Sample ----
    /// At least one observation is required.
    EmptySample,

    // ---- Distributions ----
    /// A statrs reference distribution could not be constructed.
    Distribution { text: String },
}

pub type InferenceResult<T> = Result<T, InferenceError>;

impl std::error::Error for InferenceError {}

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Hessian ----
            InferenceError::HessianDimMismatch { expected, found } => write!(
                f,
                "Inference Error: Hessian dimension mismatch: expected ({expected}, {expected}), found {found:?}"
            ),
            InferenceError::NonFiniteHessian { row, col, value } => {
                write!(f, "Inference Error: Hessian entry ({row}, {col}) is non-finite: {value}")
            }

            // ---- Sample ----
            InferenceError::EmptySample => {
                write!(f, "Inference Error: at least one observation is required")
            }

            // ---- Distributions ----
            InferenceError::Distribution { text } => {
                write!(f, "Inference Error: reference distribution: {text}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<InferenceError> for PyErr {
    fn from(err: InferenceError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
