//! Logit options — configuration for a logistic-regression fit.
//!
//! Purpose
//! -------
//! Collect the fit knobs (intercept augmentation, score tolerance, iteration
//! cap, verbosity) in one validated struct, [`LogitOptions`], and translate
//! them into the optimizer's [`NewtonOptions`].
//!
//! Conventions
//! -----------
//! - Defaults follow the classic call signature:
//!   `constant = true`, `tol = 1e-9`, `max_iter = 200`, `verbose = false`.
//! - `max_iter = 0` is valid and means the fit reports non-convergence
//!   without taking a step.
use crate::{
    logit::errors::{LogitError, LogitResult},
    optimization::newton::{DEFAULT_MAX_ITER, DEFAULT_TOL_GRAD, NewtonOptions},
};

/// LogitOptions — fit-time configuration for `LogisticModel`.
///
/// Fields
/// ------
/// - `constant`: prepend a column of ones to the design matrix.
/// - `tol`: stop once `max_i |score_i| ≤ tol`. Must be finite and `> 0`.
/// - `max_iter`: hard cap on Newton steps.
/// - `verbose`: emit slog diagnostics during the fit (needs the `obs_slog`
///   feature; ignored otherwise).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogitOptions {
    pub constant: bool,
    pub tol: f64,
    pub max_iter: usize,
    pub verbose: bool,
}

impl LogitOptions {
    /// Construct validated options.
    ///
    /// # Errors
    /// - [`LogitError::InvalidTolerance`] if `tol` is NaN, infinite or `≤ 0`.
    pub fn new(constant: bool, tol: f64, max_iter: usize, verbose: bool) -> LogitResult<Self> {
        if !tol.is_finite() {
            return Err(LogitError::InvalidTolerance { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(LogitError::InvalidTolerance {
                tol,
                reason: "Tolerance must be strictly positive.",
            });
        }
        Ok(LogitOptions { constant, tol, max_iter, verbose })
    }

    /// Optimizer options for the Newton–Raphson backend.
    ///
    /// # Errors
    /// - Re-validates `tol`, since the fields are public and may have been
    ///   edited after construction.
    pub fn newton_options(&self) -> LogitResult<NewtonOptions> {
        Ok(NewtonOptions::new(self.tol, self.max_iter, self.verbose)?)
    }
}

impl Default for LogitOptions {
    fn default() -> Self {
        LogitOptions {
            constant: true,
            tol: DEFAULT_TOL_GRAD,
            max_iter: DEFAULT_MAX_ITER,
            verbose: false,
        }
    }
}
