//! logit — logistic regression fitted by Newton–Raphson.
//!
//! Purpose
//! -------
//! Provide the maximum-likelihood logit model: validated data and options,
//! the Bernoulli log-likelihood with analytic score and Hessian, and a
//! Newton–Raphson fit that ends in an explicit converged / not-converged
//! outcome. This is the main entry point of the crate and the surface the
//! Python bindings depend on.
//!
//! Key behaviors
//! -------------
//! - [`core`]: [`LogitData`] (validation, intercept augmentation),
//!   [`LogitOptions`] (`constant`, `tol`, `max_iter`, `verbose`), and the
//!   likelihood functions [`predict`], [`log_likelihood`], [`score`],
//!   [`hessian`].
//! - [`models`]: [`LogisticModel`] with `fit`, the one-shot [`fit_logit`],
//!   and the tagged [`FitOutcome`] (`Converged(FitResult)` or
//!   `FailedToConverge(ConvergenceFailure)`).
//! - [`errors`]: [`LogitError`] / [`LogitResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `Y.len() == X.nrows()` at all times; checked once at construction.
//! - The intercept column is prepended exactly once, when the model is
//!   built; `fit` then prepends a single `0` to the caller's `β₀`.
//! - `β.len() == X.ncols()` (augmented) throughout the iteration.
//!
//! Conventions
//! -----------
//! - Log-likelihood, score and Hessian are averages over observations.
//! - Stopping rule: `max_j |score_j| ≤ tol`. Reaching `max_iter` steps first
//!   is the `FailedToConverge` outcome, not an error.
//! - No line search, no damping: every step is the full Newton step.
//! - The logit stack performs no I/O. With the `obs_slog` feature and
//!   `verbose = true`, the optimizer logs progress to stderr.
//!
//! Downstream usage
//! ----------------
//! 1. Build a [`LogisticModel`] via `LogisticModel::new(y, x, options)` (or
//!    call [`fit_logit`] directly).
//! 2. Call `fit(&beta0)` and match on the [`FitOutcome`].
//! 3. Feed a converged [`FitResult`] into
//!    [`inference::LogitSummary`](crate::inference::LogitSummary) for
//!    standard errors and test statistics.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{LogitData, LogitOptions, hessian, log_likelihood, predict, score};
pub use self::errors::{LogitError, LogitResult};
pub use self::models::{ConvergenceFailure, FitOutcome, FitResult, LogisticModel, fit_logit};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logit::logit::prelude::*;
//
// to import the main logit surface in a single line.

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::errors::{LogitError, LogitResult};
    pub use super::models::prelude::*;
}
