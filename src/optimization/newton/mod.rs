//! newton — argmin-powered Newton–Raphson for analytic log-likelihoods.
//!
//! Purpose
//! -------
//! Maximize a log-likelihood `ℓ(θ)` whose score and Hessian are available in
//! closed form. Callers implement [`LogLikelihood`] and invoke [`maximize`];
//! the iteration itself runs as a custom argmin [`solver::NewtonRaphson`]
//! under argmin's `Executor`.
//!
//! Key behaviors
//! -------------
//! - Convert `ℓ(θ)` into the argmin cost `c(θ) = -ℓ(θ)` via
//!   [`adapter::ArgMinAdapter`], negating score and Hessian on the way.
//! - Take full, undamped Newton steps `θ ← θ − (∇²ℓ)⁻¹∇ℓ`, solved with an LU
//!   factorization ([`linalg::solve_newton_step`]).
//! - Stop once `max_i |∇ℓ(θ)_i| ≤ tol_grad`, or after `max_iter` steps.
//!   Reaching the cap is reported through [`NewtonOutcome::converged`], not
//!   as an error.
//! - With the `obs_slog` feature and `verbose = true`, emit per-iteration
//!   and termination diagnostics through slog ([`diagnostics`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Score and Hessian returned by the model must be finite and correctly
//!   shaped; [`validation`] rejects anything else before a step is taken.
//! - A singular Hessian aborts the run with `OptError::SingularHessian`.
//!
//! Conventions
//! -----------
//! - Vectors and matrices use the aliases in [`types`].
//! - Errors bubble up as [`OptResult<T>`](crate::optimization::errors::OptResult);
//!   argmin's boxed errors are mapped back into typed `OptError` values.
//!
//! Downstream usage
//! ----------------
//! - `logit::models::LogisticModel` implements [`LogLikelihood`] and calls
//!   [`maximize`] from its `fit` method.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover the adapter sign conventions, the linear
//!   solve, derivative validation, outcome construction and one-step
//!   convergence on a quadratic.

pub mod adapter;
pub mod api;
#[cfg(feature = "obs_slog")]
pub mod diagnostics;
pub mod linalg;
pub mod run;
pub mod solver;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{
    DEFAULT_MAX_ITER, DEFAULT_TOL_GRAD, LogLikelihood, NewtonOptions, NewtonOutcome,
};
pub use self::types::{Cost, FnEvalMap, Grad, Hessian, NewtonState, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logit::optimization::newton::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LogLikelihood, NewtonOptions, NewtonOutcome};
    pub use super::types::{Grad, Hessian, Theta};
}
