//! newton::types — shared numeric aliases for the Newton–Raphson optimizer.
//!
//! Purpose
//! -------
//! Centralize the numeric types used by the optimizer so the rest of the
//! optimization code stays agnostic to `ndarray` and argmin generics.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are column vectors of length `k` (number of
//!   coefficients); `Hessian` is a dense `k × k` matrix.
//! - `Cost` is the argmin objective `c(θ) = -ℓ̄(θ)`; user-facing values are
//!   always reported on the log-likelihood scale.
//! - `NewtonState` is the argmin iteration state carrying parameter,
//!   gradient and Hessian (no Jacobian, no residuals).
use argmin::core::IterState;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Parameter vector `θ` (the logit coefficients `β`).
pub type Theta = Array1<f64>;

/// Gradient vector `∇ℓ̄(θ)` or `∇c(θ)`, same shape as `Theta`.
pub type Grad = Array1<f64>;

/// Dense `k × k` second-derivative matrix.
pub type Hessian = Array2<f64>;

/// Scalar objective value minimized by argmin, `c(θ) = -ℓ̄(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps argmin counter names (e.g., `"gradient_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// argmin state used by the Newton–Raphson solver.
pub type NewtonState = IterState<Theta, Grad, (), Hessian, (), f64>;
