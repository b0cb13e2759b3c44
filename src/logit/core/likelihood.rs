//! logit::core::likelihood — Bernoulli log-likelihood of the logit model and
//! its analytic derivatives.
//!
//! Purpose
//! -------
//! Evaluate fitted probabilities, the *average* log-likelihood, the score and
//! the Hessian of the logistic model at a coefficient vector `β`. These are
//! plain functions over `ndarray` views with no shared state; the model layer
//! and the Newton optimizer call them once per iteration.
//!
//! Key behaviors
//! -------------
//! - [`predict`]: `P_i = 1 / (1 + exp(-x_i·β))`.
//! - [`log_likelihood`]: `ℓ̄(β) = (1/n) Σ_i [Y_i ln P_i + (1 − Y_i) ln(1 − P_i)]`.
//! - [`score`]: `∇ℓ̄(β) = Xᵀ(Y − P) / n`.
//! - [`hessian`]: `∇²ℓ̄(β) = −Xᵀ diag(P ⊙ (1 − P)) X / n`, symmetrized.
//!
//! Invariants & assumptions
//! ------------------------
//! - `β.len() == X.ncols()` and `Y.len() == X.nrows()`; violations are
//!   reported as [`LogitError`] rather than panicking in `ndarray`.
//! - Probabilities may saturate to exactly `0` or `1` for extreme linear
//!   predictors. That is accepted: the log-likelihood then becomes
//!   non-finite (`-inf` or `NaN`) and is returned as data, not as an error.
//! - Score and Hessian stay finite under saturation, since `P ⊙ (1 − P)`
//!   simply collapses to zero.
//!
//! Conventions
//! -----------
//! - Everything is on the average (per-observation) scale. Multiply by `n`
//!   for the total log-likelihood and observed information.
//! - The Hessian never forms the `n × n` weight matrix; rows of `X` are scaled
//!   by `P_i(1 − P_i)` instead.
//!
//! Testing notes
//! -------------
//! - Unit tests check probability bounds, closed-form values at `β = 0`,
//!   symmetry and negative semi-definiteness of the Hessian, agreement of
//!   the analytic derivatives with `finitediff` central differences, and the
//!   dimension checks.
use crate::{
    logit::errors::{LogitError, LogitResult},
    optimization::newton::linalg::symmetrize_hess,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Fitted probabilities `P = σ(Xβ)`.
///
/// # Errors
/// - [`LogitError::BetaLengthMismatch`] if `beta.len() != x.ncols()`.
pub fn predict(beta: ArrayView1<f64>, x: ArrayView2<f64>) -> LogitResult<Array1<f64>> {
    check_beta(beta, x)?;
    Ok(x.dot(&beta).mapv(logistic))
}

/// Average Bernoulli log-likelihood `ℓ̄(β)`.
///
/// May return `-inf` or `NaN` when a fitted probability saturates to the
/// wrong boundary; this is not treated as an error.
///
/// # Errors
/// - [`LogitError::DimensionMismatch`] if `y.len() != x.nrows()`.
/// - [`LogitError::BetaLengthMismatch`] if `beta.len() != x.ncols()`.
pub fn log_likelihood(
    beta: ArrayView1<f64>, y: ArrayView1<f64>, x: ArrayView2<f64>,
) -> LogitResult<f64> {
    check_response(y, x)?;
    let p = predict(beta, x)?;
    let total: f64 = y
        .iter()
        .zip(p.iter())
        .map(|(&y_i, &p_i)| y_i * p_i.ln() + (1.0 - y_i) * (1.0 - p_i).ln())
        .sum();
    Ok(total / y.len() as f64)
}

/// Score of the average log-likelihood, `Xᵀ(Y − P) / n`.
///
/// # Errors
/// - [`LogitError::DimensionMismatch`] if `y.len() != x.nrows()`.
/// - [`LogitError::BetaLengthMismatch`] if `beta.len() != x.ncols()`.
pub fn score(
    beta: ArrayView1<f64>, y: ArrayView1<f64>, x: ArrayView2<f64>,
) -> LogitResult<Array1<f64>> {
    check_response(y, x)?;
    let residual = &y - &predict(beta, x)?;
    Ok(x.t().dot(&residual) / y.len() as f64)
}

/// Hessian of the average log-likelihood, `−Xᵀ diag(P ⊙ (1 − P)) X / n`.
///
/// The result is symmetrized so `H == Hᵀ` holds exactly.
///
/// # Errors
/// - [`LogitError::DimensionMismatch`] if `y.len() != x.nrows()`.
/// - [`LogitError::BetaLengthMismatch`] if `beta.len() != x.ncols()`.
pub fn hessian(
    beta: ArrayView1<f64>, y: ArrayView1<f64>, x: ArrayView2<f64>,
) -> LogitResult<Array2<f64>> {
    check_response(y, x)?;
    let weights = predict(beta, x)?.mapv(|p| p * (1.0 - p));
    let weighted_x = &x * &weights.insert_axis(Axis(1));
    let mut hess = x.t().dot(&weighted_x) / -(y.len() as f64);
    symmetrize_hess(&mut hess);
    Ok(hess)
}

#[inline]
fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn check_beta(beta: ArrayView1<f64>, x: ArrayView2<f64>) -> LogitResult<()> {
    if beta.len() != x.ncols() {
        return Err(LogitError::BetaLengthMismatch { expected: x.ncols(), actual: beta.len() });
    }
    Ok(())
}

fn check_response(y: ArrayView1<f64>, x: ArrayView2<f64>) -> LogitResult<()> {
    if y.len() != x.nrows() {
        return Err(LogitError::DimensionMismatch { y_len: y.len(), x_rows: x.nrows() });
    }
    if y.is_empty() {
        return Err(LogitError::EmptyData);
    }
    Ok(())
}
