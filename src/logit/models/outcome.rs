//! Fit outcomes for the logistic model.
//!
//! A fit ends in one of two terminal states. [`FitOutcome::Converged`] carries
//! the immutable [`FitResult`] snapshot; [`FitOutcome::FailedToConverge`]
//! carries a [`ConvergenceFailure`] diagnostic. Callers have to match on the
//! outcome, so a non-convergent fit cannot be mistaken for a valid estimate.
use crate::optimization::newton::FnEvalMap;
use ndarray::{Array1, Array2};

/// Snapshot of a converged logistic fit.
///
/// All log-likelihoods, the score and the Hessian are on the average
/// (per-observation) scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Estimated coefficients `β̂` (intercept first when `constant`).
    pub coefficients: Array1<f64>,
    /// `ℓ̄(0)`, the log-likelihood at `β = 0`.
    pub loglik_null: f64,
    /// `ℓ̄(β̂)`.
    pub loglik: f64,
    /// Score at `β̂`; `max|score| ≤ tol` by construction.
    pub score: Array1<f64>,
    /// Hessian of `ℓ̄` at `β̂`.
    pub hessian: Array2<f64>,
    /// `σ(Xβ̂)`.
    pub fitted_probabilities: Array1<f64>,
    /// Newton steps taken.
    pub iterations: usize,
    pub n_obs: usize,
    /// Whether an intercept column was prepended.
    pub constant: bool,
    /// Argmin evaluation counters (`cost_count`, `gradient_count`,
    /// `hessian_count`).
    pub fn_evals: FnEvalMap,
}

impl FitResult {
    /// Number of estimated coefficients.
    pub fn n_params(&self) -> usize {
        self.coefficients.len()
    }

    /// `max_j |score_j|` at the estimate.
    pub fn score_inf_norm(&self) -> f64 {
        self.score.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
    }
}

/// Diagnostic for a fit that exhausted its iteration budget.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceFailure {
    /// Newton steps taken (equal to `max_iter`).
    pub iterations: usize,
    pub max_iter: usize,
    pub tol: f64,
    /// `max|score|` at the last iterate; `NaN` if no score was evaluated.
    pub score_inf_norm: f64,
    /// Last iterate reached before giving up.
    pub last_coefficients: Array1<f64>,
}

impl std::fmt::Display for ConvergenceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Newton-Raphson did not converge after {} of {} iterations: max|score| = {} > tol = {:e}",
            self.iterations, self.max_iter, self.score_inf_norm, self.tol
        )
    }
}

/// Terminal state of `LogisticModel::fit`.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    Converged(FitResult),
    FailedToConverge(ConvergenceFailure),
}

impl FitOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, FitOutcome::Converged(_))
    }

    /// Borrow the fit result, if the run converged.
    pub fn result(&self) -> Option<&FitResult> {
        match self {
            FitOutcome::Converged(res) => Some(res),
            FitOutcome::FailedToConverge(_) => None,
        }
    }

    /// Consume the outcome, turning non-convergence into `Err`.
    pub fn into_result(self) -> Result<FitResult, ConvergenceFailure> {
        match self {
            FitOutcome::Converged(res) => Ok(res),
            FitOutcome::FailedToConverge(fail) => Err(fail),
        }
    }

    /// Coefficients of the last iterate, converged or not.
    pub fn coefficients(&self) -> &Array1<f64> {
        match self {
            FitOutcome::Converged(res) => &res.coefficients,
            FitOutcome::FailedToConverge(fail) => &fail.last_coefficients,
        }
    }

    /// Newton steps taken.
    pub fn iterations(&self) -> usize {
        match self {
            FitOutcome::Converged(res) => res.iterations,
            FitOutcome::FailedToConverge(fail) => fail.iterations,
        }
    }
}
