//! Public API surface for Newton–Raphson log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait a model implements to be maximized.
//! - [`NewtonOptions`]: stopping rule and verbosity for the optimizer.
//! - [`NewtonOutcome`]: normalized result returned by [`maximize`](super::maximize).
//!
//! Convention: we *maximize* a log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. Implementors return the derivatives of `ℓ` itself; the
//! adapter flips signs where argmin expects the cost.
use crate::optimization::{
    errors::OptResult,
    newton::{
        FnEvalMap, Grad, Theta,
        types::Hessian,
        validation::{inf_norm, validate_theta_hat, verify_tol_grad},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;

/// Default score tolerance (max-abs component of the score).
pub const DEFAULT_TOL_GRAD: f64 = 1e-9;

/// Default cap on Newton iterations.
pub const DEFAULT_MAX_ITER: usize = 200;

/// Model interface required by the Newton–Raphson optimizer.
///
/// All three derivatives are analytic and refer to the log-likelihood being
/// maximized, not to the cost.
///
/// - `type Data`: per-model data carried into every evaluation.
/// - `value(&Theta, &Data) -> OptResult<f64>`: evaluate `ℓ(θ)`. May be
///   non-finite at saturated fitted probabilities; the optimizer never stops
///   on the value.
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: score `∇ℓ(θ)`.
/// - `hessian(&Theta, &Data) -> OptResult<Hessian>`: `∇²ℓ(θ)`.
/// - `check(&Theta, &Data) -> OptResult<()>`: reject an initial `θ` that
///   does not fit the data. Called once before optimization.
pub trait LogLikelihood {
    type Data;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64>;
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad>;
    fn hessian(&self, theta: &Theta, data: &Self::Data) -> OptResult<Hessian>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tol_grad` — stop as soon as `max|∇ℓ(θ)| ≤ tol_grad`.
/// - `max_iter` — hard cap on Newton steps. `0` is allowed and means no step
///   is ever taken.
/// - `verbose` — if `true`, attaches a slog observer (behind the `obs_slog`
///   feature) and logs the initial state and the termination.
///
/// Default: `tol_grad = 1e-9`, `max_iter = 200`, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonOptions {
    pub tol_grad: f64,
    pub max_iter: usize,
    pub verbose: bool,
}

impl NewtonOptions {
    /// Construct validated optimizer options.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolGrad`](crate::optimization::errors::OptError::InvalidTolGrad)
    ///   for a non-finite or non-positive tolerance.
    pub fn new(tol_grad: f64, max_iter: usize, verbose: bool) -> OptResult<Self> {
        verify_tol_grad(tol_grad)?;
        Ok(Self { tol_grad, max_iter, verbose })
    }
}

impl Default for NewtonOptions {
    fn default() -> Self {
        Self { tol_grad: DEFAULT_TOL_GRAD, max_iter: DEFAULT_MAX_ITER, verbose: false }
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: last iterate (converged or not).
/// - `converged`: `true` only when the solver's own stopping rule fired.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of Newton steps performed.
/// - `fn_evals`: argmin evaluation counters (`cost_count`, `gradient_count`,
///   `hessian_count`).
/// - `grad_inf_norm`: `max|∇ℓ(θ̂)|`, the quantity compared to `tol_grad`.
/// - `grad_norm`: Euclidean norm of the last score, if one was computed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonOutcome {
    pub theta_hat: Theta,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_inf_norm: f64,
    pub grad_norm: Option<f64>,
}

impl NewtonOutcome {
    /// Build a validated [`NewtonOutcome`] from raw solver state.
    ///
    /// `grad` is the score of the log-likelihood at `theta_hat` (already
    /// sign-flipped back from the cost gradient by the caller).
    ///
    /// # Errors
    /// - Propagates `theta_hat` validation errors (missing or non-finite).
    pub fn new(
        theta_hat_opt: Option<Theta>, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        let (converged, status) = match &termination {
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                (true, "Solver converged".to_string())
            }
            TerminationStatus::NotTerminated => (false, "Not terminated".to_string()),
            other => (false, format!("{other:?}")),
        };
        let grad_inf_norm = grad.as_ref().map_or(f64::NAN, inf_norm);
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self {
            theta_hat,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
            grad_inf_norm,
            grad_norm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `NewtonOptions` validation and defaults.
    // - Mapping of argmin termination statuses into `NewtonOutcome`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Defaults mirror the classic fit signature (tol 1e-9, 200 iterations).
    //
    // Given
    // -----
    // - `NewtonOptions::default()`.
    //
    // Expect
    // ------
    // - tol_grad = 1e-9, max_iter = 200, verbose = false.
    fn newton_options_default_matches_documented_values() {
        let opts = NewtonOptions::default();
        assert_eq!(opts.tol_grad, 1e-9);
        assert_eq!(opts.max_iter, 200);
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // `max_iter = 0` is valid configuration; a bad tolerance is not.
    //
    // Given
    // -----
    // - `NewtonOptions::new(1e-6, 0, false)` and `new(-1.0, 10, false)`.
    //
    // Expect
    // ------
    // - The first succeeds, the second yields `InvalidTolGrad`.
    fn newton_options_accepts_zero_iterations_rejects_bad_tol() {
        assert!(NewtonOptions::new(1e-6, 0, false).is_ok());
        assert!(matches!(NewtonOptions::new(-1.0, 10, false), Err(OptError::InvalidTolGrad { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Only `SolverConverged` counts as convergence; hitting the iteration cap
    // does not.
    //
    // Given
    // -----
    // - Two outcomes built from `SolverConverged` and `MaxItersReached`.
    //
    // Expect
    // ------
    // - `converged` is true for the first, false for the second, and the
    //   score norms are reported.
    fn newton_outcome_maps_termination_reasons() {
        // Arrange
        let conv = TerminationStatus::Terminated(TerminationReason::SolverConverged);
        let capped = TerminationStatus::Terminated(TerminationReason::MaxItersReached);

        // Act
        let a = NewtonOutcome::new(
            Some(array![1.0]),
            conv,
            3,
            FnEvalMap::new(),
            Some(array![3.0, -4.0]),
        )
        .unwrap();
        let b = NewtonOutcome::new(Some(array![1.0]), capped, 5, FnEvalMap::new(), None).unwrap();

        // Assert
        assert!(a.converged);
        assert_eq!(a.iterations, 3);
        assert_eq!(a.grad_inf_norm, 4.0);
        assert_eq!(a.grad_norm, Some(5.0));
        assert!(!b.converged);
        assert!(b.status.contains("MaxItersReached"), "Got: {}", b.status);
        assert!(b.grad_inf_norm.is_nan());
    }
}
