//! High-level entry point for maximizing a `LogLikelihood` with Newton–Raphson.
//!
//! Validates the starting point, wraps the model in an `ArgMinAdapter` (which
//! *minimizes* `-ℓ(θ)`), and delegates the run to `run_newton`.
use crate::optimization::{
    errors::OptResult,
    newton::{
        NewtonOutcome, Theta, adapter::ArgMinAdapter, run::run_newton, traits::LogLikelihood,
        traits::NewtonOptions,
    },
};

/// Maximize a log-likelihood `ℓ(θ)` with full-step Newton–Raphson.
///
/// # Behavior
/// - Validates the initial guess via `f.check(&theta0, data)`.
/// - Iterates `θ ← θ − (∇²ℓ)⁻¹∇ℓ` until `max|∇ℓ(θ)| ≤ opts.tol_grad` or
///   `opts.max_iter` steps have been taken.
///
/// # Returns
/// A [`NewtonOutcome`]. Hitting the iteration cap is **not** an error: the
/// outcome carries `converged == false` and the last iterate.
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates runtime errors from `run_newton` (singular Hessian,
///   non-finite derivatives or steps).
///
/// # Example
/// ```
/// use ndarray::{Array2, array};
/// use rust_logit::optimization::errors::OptResult;
/// use rust_logit::optimization::newton::{
///     Grad, Hessian, LogLikelihood, NewtonOptions, Theta, maximize,
/// };
///
/// // ℓ(θ) = -½‖θ − c‖², maximized at θ = c.
/// struct Quadratic;
///
/// impl LogLikelihood for Quadratic {
///     type Data = Theta;
///     fn value(&self, theta: &Theta, c: &Theta) -> OptResult<f64> {
///         let d = theta - c;
///         Ok(-0.5 * d.dot(&d))
///     }
///     fn grad(&self, theta: &Theta, c: &Theta) -> OptResult<Grad> {
///         Ok(c - theta)
///     }
///     fn hessian(&self, theta: &Theta, _c: &Theta) -> OptResult<Hessian> {
///         Ok(-Array2::eye(theta.len()))
///     }
///     fn check(&self, _theta: &Theta, _c: &Theta) -> OptResult<()> {
///         Ok(())
///     }
/// }
///
/// let c = array![1.0, -2.0];
/// let out = maximize(&Quadratic, array![0.0, 0.0], &c, &NewtonOptions::default())?;
/// assert!(out.converged);
/// assert_eq!(out.iterations, 1);
/// assert!((out.theta_hat[1] + 2.0).abs() < 1e-12);
/// # Ok::<(), rust_logit::optimization::errors::OptError>(())
/// ```
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: Theta, data: &F::Data, opts: &NewtonOptions,
) -> OptResult<NewtonOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    run_newton(theta0, opts, problem)
}
