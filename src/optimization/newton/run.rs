//! Execution helper that runs the Newton–Raphson solver on a log-likelihood
//! problem and returns a crate-friendly [`NewtonOutcome`].
use crate::optimization::{
    errors::OptResult,
    newton::{
        LogLikelihood, NewtonOptions, NewtonOutcome, Theta, adapter::ArgMinAdapter,
        solver::NewtonRaphson,
    },
};
use argmin::core::{Executor, State};

/// Run Newton–Raphson for a log-likelihood problem.
///
/// Wires up:
/// - the model via [`ArgMinAdapter`],
/// - a [`NewtonRaphson`] solver with `opts.tol_grad`,
/// - initial parameter `theta0`,
/// - `opts.max_iter` as argmin's `max_iters`,
/// - optional observers (behind the `obs_slog` feature),
///
/// then executes the solver and converts the final state into a
/// [`NewtonOutcome`]. The reported gradient is flipped back from the cost
/// gradient to the score `∇ℓ(θ̂)`.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a terminal
/// slog observer is attached with `ObserverMode::Always`, and the initial and
/// final states are logged via [`diagnostics`](super::diagnostics).
///
/// # Errors
/// - Propagates any argmin runtime error (singular Hessian, invalid
///   derivatives, model errors) via `From<argmin::core::Error> for OptError`.
/// - Propagates validation errors raised while building the outcome.
pub fn run_newton<F>(
    theta0: Theta, opts: &NewtonOptions, problem: ArgMinAdapter<'_, F>,
) -> OptResult<NewtonOutcome>
where
    F: LogLikelihood,
{
    #[cfg(feature = "obs_slog")]
    let logger = opts.verbose.then(super::diagnostics::term_logger);
    #[cfg(feature = "obs_slog")]
    if let Some(logger) = &logger {
        super::diagnostics::log_initial_state(logger, &theta0, &problem)?;
    }

    let solver = NewtonRaphson::new(opts.tol_grad);
    let max_iter = opts.max_iter as u64;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0).max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let score = result.take_gradient().map(|g| -g);
    let outcome =
        NewtonOutcome::new(result.take_param(), termination, iterations, function_counts, score)?;

    #[cfg(feature = "obs_slog")]
    if let Some(logger) = &logger {
        super::diagnostics::log_termination(logger, &outcome, opts);
    }
    Ok(outcome)
}
