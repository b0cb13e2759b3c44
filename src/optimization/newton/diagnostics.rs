//! newton::diagnostics — slog reporting for verbose Newton runs.
//!
//! Compiled only with the `obs_slog` feature. The per-iteration trace comes
//! from argmin's `SlogLogger` observer; this module adds the two lines the
//! observer cannot produce: the starting point before the first iteration and
//! the termination verdict (including the non-convergence diagnostic).
use crate::optimization::{
    errors::OptResult,
    newton::{
        LogLikelihood, NewtonOptions, NewtonOutcome, Theta, adapter::ArgMinAdapter,
        validation::inf_norm,
    },
};
use argmin::core::{CostFunction, Gradient};
use slog::{Drain, Logger, info, o, warn};

/// Synchronous stderr logger used for verbose runs.
pub fn term_logger() -> Logger {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    Logger::root(drain, o!("solver" => "newton-raphson"))
}

/// Log ℓ(θ₀) and `max|score(θ₀)|` before the first iteration.
///
/// # Errors
/// Propagates model errors raised while evaluating the starting point.
pub fn log_initial_state<F>(
    logger: &Logger, theta0: &Theta, problem: &ArgMinAdapter<'_, F>,
) -> OptResult<()>
where
    F: LogLikelihood,
{
    let ll0 = -problem.cost(theta0)?;
    let score_inf = inf_norm(&problem.gradient(theta0)?);
    info!(logger, "initial state"; "loglik" => ll0, "max_abs_score" => score_inf, "k" => theta0.len());
    Ok(())
}

/// Log the termination verdict; a non-convergent run is logged at `WARN`.
pub fn log_termination(logger: &Logger, outcome: &NewtonOutcome, opts: &NewtonOptions) {
    if outcome.converged {
        info!(logger, "convergence achieved";
            "iterations" => outcome.iterations,
            "max_abs_score" => outcome.grad_inf_norm,
            "tol" => opts.tol_grad);
    } else {
        warn!(logger, "newton failed to converge";
            "iterations" => outcome.iterations,
            "max_iter" => opts.max_iter,
            "max_abs_score" => outcome.grad_inf_norm,
            "tol" => opts.tol_grad,
            "status" => outcome.status.as_str());
    }
}
