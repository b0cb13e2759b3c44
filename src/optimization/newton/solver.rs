//! newton::solver — undamped Newton–Raphson as an `argmin` solver.
//!
//! Purpose
//! -------
//! Implement the classic Newton iteration on the score equations,
//! `θ ← θ − (∇²c)⁻¹∇c`, as an argmin [`Solver`] so that iteration counting,
//! evaluation counters, observers and termination bookkeeping are handled by
//! argmin's `Executor`.
//!
//! Key behaviors
//! -------------
//! - `init` evaluates cost, gradient and Hessian at the starting point so the
//!   stopping rule can fire before any step is taken.
//! - `next_iter` solves the Newton system with [`solve_newton_step`], moves
//!   to the new point and re-evaluates all derivatives there.
//! - `terminate` reports `SolverConverged` once `max|∇c(θ)| ≤ tol_grad`.
//!   The iteration cap is enforced by argmin after this check, so a step
//!   that reaches the tolerance on the last permitted iteration converges.
//!
//! Invariants & assumptions
//! ------------------------
//! - No line search, damping or step-size bound: the full Newton step is
//!   always taken.
//! - The cost value is recorded for observers only; it never influences the
//!   iteration and may be non-finite.
use crate::optimization::{
    errors::OptError,
    newton::{
        linalg::solve_newton_step,
        types::{Cost, Grad, Hessian, NewtonState, Theta},
        validation::inf_norm,
    },
};
use argmin::core::{
    CostFunction, Error, Gradient, Hessian as ArgminHessian, KV, Problem, Solver, State,
    TerminationReason, TerminationStatus,
};

/// Full-step Newton–Raphson with a max-abs-gradient stopping rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonRaphson {
    tol_grad: f64,
}

impl NewtonRaphson {
    /// Create a solver that stops once `max|∇c(θ)| ≤ tol_grad`.
    ///
    /// `tol_grad` is expected to have been validated by
    /// [`NewtonOptions::new`](crate::optimization::newton::NewtonOptions::new).
    pub fn new(tol_grad: f64) -> Self {
        Self { tol_grad }
    }

    pub fn tol_grad(&self) -> f64 {
        self.tol_grad
    }
}

impl<O> Solver<O, NewtonState> for NewtonRaphson
where
    O: CostFunction<Param = Theta, Output = Cost>
        + Gradient<Param = Theta, Gradient = Grad>
        + ArgminHessian<Param = Theta, Hessian = Hessian>,
{
    const NAME: &'static str = "Newton-Raphson";

    fn init(
        &mut self, problem: &mut Problem<O>, state: NewtonState,
    ) -> Result<(NewtonState, Option<KV>), Error> {
        let param = state.get_param().cloned().ok_or_else(|| OptError::NotInitialized {
            text: "Newton-Raphson requires an initial parameter vector.".to_string(),
        })?;
        let cost = problem.cost(&param)?;
        let grad = problem.gradient(&param)?;
        let hessian = problem.hessian(&param)?;
        Ok((state.cost(cost).gradient(grad).hessian(hessian), None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<O>, mut state: NewtonState,
    ) -> Result<(NewtonState, Option<KV>), Error> {
        let param = state.take_param().ok_or(OptError::MissingThetaHat)?;
        let grad = state.take_gradient().ok_or_else(|| OptError::NotInitialized {
            text: "Newton-Raphson state carries no gradient.".to_string(),
        })?;
        let hessian = state.take_hessian().ok_or_else(|| OptError::NotInitialized {
            text: "Newton-Raphson state carries no Hessian.".to_string(),
        })?;

        let step = solve_newton_step(&hessian, &grad)?;
        let new_param = &param - &step;

        let cost = problem.cost(&new_param)?;
        let grad = problem.gradient(&new_param)?;
        let hessian = problem.hessian(&new_param)?;
        Ok((state.param(new_param).cost(cost).gradient(grad).hessian(hessian), None))
    }

    fn terminate(&mut self, state: &NewtonState) -> TerminationStatus {
        match state.get_gradient() {
            Some(g) if inf_norm(g) <= self.tol_grad => {
                TerminationStatus::Terminated(TerminationReason::SolverConverged)
            }
            _ => TerminationStatus::NotTerminated,
        }
    }
}
