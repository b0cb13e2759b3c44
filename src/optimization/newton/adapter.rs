//! Adapter that exposes a [`LogLikelihood`] as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a
//! *minimization* by defining the cost as `c(θ) = -ℓ(θ)`. The analytic score
//! and Hessian supplied by the model are negated accordingly, so a Newton
//! step on the cost, `θ − (∇²c)⁻¹∇c`, is the same step as
//! `θ − (∇²ℓ)⁻¹∇ℓ` on the score equations.
use crate::optimization::newton::{
    traits::LogLikelihood,
    types::{Cost, Grad, Hessian, Theta},
    validation::{validate_grad, validate_hessian},
};
use argmin::core::{CostFunction, Error, Gradient, Hessian as ArgminHessian};

/// Bridges a `LogLikelihood` to `argmin`'s `CostFunction`, `Gradient` and
/// `Hessian`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)`; a non-finite value is passed
///   through unchanged (saturated probabilities are data, not errors).
/// - `Gradient::gradient` returns `-∇ℓ(θ)` after validation.
/// - `Hessian::hessian` returns `-∇²ℓ(θ)` after validation.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

impl<F: LogLikelihood> CostFunction for ArgMinAdapter<'_, F> {
    type Param = Theta;
    type Output = Cost;

    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        Ok(-self.f.value(theta, self.data)?)
    }
}

impl<F: LogLikelihood> Gradient for ArgMinAdapter<'_, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the cost gradient `-∇ℓ(θ)`.
    ///
    /// # Errors
    /// - Propagates model errors from `grad`.
    /// - `GradientDimMismatch` / `InvalidGradient` from validation.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let g = self.f.grad(theta, self.data)?;
        validate_grad(&g, theta.len())?;
        Ok(-g)
    }
}

impl<F: LogLikelihood> ArgminHessian for ArgMinAdapter<'_, F> {
    type Param = Theta;
    type Hessian = Hessian;

    /// Evaluate the cost Hessian `-∇²ℓ(θ)`.
    ///
    /// # Errors
    /// - Propagates model errors from `hessian`.
    /// - `HessianDimMismatch` / `InvalidHessian` from validation.
    fn hessian(&self, theta: &Self::Param) -> Result<Self::Hessian, Error> {
        let h = self.f.hessian(theta, self.data)?;
        validate_hessian(&h, theta.len())?;
        Ok(-h)
    }
}
