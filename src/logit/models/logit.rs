//! Logistic regression model: analytic likelihood plus Newton–Raphson fit.
//!
//! This module wires the logit likelihood in [`core::likelihood`] to the
//! [`LogLikelihood`] trait and drives the fit through the Newton–Raphson
//! optimizer.
//!
//! Key ideas:
//! - The model owns validated [`LogitData`] (with the intercept column already
//!   prepended when requested) and its [`LogitOptions`].
//! - `fit` takes starting values for the *user* columns; a zero is prepended
//!   for the intercept, once, before iteration.
//! - The run ends in a [`FitOutcome`]: `Converged` with a full [`FitResult`]
//!   snapshot, or `FailedToConverge` with a diagnostic. Hard failures
//!   (bad input, singular Hessian) are `Err(LogitError)`.
//!
//! [`core::likelihood`]: crate::logit::core::likelihood
use crate::{
    logit::{
        core::{data::LogitData, likelihood, options::LogitOptions},
        errors::{LogitError, LogitResult},
        models::outcome::{ConvergenceFailure, FitOutcome, FitResult},
    },
    optimization::{
        errors::OptResult,
        newton::{
            Grad, Hessian, LogLikelihood, NewtonOptions, NewtonOutcome, Theta, maximize,
            validation::inf_norm,
        },
    },
};
use ndarray::{Array1, Array2};

/// Logistic regression `P(Y = 1 | x) = σ(x·β)` fitted by Newton–Raphson.
///
/// # Notes
/// - Stateless between calls: `fit` borrows the model immutably, so fitting
///   twice with the same inputs gives identical results.
/// - Implements [`LogLikelihood`] on the average log-likelihood scale.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    /// Validated response and (possibly augmented) design.
    pub data: LogitData,
    /// Fit options.
    pub options: LogitOptions,
}

impl LogisticModel {
    /// Validate the inputs and build a model.
    ///
    /// The intercept column is prepended here when `options.constant` is set.
    ///
    /// # Errors
    /// - Any [`LogitData::new`] validation error (dimension mismatch, empty or
    ///   non-finite input).
    /// - [`LogitError::InvalidTolerance`] for a bad `options.tol`.
    pub fn new(y: Array1<f64>, x: Array2<f64>, options: LogitOptions) -> LogitResult<Self> {
        options.newton_options()?;
        let data = LogitData::new(y, x, options.constant)?;
        Ok(LogisticModel { data, options })
    }

    /// Number of coefficients including the intercept.
    pub fn n_params(&self) -> usize {
        self.data.n_params()
    }

    /// Fitted probabilities at `beta` (full length, intercept first).
    pub fn predict(&self, beta: &Array1<f64>) -> LogitResult<Array1<f64>> {
        likelihood::predict(beta.view(), self.data.x.view())
    }

    /// Average log-likelihood at `beta`.
    pub fn log_likelihood(&self, beta: &Array1<f64>) -> LogitResult<f64> {
        likelihood::log_likelihood(beta.view(), self.data.y.view(), self.data.x.view())
    }

    /// Score of the average log-likelihood at `beta`.
    pub fn score(&self, beta: &Array1<f64>) -> LogitResult<Array1<f64>> {
        likelihood::score(beta.view(), self.data.y.view(), self.data.x.view())
    }

    /// Hessian of the average log-likelihood at `beta`.
    pub fn hessian(&self, beta: &Array1<f64>) -> LogitResult<Array2<f64>> {
        likelihood::hessian(beta.view(), self.data.y.view(), self.data.x.view())
    }

    /// Fit by Newton–Raphson from `beta0`.
    ///
    /// ## Steps
    /// 1. Check `beta0` against the user columns and prepend `0` for the
    ///    intercept when `constant` is set.
    /// 2. With `max_iter == 0`, report `FailedToConverge` straight away.
    /// 3. Otherwise iterate until `max|score| ≤ tol` or `max_iter` steps.
    /// 4. On convergence, snapshot coefficients, `ℓ̄(0)`, `ℓ̄(β̂)`, score,
    ///    Hessian and fitted probabilities into a [`FitResult`].
    ///
    /// ## Arguments
    /// - `beta0`: starting values, one per column of the design matrix as
    ///   supplied by the caller (i.e. *without* the intercept).
    ///
    /// ## Errors
    /// - [`LogitError::BetaLengthMismatch`] / [`LogitError::NonFiniteBeta`]
    ///   for a bad `beta0`.
    /// - [`LogitError::Optimization`] when a Newton step cannot be computed
    ///   (singular Hessian, non-finite step or score).
    pub fn fit(&self, beta0: &Array1<f64>) -> LogitResult<FitOutcome> {
        let theta0 = self.initial_theta(beta0)?;
        let newton_opts = self.options.newton_options()?;

        if newton_opts.max_iter == 0 {
            let score = self.score(&theta0)?;
            return Ok(FitOutcome::FailedToConverge(ConvergenceFailure {
                iterations: 0,
                max_iter: 0,
                tol: newton_opts.tol_grad,
                score_inf_norm: inf_norm(&score),
                last_coefficients: theta0,
            }));
        }

        let outcome = maximize(self, theta0, &self.data, &newton_opts)?;
        if !outcome.converged {
            return Ok(FitOutcome::FailedToConverge(failure_from(outcome, &newton_opts)));
        }
        Ok(FitOutcome::Converged(self.snapshot(outcome)?))
    }

    /// Full-length starting vector: `[0, beta0...]` with a constant,
    /// `beta0` otherwise.
    fn initial_theta(&self, beta0: &Array1<f64>) -> LogitResult<Theta> {
        let offset = usize::from(self.data.constant);
        let expected = self.n_params() - offset;
        if beta0.len() != expected {
            return Err(LogitError::BetaLengthMismatch { expected, actual: beta0.len() });
        }
        if let Some((index, &value)) = beta0.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LogitError::NonFiniteBeta { index, value });
        }

        let mut theta0 = Theta::zeros(self.n_params());
        theta0.slice_mut(ndarray::s![offset..]).assign(beta0);
        Ok(theta0)
    }

    fn snapshot(&self, outcome: NewtonOutcome) -> LogitResult<FitResult> {
        let beta = outcome.theta_hat;
        let zero = Array1::<f64>::zeros(beta.len());
        Ok(FitResult {
            loglik_null: self.log_likelihood(&zero)?,
            loglik: self.log_likelihood(&beta)?,
            score: self.score(&beta)?,
            hessian: self.hessian(&beta)?,
            fitted_probabilities: self.predict(&beta)?,
            iterations: outcome.iterations,
            n_obs: self.data.n_obs(),
            constant: self.data.constant,
            fn_evals: outcome.fn_evals,
            coefficients: beta,
        })
    }
}

fn failure_from(outcome: NewtonOutcome, opts: &NewtonOptions) -> ConvergenceFailure {
    ConvergenceFailure {
        iterations: outcome.iterations,
        max_iter: opts.max_iter,
        tol: opts.tol_grad,
        score_inf_norm: outcome.grad_inf_norm,
        last_coefficients: outcome.theta_hat,
    }
}

impl LogLikelihood for LogisticModel {
    type Data = LogitData;

    /// `ℓ̄(θ)`; may be non-finite under saturation.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<f64> {
        Ok(likelihood::log_likelihood(theta.view(), data.y.view(), data.x.view())?)
    }

    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        Ok(likelihood::score(theta.view(), data.y.view(), data.x.view())?)
    }

    fn hessian(&self, theta: &Theta, data: &Self::Data) -> OptResult<Hessian> {
        Ok(likelihood::hessian(theta.view(), data.y.view(), data.x.view())?)
    }

    /// Validate a full-length coefficient vector against the design.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        if theta.len() != data.n_params() {
            return Err(
                LogitError::BetaLengthMismatch { expected: data.n_params(), actual: theta.len() }
                    .into(),
            );
        }
        if let Some((index, &value)) = theta.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LogitError::NonFiniteBeta { index, value }.into());
        }
        Ok(())
    }
}

/// Fit a logistic regression in one call.
///
/// Equivalent to `LogisticModel::new(y, x, *options)?.fit(beta0)`.
///
/// # Example
/// ```rust
/// # use ndarray::{Array1, Array2};
/// # use rust_logit::logit::{LogitOptions, fit_logit};
/// let mut y = Array1::<f64>::zeros(50);
/// y.slice_mut(ndarray::s![..35]).fill(1.0);
/// let x = Array2::<f64>::ones((50, 1));
/// let opts = LogitOptions { constant: false, ..LogitOptions::default() };
///
/// let fit = fit_logit(y, x, &Array1::zeros(1), &opts)?.into_result().unwrap();
/// assert!((fit.coefficients[0] - (35.0_f64 / 15.0).ln()).abs() < 1e-8);
/// # Ok::<(), rust_logit::logit::LogitError>(())
/// ```
pub fn fit_logit(
    y: Array1<f64>, x: Array2<f64>, beta0: &Array1<f64>, options: &LogitOptions,
) -> LogitResult<FitOutcome> {
    LogisticModel::new(y, x, *options)?.fit(beta0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptError;
    use approx::assert_relative_eq;
    use ndarray::array;

    const EMPIRICAL_LOGIT: f64 = 0.847_297_860_387_203_7;

    /// 50 observations, 35 ones then 15 zeros, intercept-only design.
    fn intercept_only() -> (Array1<f64>, Array2<f64>) {
        let y = Array1::from_iter((0..50).map(|i| if i < 35 { 1.0 } else { 0.0 }));
        (y, Array2::ones((50, 1)))
    }

    /// 12 observations, two regressors, no separation.
    fn two_regressors() -> (Array1<f64>, Array2<f64>) {
        let y = array![0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 1.0];
        let x = array![
            [-1.0, 0.5],
            [-0.5, -1.0],
            [0.0, 0.3],
            [0.5, 1.2],
            [1.0, -0.4],
            [1.5, 0.8],
            [-1.5, -0.2],
            [0.2, -0.7],
            [-0.3, 1.1],
            [0.8, 0.0],
            [1.2, -1.3],
            [-0.8, 0.6]
        ];
        (y, x)
    }

    fn options(constant: bool, max_iter: usize) -> LogitOptions {
        LogitOptions::new(constant, 1e-9, max_iter, false).unwrap()
    }

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover `LogisticModel::fit` end to end:
    // - the closed-form intercept-only MLE,
    // - coefficient length with and without a constant,
    // - dimension and starting-value checks,
    // - the zero- and one-iteration budgets,
    // - a singular Hessian, and
    // - repeatability of the fit.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The intercept-only MLE equals the empirical logit.
    //
    // Given
    // -----
    // - X = ones(50, 1), Y = 35 ones and 15 zeros, `constant = false`,
    //   β₀ = [0].
    //
    // Expect
    // ------
    // - Converged with β̂ ≈ ln(35/15) ≈ 0.8473 within 1e-8, in far fewer
    //   than 200 iterations, with max|score| ≤ 1e-9.
    fn fit_intercept_only_matches_empirical_logit() {
        // Arrange
        let (y, x) = intercept_only();
        let model = LogisticModel::new(y, x, options(false, 200)).unwrap();

        // Act
        let outcome = model.fit(&array![0.0]).unwrap();

        // Assert
        let res = outcome.result().expect("intercept-only fit should converge");
        assert_relative_eq!(res.coefficients[0], EMPIRICAL_LOGIT, epsilon = 1e-8);
        assert!(res.iterations < 10);
        assert!(res.score_inf_norm() <= 1e-9);
        assert_relative_eq!(res.loglik_null, -std::f64::consts::LN_2, epsilon = 1e-15);
        assert!(res.loglik > res.loglik_null);
        assert!(res.fitted_probabilities.iter().all(|&p| (p - 0.7).abs() < 1e-8));
    }

    #[test]
    // Purpose
    // -------
    // A constant adds exactly one coefficient, placed first; without it the
    // coefficient count equals the number of columns.
    //
    // Given
    // -----
    // - The 12 × 2 design, fitted with `constant = true` and `false`.
    //
    // Expect
    // ------
    // - Lengths 3 and 2; the constant fit reaches
    //   β̂ ≈ [0.6052, 0.8454, -1.5570] and a symmetric Hessian.
    fn fit_coefficient_length_tracks_constant() {
        // Arrange
        let (y, x) = two_regressors();
        let with_const = LogisticModel::new(y.clone(), x.clone(), options(true, 200)).unwrap();
        let without = LogisticModel::new(y, x, options(false, 200)).unwrap();

        // Act
        let fit_c = with_const.fit(&array![0.0, 0.0]).unwrap().into_result().unwrap();
        let fit_n = without.fit(&array![0.0, 0.0]).unwrap().into_result().unwrap();

        // Assert
        assert_eq!(fit_c.n_params(), 3);
        assert_eq!(fit_n.n_params(), 2);
        assert!(fit_c.constant);
        assert_relative_eq!(fit_c.coefficients[0], 0.605_177_206_807_597, epsilon = 1e-7);
        assert_relative_eq!(fit_c.coefficients[1], 0.845_374_502_708_113, epsilon = 1e-7);
        assert_relative_eq!(fit_c.coefficients[2], -1.556_996_081_003_916, epsilon = 1e-7);
        assert_eq!(fit_c.hessian, fit_c.hessian.t());
        assert_eq!(fit_c.n_obs, 12);
    }

    #[test]
    // Purpose
    // -------
    // Mismatched response/design lengths fail before any iteration, and a
    // starting vector of the wrong length is rejected.
    //
    // Given
    // -----
    // - Y of length 10 against 8 rows of X; then a valid model with a
    //   length-3 β₀ for 2 user columns.
    //
    // Expect
    // ------
    // - `DimensionMismatch { y_len: 10, x_rows: 8 }` from `fit_logit`, then
    //   `BetaLengthMismatch { expected: 2, actual: 3 }`.
    fn fit_rejects_dimension_mismatches() {
        // Arrange
        let y = Array1::<f64>::zeros(10);
        let x = Array2::<f64>::ones((8, 1));
        let (y2, x2) = two_regressors();
        let model = LogisticModel::new(y2, x2, options(true, 200)).unwrap();

        // Act
        let dim_err = fit_logit(y, x, &array![0.0], &LogitOptions::default()).unwrap_err();
        let beta_err = model.fit(&array![0.0, 0.0, 0.0]).unwrap_err();

        // Assert
        assert_eq!(dim_err, LogitError::DimensionMismatch { y_len: 10, x_rows: 8 });
        assert_eq!(beta_err, LogitError::BetaLengthMismatch { expected: 2, actual: 3 });
    }

    #[test]
    // Purpose
    // -------
    // A zero iteration budget reports non-convergence even when the start
    // already satisfies the tolerance.
    //
    // Given
    // -----
    // - The intercept-only data started at the exact MLE, `max_iter = 0`.
    //
    // Expect
    // ------
    // - `FailedToConverge` with 0 iterations and the start as last iterate.
    fn fit_with_zero_iterations_fails_immediately() {
        // Arrange
        let (y, x) = intercept_only();
        let model = LogisticModel::new(y, x, options(false, 0)).unwrap();

        // Act
        let outcome = model.fit(&array![EMPIRICAL_LOGIT]).unwrap();

        // Assert
        match outcome {
            FitOutcome::FailedToConverge(fail) => {
                assert_eq!(fail.iterations, 0);
                assert_eq!(fail.max_iter, 0);
                assert_eq!(fail.last_coefficients, array![EMPIRICAL_LOGIT]);
                assert!(fail.score_inf_norm <= 1e-9);
            }
            FitOutcome::Converged(_) => panic!("max_iter = 0 must not converge"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Exhausting the budget before meeting the tolerance yields the failure
    // branch, carrying the last iterate.
    //
    // Given
    // -----
    // - Intercept-only data from β₀ = [0] with `max_iter = 1`. One Newton
    //   step lands at β = 0.8 where |score| ≈ 0.01.
    //
    // Expect
    // ------
    // - `FailedToConverge` after 1 iteration with last β = 0.8.
    fn fit_reports_failure_when_budget_is_exhausted() {
        // Arrange
        let (y, x) = intercept_only();
        let model = LogisticModel::new(y, x, options(false, 1)).unwrap();

        // Act
        let fail = model.fit(&array![0.0]).unwrap().into_result().unwrap_err();

        // Assert
        assert_eq!(fail.iterations, 1);
        assert_eq!(fail.max_iter, 1);
        assert_relative_eq!(fail.last_coefficients[0], 0.8, epsilon = 1e-12);
        assert!(fail.score_inf_norm > 1e-9);
        assert!((fail.score_inf_norm - 0.010_025_518_872_387_553).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A design column of zeros makes the Hessian singular; the fit fails
    // with a solver error instead of returning garbage.
    //
    // Given
    // -----
    // - X = [ones, zeros] (4 rows), Y = [0, 1, 1, 0], `constant = false`.
    //
    // Expect
    // ------
    // - `LogitError::Optimization(OptError::SingularHessian { dim: 2 })`.
    fn fit_surfaces_singular_hessian() {
        // Arrange
        let y = array![0.0, 1.0, 1.0, 0.0];
        let x = array![[1.0, 0.0], [1.0, 0.0], [1.0, 0.0], [1.0, 0.0]];
        let model = LogisticModel::new(y, x, options(false, 200)).unwrap();

        // Act
        let err = model.fit(&array![0.3, 0.0]).unwrap_err();

        // Assert
        assert_eq!(err, LogitError::Optimization(OptError::SingularHessian { dim: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Fitting twice with identical inputs gives identical results.
    //
    // Given
    // -----
    // - The 12 × 2 design with a constant, fitted twice from β₀ = [0, 0].
    //
    // Expect
    // ------
    // - Both outcomes compare equal.
    fn fit_is_repeatable() {
        let (y, x) = two_regressors();
        let model = LogisticModel::new(y, x, options(true, 200)).unwrap();
        let first = model.fit(&array![0.0, 0.0]).unwrap();
        let second = model.fit(&array![0.0, 0.0]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    // Purpose
    // -------
    // The `LogLikelihood` check rejects coefficient vectors that do not fit
    // the design.
    //
    // Given
    // -----
    // - A 3-coefficient model checked with a length-2 θ and with θ holding
    //   NaN.
    //
    // Expect
    // ------
    // - `ThetaLengthMismatch { expected: 3, actual: 2 }` and
    //   `InvalidThetaHat { index: 1, .. }`.
    fn check_rejects_bad_theta() {
        let (y, x) = two_regressors();
        let model = LogisticModel::new(y, x, options(true, 200)).unwrap();

        let short = model.check(&array![0.0, 0.0], &model.data).unwrap_err();
        let nan = model.check(&array![0.0, f64::NAN, 0.0], &model.data).unwrap_err();

        assert_eq!(short, OptError::ThetaLengthMismatch { expected: 3, actual: 2 });
        assert!(matches!(nan, OptError::InvalidThetaHat { index: 1, .. }));
    }
}
