//! inference::summary — coefficient table and fit statistics for a
//! converged logit model.
//!
//! Purpose
//! -------
//! Turn a [`FitResult`] into the quantities usually reported next to a
//! logistic regression: standard errors, Wald z statistics with two-sided
//! normal p-values, the likelihood-ratio test against `β = 0`, McFadden's
//! pseudo-R², AIC and BIC.
//!
//! Conventions
//! -----------
//! - `FitResult` stores averages; everything here is reported on the
//!   **total** log-likelihood scale (`n·ℓ̄`).
//! - The likelihood-ratio reference is `β = 0` (every `P_i = 1/2`), so the
//!   test has `k` degrees of freedom, intercept included.
//! - p-values use `statrs` survival functions rather than `1 − cdf` to keep
//!   precision in the tails.
//! - Saturated fits (separated data) converge with fitted probabilities of
//!   exactly 0 or 1, so `ℓ̄(β̂)` may be NaN or `-inf`. Such values are
//!   carried through the statistics as data; a NaN statistic has a NaN
//!   p-value.
use crate::{
    inference::{
        errors::{InferenceError, InferenceResult},
        hessian::calc_standard_errors,
    },
    logit::models::outcome::FitResult,
};
use ndarray::Array1;
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal};

/// Post-fit summary of a logistic regression.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitSummary {
    pub coefficients: Array1<f64>,
    pub std_errors: Array1<f64>,
    /// Wald statistics `β̂_j / SE_j`.
    pub z_values: Array1<f64>,
    /// Two-sided p-values `2·(1 − Φ(|z_j|))`.
    pub p_values: Array1<f64>,
    /// Total log-likelihood `n·ℓ̄(β̂)`.
    pub loglik: f64,
    /// Total log-likelihood at `β = 0`.
    pub loglik_null: f64,
    /// `2·(loglik − loglik_null)`.
    pub lr_stat: f64,
    pub lr_df: usize,
    /// `P(χ²_k > lr_stat)`.
    pub lr_p_value: f64,
    /// McFadden's `1 − loglik / loglik_null`.
    pub pseudo_r2: f64,
    pub aic: f64,
    pub bic: f64,
    pub n_obs: usize,
}

impl LogitSummary {
    /// Build the summary from a converged fit.
    ///
    /// # Errors
    /// - Propagates [`calc_standard_errors`] validation errors.
    /// - [`InferenceError::Distribution`] if a reference distribution
    ///   cannot be built.
    pub fn from_fit(fit: &FitResult) -> InferenceResult<Self> {
        let n = fit.n_obs as f64;
        let k = fit.n_params();
        let loglik = n * fit.loglik;
        let loglik_null = n * fit.loglik_null;

        let std_errors = calc_standard_errors(&fit.hessian, fit.n_obs)?;
        let z_values = &fit.coefficients / &std_errors;
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| InferenceError::Distribution { text: e.to_string() })?;
        let p_values =
            z_values.mapv(|z| if z.is_nan() { f64::NAN } else { 2.0 * normal.sf(z.abs()) });

        let lr_stat = 2.0 * (loglik - loglik_null);
        let lr_p_value = lr_p_value(lr_stat, k)?;

        Ok(LogitSummary {
            coefficients: fit.coefficients.clone(),
            std_errors,
            z_values,
            p_values,
            loglik,
            loglik_null,
            lr_stat,
            lr_df: k,
            lr_p_value,
            pseudo_r2: 1.0 - loglik / loglik_null,
            aic: -2.0 * loglik + 2.0 * k as f64,
            bic: -2.0 * loglik + k as f64 * n.ln(),
            n_obs: fit.n_obs,
        })
    }
}

fn lr_p_value(stat: f64, df: usize) -> InferenceResult<f64> {
    let chi2 = ChiSquared::new(df as f64)
        .map_err(|e| InferenceError::Distribution { text: e.to_string() })?;
    if stat.is_nan() {
        return Ok(f64::NAN);
    }
    Ok(chi2.sf(stat.max(0.0)))
}
