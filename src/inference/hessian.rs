//! inference::hessian — standard errors from the analytic logit Hessian.
//!
//! Purpose
//! -------
//! Convert the Hessian of the *average* log-likelihood at `β̂` into classical
//! standard errors. The observed information on the total scale is
//! `J = −n·H`; its Moore–Penrose pseudoinverse is built from a symmetric
//! eigendecomposition, so weakly identified directions inflate SEs instead
//! of blowing up an explicit inverse.
//!
//! Key behaviors
//! -------------
//! - Validate that `H` is square, finite, and that `n > 0`.
//! - Copy `J` into a `nalgebra::DMatrix` and call `symmetric_eigen`.
//! - Drop eigenvalues `λ ≤ EIGEN_EPS` and return
//!   `SE_i = sqrt(Σ_k Q[i,k]² / λ_k)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `H` comes from `logit::core::likelihood::hessian`, which already
//!   symmetrizes it; this module does not re-symmetrize.
//! - For a well-conditioned problem the result equals
//!   `sqrt(diag((−nH)⁻¹))`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover a diagonal information matrix with known SEs, a
//!   correlated 2 × 2 case against the explicit inverse, the rank-deficient
//!   case, and input validation.
use crate::{
    inference::errors::{InferenceError, InferenceResult},
    optimization::newton::linalg::fill_dmatrix,
};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2};

/// Eigenvalues of the observed information at or below this threshold are
/// treated as zero.
pub const EIGEN_EPS: f64 = 1e-12;

/// calc_standard_errors — classical SEs from an average-scale Hessian.
///
/// Parameters
/// ----------
/// - `hessian`: `&Array2<f64>`
///   `k × k` Hessian of the average log-likelihood at `β̂`.
/// - `n_obs`: `usize`
///   Number of observations used in the fit.
///
/// Returns
/// -------
/// `InferenceResult<Array1<f64>>`
///   Length-`k` vector of standard errors.
///
/// Errors
/// ------
/// - `InferenceError::EmptySample` when `n_obs == 0`.
/// - `InferenceError::HessianDimMismatch` when `hessian` is not square.
/// - `InferenceError::NonFiniteHessian` for the first NaN/±inf entry.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_logit::inference::hessian::calc_standard_errors;
/// // H = -diag(4, 1) / 1 with n = 1: J = diag(4, 1).
/// let h = array![[-4.0, 0.0], [0.0, -1.0]];
/// let se = calc_standard_errors(&h, 1).unwrap();
/// assert!((se[0] - 0.5).abs() < 1e-12);
/// assert!((se[1] - 1.0).abs() < 1e-12);
/// ```
pub fn calc_standard_errors(hessian: &Array2<f64>, n_obs: usize) -> InferenceResult<Array1<f64>> {
    if n_obs == 0 {
        return Err(InferenceError::EmptySample);
    }
    let k = hessian.nrows();
    if hessian.ncols() != k {
        return Err(InferenceError::HessianDimMismatch { expected: k, found: hessian.dim() });
    }
    if let Some(((row, col), &value)) = hessian.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(InferenceError::NonFiniteHessian { row, col, value });
    }

    let obs_info = hessian * -(n_obs as f64);
    let mut obs_info_nalg = DMatrix::<f64>::zeros(k, k);
    fill_dmatrix(&obs_info, &mut obs_info_nalg);
    Ok(solve_for_se(obs_info_nalg, k))
}

/// solve_for_se — square roots of the pseudoinverse diagonal.
///
/// `Var(β̂_i) = Σ_{k: λ_k > EIGEN_EPS} Q[i,k]² / λ_k` with `J = QΛQᵀ`.
fn solve_for_se(obs_info_nalg: DMatrix<f64>, k: usize) -> Array1<f64> {
    let eigen_decomp = obs_info_nalg.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;
    Array1::from_iter((0..k).map(|i| {
        eigenvals
            .iter()
            .enumerate()
            .filter(|(_, lambda)| **lambda > EIGEN_EPS)
            .map(|(j, &lambda)| q[(i, j)] * q[(i, j)] / lambda)
            .sum::<f64>()
            .sqrt()
    }))
}
