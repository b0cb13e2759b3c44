//! Validation helpers for Newton–Raphson optimization.
//!
//! This module centralizes the consistency checks used across the optimizer:
//!
//! - **Tolerance checks**: [`verify_tol_grad`] ensures the score tolerance is
//!   finite and strictly positive.
//! - **Derivative validation**: [`validate_grad`] and [`validate_hessian`]
//!   enforce correct dimensions and finite entries.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Stopping rule**: [`inf_norm`] is the max-absolute-component norm used
//!   by the convergence test.
use crate::optimization::{
    errors::{OptError, OptResult},
    newton::types::{Grad, Hessian, Theta},
};

/// Validate the score tolerance.
///
/// The value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate the shape and entries of a Hessian matrix.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] if dimensions are not `dim × dim`.
/// - [`OptError::InvalidHessian`] if any entry is non-finite, with offending
///   row/col indices and value.
pub fn validate_hessian(hessian: &Hessian, dim: usize) -> OptResult<()> {
    if hessian.nrows() != dim || hessian.ncols() != dim {
        return Err(OptError::HessianDimMismatch {
            expected: dim,
            found: (hessian.nrows(), hessian.ncols()),
        });
    }
    for ((row, col), &value) in hessian.indexed_iter() {
        if !value.is_finite() {
            return Err(OptError::InvalidHessian { row, col, value });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Max-absolute-component norm `‖g‖∞`.
///
/// Returns `0.0` for an empty vector and propagates `NaN` if any component is
/// `NaN`.
pub fn inf_norm(grad: &Grad) -> f64 {
    grad.iter().fold(0.0_f64, |acc, &v| {
        if v.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(v.abs()) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Tolerance validation for non-finite and non-positive inputs.
    // - Gradient / Hessian shape and finiteness checks.
    // - `theta_hat` unwrapping.
    // - The infinity norm used by the stopping rule.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Reject zero, negative and non-finite score tolerances.
    //
    // Given
    // -----
    // - Tolerances 0.0, -1e-9, NaN and a valid 1e-9.
    //
    // Expect
    // ------
    // - Only 1e-9 is accepted.
    fn verify_tol_grad_rejects_non_positive_and_non_finite() {
        assert!(verify_tol_grad(1e-9).is_ok());
        assert!(matches!(verify_tol_grad(0.0), Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(verify_tol_grad(-1e-9), Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(verify_tol_grad(f64::NAN), Err(OptError::InvalidTolGrad { .. })));
    }

    #[test]
    // Purpose
    // -------
    // A gradient of the wrong length is reported before any finiteness check.
    //
    // Given
    // -----
    // - A length-2 gradient validated against dimension 3.
    //
    // Expect
    // ------
    // - `GradientDimMismatch { expected: 3, found: 2 }`.
    fn validate_grad_reports_dimension_mismatch() {
        // Arrange
        let g = array![1.0, 2.0];

        // Act
        let res = validate_grad(&g, 3);

        // Assert
        assert_eq!(res, Err(OptError::GradientDimMismatch { expected: 3, found: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Non-finite Hessian entries are located by row and column.
    //
    // Given
    // -----
    // - A 2×2 matrix with `inf` at (1, 0).
    //
    // Expect
    // ------
    // - `InvalidHessian { row: 1, col: 0, .. }`.
    fn validate_hessian_locates_non_finite_entry() {
        // Arrange
        let mut h = Array2::<f64>::zeros((2, 2));
        h[[1, 0]] = f64::INFINITY;

        // Act
        let res = validate_hessian(&h, 2);

        // Assert
        match res {
            Err(OptError::InvalidHessian { row: 1, col: 0, .. }) => {}
            other => panic!("Expected InvalidHessian at (1, 0), got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_theta_hat` distinguishes a missing vector from a bad one.
    //
    // Given
    // -----
    // - `None` and `Some([0.0, NaN])`.
    //
    // Expect
    // ------
    // - `MissingThetaHat` and `InvalidThetaHat { index: 1, .. }` respectively.
    fn validate_theta_hat_missing_and_non_finite() {
        assert_eq!(validate_theta_hat(None), Err(OptError::MissingThetaHat));
        match validate_theta_hat(Some(array![0.0, f64::NAN])) {
            Err(OptError::InvalidThetaHat { index: 1, .. }) => {}
            other => panic!("Expected InvalidThetaHat at index 1, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // The stopping-rule norm is the largest absolute component.
    //
    // Given
    // -----
    // - g = [0.5, -3.0, 2.0].
    //
    // Expect
    // ------
    // - ‖g‖∞ = 3.0; a `NaN` component makes the norm `NaN`.
    fn inf_norm_takes_largest_absolute_component() {
        assert_eq!(inf_norm(&array![0.5, -3.0, 2.0]), 3.0);
        assert!(inf_norm(&array![f64::NAN, 1.0]).is_nan());
        assert_eq!(inf_norm(&Grad::zeros(0)), 0.0);
    }
}
