//! newton::linalg — dense linear algebra for a single Newton step.
//!
//! Purpose
//! -------
//! Solve the Newton system `H·Δ = g` for the step `Δ` and keep Hessians
//! exactly symmetric. The `ndarray` inputs are copied into `nalgebra`
//! containers for the LU factorization.
//!
//! Invariants & assumptions
//! ------------------------
//! - `H` is square with dimension `g.len()`; callers validate shapes first.
//! - No conditioning check or damping is applied: an exactly singular `H`
//!   is an error, an ill-conditioned one yields whatever step LU produces,
//!   and a non-finite step is an error.
use crate::optimization::{
    errors::{OptError, OptResult},
    newton::types::{Grad, Hessian},
};
use nalgebra::{DMatrix, DVector};
use ndarray::Array1;

/// solve_newton_step — solve `H·Δ = g` by LU with partial pivoting.
///
/// Parameters
/// ----------
/// - `hessian`: `&Hessian`
///   Square `k × k` system matrix.
/// - `grad`: `&Grad`
///   Right-hand side of length `k`.
///
/// Returns
/// -------
/// `OptResult<Grad>`
///   The step `Δ` with `H·Δ = g`.
///
/// Errors
/// ------
/// - `OptError::SingularHessian` when the LU factorization hits a zero pivot.
/// - `OptError::NonFiniteStep` when the solution contains `NaN` or `±∞`.
pub fn solve_newton_step(hessian: &Hessian, grad: &Grad) -> OptResult<Grad> {
    let dim = grad.len();
    let mut h_nalg = DMatrix::<f64>::zeros(dim, dim);
    fill_dmatrix(hessian, &mut h_nalg);
    let rhs = DVector::from_iterator(dim, grad.iter().copied());

    let step = h_nalg.lu().solve(&rhs).ok_or(OptError::SingularHessian { dim })?;
    for (index, &value) in step.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::NonFiniteStep { index, value });
        }
    }
    Ok(Array1::from_iter(step.iter().copied()))
}

/// symmetrize_hess — enforce symmetry of a Hessian matrix in-place.
///
/// Each off-diagonal pair `(i, j)` / `(j, i)` is replaced by its average;
/// the diagonal is left untouched.
pub fn symmetrize_hess(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}

/// Copy a square `ndarray` matrix into a preallocated `DMatrix`.
///
/// The copy runs column by column to match `DMatrix`'s column-major storage.
pub(crate) fn fill_dmatrix(src: &Hessian, dst: &mut DMatrix<f64>) {
    let n = src.ncols();
    for j in 0..n {
        for i in 0..src.nrows() {
            dst[(i, j)] = src[[i, j]];
        }
    }
}
