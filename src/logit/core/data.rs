//! Validated response/design data for the logistic-regression model.
//!
//! Purpose
//! -------
//! Provide a single container, [`LogitData`], holding the response vector `Y`
//! and the design matrix `X` after input validation and optional constant
//! augmentation. Everything downstream (likelihood, Newton iteration,
//! inference) reads its inputs from this type and can skip re-validating them.
//!
//! Key behaviors
//! -------------
//! - Reject empty inputs, non-finite entries, and `Y.len() != X.nrows()`.
//! - When `constant = true`, prepend exactly one column of ones to `X` at
//!   construction time. Repeated fits on the same data never re-augment.
//!
//! Invariants & assumptions
//! ------------------------
//! - `y.len() == x.nrows() > 0` and `x.ncols() > 0`.
//! - All entries of `y` and `x` are finite.
//! - `y` values are *expected* in `[0, 1]` but are not checked; values outside
//!   that range simply produce a meaningless (possibly non-finite)
//!   log-likelihood.
//!
//! Conventions
//! -----------
//! - Rows are observations, columns are regressors. With a constant, column 0
//!   is the intercept and user columns are shifted right by one.
//!
//! Testing notes
//! -------------
//! - Unit tests cover augmentation, the `Y`/`X` length check, non-finite
//!   entries, and the empty/no-regressor cases.
use crate::logit::errors::{LogitError, LogitResult};
use ndarray::{Array1, Array2, s};

/// `LogitData` — validated `(Y, X)` pair with optional intercept column.
///
/// Fields
/// ------
/// - `y`: `Array1<f64>`
///   Response vector of length `n`.
/// - `x`: `Array2<f64>`
///   Design matrix `n × k`, including the intercept column when
///   `constant == true`.
/// - `constant`: `bool`
///   Whether a column of ones was prepended.
#[derive(Debug, Clone, PartialEq)]
pub struct LogitData {
    pub y: Array1<f64>,
    pub x: Array2<f64>,
    pub constant: bool,
}

impl LogitData {
    /// Construct validated data, prepending an intercept column if requested.
    ///
    /// # Errors
    /// - [`LogitError::EmptyData`] when `y` or `x` has no observations.
    /// - [`LogitError::DimensionMismatch`] when `y.len() != x.nrows()`.
    /// - [`LogitError::NoRegressors`] when `x` has no columns and
    ///   `constant == false`.
    /// - [`LogitError::NonFiniteResponse`] / [`LogitError::NonFiniteDesign`]
    ///   for the first NaN/±inf entry found.
    ///
    /// # Example
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_logit::logit::core::data::LogitData;
    /// let y = array![0.0, 1.0, 1.0];
    /// let x = array![[0.5], [1.5], [2.0]];
    /// let data = LogitData::new(y, x, true).unwrap();
    /// assert_eq!(data.n_params(), 2);
    /// assert_eq!(data.x[[1, 0]], 1.0);
    /// ```
    pub fn new(y: Array1<f64>, x: Array2<f64>, constant: bool) -> LogitResult<Self> {
        if y.len() != x.nrows() {
            return Err(LogitError::DimensionMismatch { y_len: y.len(), x_rows: x.nrows() });
        }
        if y.is_empty() {
            return Err(LogitError::EmptyData);
        }
        if x.ncols() == 0 && !constant {
            return Err(LogitError::NoRegressors);
        }

        if let Some((index, &value)) = y.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LogitError::NonFiniteResponse { index, value });
        }
        if let Some(((row, col), &value)) = x.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(LogitError::NonFiniteDesign { row, col, value });
        }

        let x = if constant { add_constant(&x) } else { x };
        Ok(LogitData { y, x, constant })
    }

    /// Number of observations `n`.
    pub fn n_obs(&self) -> usize {
        self.y.len()
    }

    /// Number of coefficients `k` (columns of the augmented design).
    pub fn n_params(&self) -> usize {
        self.x.ncols()
    }
}

/// Prepend a column of ones to `x`.
fn add_constant(x: &Array2<f64>) -> Array2<f64> {
    let mut augmented = Array2::<f64>::ones((x.nrows(), x.ncols() + 1));
    augmented.slice_mut(s![.., 1..]).assign(x);
    augmented
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover `LogitData::new`: constant augmentation, the
    // response/design length check, and rejection of empty or non-finite
    // input.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // With `constant = true` exactly one ones-column is prepended and the
    // user columns shift right.
    //
    // Given
    // -----
    // - X = [[2, 3], [4, 5]], Y = [0, 1].
    //
    // Expect
    // ------
    // - X becomes [[1, 2, 3], [1, 4, 5]] and k = 3.
    fn new_with_constant_prepends_single_ones_column() {
        // Arrange
        let y = array![0.0, 1.0];
        let x = array![[2.0, 3.0], [4.0, 5.0]];

        // Act
        let data = LogitData::new(y, x, true).unwrap();

        // Assert
        assert_eq!(data.x, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
        assert_eq!(data.n_params(), 3);
        assert_eq!(data.n_obs(), 2);
        assert!(data.constant);
    }

    #[test]
    // Purpose
    // -------
    // Without a constant the design matrix is stored unchanged.
    //
    // Given
    // -----
    // - X = [[2], [4]], Y = [0, 1], `constant = false`.
    //
    // Expect
    // ------
    // - X is unchanged and k = 1.
    fn new_without_constant_keeps_design() {
        let x = array![[2.0], [4.0]];
        let data = LogitData::new(array![0.0, 1.0], x.clone(), false).unwrap();
        assert_eq!(data.x, x);
        assert_eq!(data.n_params(), 1);
    }

    #[test]
    // Purpose
    // -------
    // A response longer than the design fails before any computation.
    //
    // Given
    // -----
    // - Y of length 10, X with 8 rows.
    //
    // Expect
    // ------
    // - `DimensionMismatch { y_len: 10, x_rows: 8 }`.
    fn new_rejects_response_design_length_mismatch() {
        // Arrange
        let y = Array1::<f64>::zeros(10);
        let x = Array2::<f64>::ones((8, 2));

        // Act
        let err = LogitData::new(y, x, true).unwrap_err();

        // Assert
        assert_eq!(err, LogitError::DimensionMismatch { y_len: 10, x_rows: 8 });
    }

    #[test]
    // Purpose
    // -------
    // Empty input and a design without regressors are rejected.
    //
    // Given
    // -----
    // - Y, X with zero rows; then a 3 × 0 design with `constant = false`.
    //
    // Expect
    // ------
    // - `EmptyData` and `NoRegressors` respectively. A 3 × 0 design with a
    //   constant is valid (intercept-only model).
    fn new_rejects_empty_and_regressor_free_input() {
        let empty = LogitData::new(Array1::zeros(0), Array2::zeros((0, 2)), true);
        assert_eq!(empty.unwrap_err(), LogitError::EmptyData);

        let bare = LogitData::new(array![0.0, 1.0, 1.0], Array2::zeros((3, 0)), false);
        assert_eq!(bare.unwrap_err(), LogitError::NoRegressors);

        let intercept_only = LogitData::new(array![0.0, 1.0, 1.0], Array2::zeros((3, 0)), true);
        assert_eq!(intercept_only.unwrap().x, Array2::<f64>::ones((3, 1)));
    }

    #[test]
    // Purpose
    // -------
    // The first non-finite entry is reported with its position.
    //
    // Given
    // -----
    // - Y with NaN at index 1; X with +inf at (1, 0).
    //
    // Expect
    // ------
    // - `NonFiniteResponse { index: 1, .. }` and
    //   `NonFiniteDesign { row: 1, col: 0, .. }`.
    fn new_rejects_non_finite_entries() {
        let y_err = LogitData::new(array![0.0, f64::NAN], array![[1.0], [2.0]], false).unwrap_err();
        assert!(matches!(y_err, LogitError::NonFiniteResponse { index: 1, .. }));

        let x_err =
            LogitData::new(array![0.0, 1.0], array![[1.0], [f64::INFINITY]], false).unwrap_err();
        assert!(matches!(x_err, LogitError::NonFiniteDesign { row: 1, col: 0, .. }));
    }
}
