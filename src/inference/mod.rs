//! inference — standard errors and test statistics for fitted logit models.
//!
//! Purpose
//! -------
//! Provide post-estimation inference on top of a converged
//! [`FitResult`](crate::logit::FitResult): classical standard errors from the
//! analytic Hessian, Wald tests, the likelihood-ratio test against `β = 0`,
//! and goodness-of-fit summaries.
//!
//! Key behaviors
//! -------------
//! - [`calc_standard_errors`]: SEs from the observed information `−n·H` via
//!   an eigen pseudoinverse (eigenvalues `≤ EIGEN_EPS` dropped).
//! - [`LogitSummary::from_fit`]: coefficient table (SE, z, p), LR statistic
//!   and p-value, McFadden pseudo-R², AIC and BIC.
//! - [`InferenceError`] / [`InferenceResult`] for failures (malformed
//!   Hessian, non-finite log-likelihoods, distribution construction).
//!
//! Conventions
//! -----------
//! - Inputs are on the average log-likelihood scale as stored in
//!   `FitResult`; reported log-likelihoods and criteria are totals.
//! - All functions are pure: no logging, no global state.
//!
//! Testing notes
//! -------------
//! - Unit tests compare against reference values computed independently for
//!   a small non-separable design, plus analytic cases for the Hessian
//!   pseudoinverse.

pub mod errors;
pub mod hessian;
pub mod summary;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{InferenceError, InferenceResult};
pub use self::hessian::{EIGEN_EPS, calc_standard_errors};
pub use self::summary::LogitSummary;

// ---- Optional convenience prelude for downstream crates ------------------
//
// Downstream crates can `use rust_logit::inference::prelude::*;` to
// import the primary inference surface in a single line.

pub mod prelude {
    pub use super::errors::{InferenceError, InferenceResult};
    pub use super::hessian::calc_standard_errors;
    pub use super::summary::LogitSummary;
}
