//! logit::core — data, options and likelihood building blocks.
//!
//! - [`data`]: validated `(Y, X)` container with optional intercept column.
//! - [`options`]: fit configuration ([`LogitOptions`]).
//! - [`likelihood`]: `predict`, `log_likelihood`, `score`, `hessian` as plain
//!   functions over `ndarray` views.

pub mod data;
pub mod likelihood;
pub mod options;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::LogitData;
pub use self::likelihood::{hessian, log_likelihood, predict, score};
pub use self::options::LogitOptions;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logit::logit::core::prelude::*;
//
// to import the core logit surface in a single line.

pub mod prelude {
    pub use super::data::LogitData;
    pub use super::likelihood::{hessian, log_likelihood, predict, score};
    pub use super::options::LogitOptions;
}
