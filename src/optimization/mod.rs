//! optimization — Newton–Raphson likelihood maximization and its error surface.
//!
//! Purpose
//! -------
//! Provide the model-agnostic optimization layer used by the logit model:
//! an argmin-backed Newton–Raphson maximizer (`newton`) and a single
//! error/result surface (`errors::OptError`, `OptResult<T>`).
//!
//! Conventions
//! -----------
//! - Solvers maximize a log-likelihood `ℓ(θ)` by minimizing the internal cost
//!   `c(θ) = -ℓ(θ)`; user-facing outcomes are expressed in terms of `ℓ`.
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw argmin errors.
//! - Logging is opt-in through the `obs_slog` feature; without it this layer
//!   performs no I/O.

pub mod errors;
pub mod newton;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logit::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::newton::prelude::*;
}
