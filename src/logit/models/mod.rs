pub mod logit;
pub mod outcome;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::logit::{LogisticModel, fit_logit};
pub use self::outcome::{ConvergenceFailure, FitOutcome, FitResult};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logit::logit::models::prelude::*;
//
// to import the logit model surface in a single line.

pub mod prelude {
    pub use super::logit::{LogisticModel, fit_logit};
    pub use super::outcome::{FitOutcome, FitResult};
}
