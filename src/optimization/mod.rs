//! optimization — accelerated solver, numerical helpers, and unified error
//! surface.
//!
//! Purpose
//! -------
//! Provide the optimization layer behind model training: an argmin-backed
//! accelerated gradient solver, overflow-safe scalar transforms, and a
//! single error/result surface shared by every layer of the crate.
//!
//! Key behaviors
//! -------------
//! - `accelerated`: minimize a smooth convex objective with Nesterov
//!   momentum, backtracking line search and a curvature-derived step.
//! - `numerical_stability`: stable softplus/sigmoid and eigen-solver
//!   controls.
//! - `errors`: normalize validation issues, numerical failures and backend
//!   solver errors into `OptError` / `OptResult<T>`.
//!
//! Conventions
//! -----------
//! - Objectives are minimized directly; no sign flips between user code and
//!   the solver.
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw argmin errors.
//! - Progress output is opt-in (`verbose` plus the `obs_slog` feature).
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; end-to-end training runs are
//!   in `tests/`.

pub mod accelerated;
pub mod errors;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::accelerated::prelude::*;
    pub use super::errors::{OptError, OptResult};
    pub use super::numerical_stability::{log1p_exp, safe_logistic};
}
