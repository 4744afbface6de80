//! accelerated — argmin-powered Nesterov gradient descent for smooth convex
//! objectives.
//!
//! Purpose
//! -------
//! Minimize a smooth convex objective `obj(β)` with accelerated gradient
//! descent, a backtracking (Armijo) line search and a curvature-derived
//! initial step. Callers implement [`SmoothObjective`] and invoke
//! [`minimize`].
//!
//! Key behaviors
//! -------------
//! - [`adapter::ArgMinAdapter`] exposes the objective to argmin, with a
//!   finite-difference gradient fallback.
//! - [`lipschitz::max_gram_eigenvalue`] computes the spectral bound used by
//!   linear models to derive `1 / L`.
//! - [`line_search::backtracking`] shrinks `t` from `1 / L` until the
//!   sufficient-decrease test holds or its budget runs out.
//! - [`solver::AcceleratedGradient`] runs the momentum loop inside an argmin
//!   `Executor`; [`run::run_agd`] collects the result into [`AGDOutcome`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The loop starts at `β = θ = 0` with `β_history = [0]`.
//! - Convergence is tested on `‖∇obj(θ)‖` at the momentum point, before the
//!   iteration's cost is recorded.
//! - `β_history` gains exactly one column per accepted iteration, so
//!   `cost_history.len() + 1 == β_history.ncols()` on every exit.
//!
//! Conventions
//! -----------
//! - Objective and gradient errors are [`OptError`] values; this module never
//!   intentionally panics.
//! - Configuration ([`Tolerances`], [`LineSearchOptions`], [`AGDOptions`]) is
//!   validated on construction.
//!
//! [`OptError`]: crate::optimization::errors::OptError

pub mod adapter;
pub mod api;
pub mod line_search;
pub mod lipschitz;
pub mod run;
pub mod solver;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::traits::{
    AGDOptions, AGDOutcome, LineSearchOptions, SmoothObjective, Termination, Tolerances,
};
pub use self::types::{Beta, BetaHistory, Cost, FnEvalMap, Grad};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::accelerated::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{AGDOptions, AGDOutcome, SmoothObjective, Termination, Tolerances};
    pub use super::types::{Beta, Cost, Grad};
}
