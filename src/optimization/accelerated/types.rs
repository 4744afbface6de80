//! accelerated::types — shared numeric aliases and default constants.
//!
//! Purpose
//! -------
//! Centralize the numeric types used by the accelerated-gradient optimizer
//! so the rest of the code stays agnostic to `ndarray` and argmin generics.
//!
//! Conventions
//! -----------
//! - `Beta` and `Grad` are column vectors of length `d` (feature count).
//! - `BetaHistory` stores one iterate per column, `d × (iterations + 1)`.
//! - `SolverState` is argmin's `IterState` specialized to this crate's
//!   types; the solver uses no Jacobian, Hessian or residuals.
use argmin::core::IterState;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Coefficient vector `β` (also used for the momentum point `θ`).
pub type Beta = Array1<f64>;

/// Gradient vector `∇obj(β)`, same shape as [`Beta`].
pub type Grad = Array1<f64>;

/// Scalar objective value.
pub type Cost = f64;

/// Iterate history, one column per snapshot.
pub type BetaHistory = Array2<f64>;

/// Function-evaluation counters as reported by argmin.
///
/// Maps counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// argmin iteration state for the accelerated solver.
pub type SolverState = IterState<Beta, Grad, (), (), (), f64>;

/// Default gradient-norm tolerance `ε`.
pub const DEFAULT_TOL_GRAD: f64 = 1e-3;

/// Default cap on accelerated iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Default sufficient-decrease constant `α` of the Armijo test.
pub const DEFAULT_LS_ALPHA: f64 = 0.5;

/// Default shrink factor `γ` of the backtracking line search.
pub const DEFAULT_LS_GAMMA: f64 = 0.8;

/// Default cap on line-search shrink steps.
pub const DEFAULT_LS_MAX_ITER: usize = 100;
