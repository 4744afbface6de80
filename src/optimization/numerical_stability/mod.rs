//! numerical_stability — overflow-safe scalar transforms and shared tolerances.
//!
//! Purpose
//! -------
//! Collect the numerically stable building blocks of the logistic
//! objective so that objective, gradient and prediction code can assume
//! well-conditioned `f64` arithmetic for any finite score.
//!
//! Key behaviors
//! -------------
//! - Stable softplus (`log1p_exp`) for the per-example loss
//!   `ln(1 + exp(z))`.
//! - Stable sigmoid (`safe_logistic`) for the per-example gradient weights
//!   and for prediction thresholding.
//! - Centralized eigen-decomposition controls (`EIGEN_TOL`,
//!   `EIGEN_MAX_NITER`) used by the curvature-bound estimate.
//!
//! Conventions
//! -----------
//! - Pure functions of `f64`; no allocation, I/O, logging or global state.
//! - Inputs are assumed finite; data validation happens in the
//!   classification layer.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] compare against naïve formulas on
//!   safe grids and check both tails.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{EIGEN_MAX_NITER, EIGEN_TOL, log1p_exp, safe_logistic};
