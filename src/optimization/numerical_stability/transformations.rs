//! Numerical stability utilities.
//!
//! Provides safe implementations of the two nonlinear transforms the
//! logistic objective is built from. Both are prone to overflow in naïve
//! form once `|x|` grows past a few hundred.
//!
//! # Provided items
//! - [`log1p_exp(x)`]: stable `ln(1 + exp(x))` (softplus), mapping
//!   ℝ → (0, ∞) without overflow.
//! - [`safe_logistic(x)`]: stable sigmoid `1 / (1 + exp(-x))`, mapping
//!   ℝ → (0, 1) without overflow in either tail.
//! - [`EIGEN_TOL`] / [`EIGEN_MAX_NITER`]: convergence controls for the
//!   symmetric eigen-decomposition behind the curvature bound.

/// Convergence tolerance for symmetric eigen-decompositions.
pub const EIGEN_TOL: f64 = f64::EPSILON;

/// Iteration cap for symmetric eigen-decompositions.
///
/// Far above what a well-posed Gram matrix needs; hitting it means the
/// input is numerically degenerate.
pub const EIGEN_MAX_NITER: usize = 10_000;

/// Numerically stable softplus: `log1p_exp(x) = ln(1 + exp(x))`.
///
/// Evaluated as `max(x, 0) + ln_1p(exp(-|x|))`, so the exponential is only
/// ever taken of a non-positive argument. Exact for large negative `x`
/// (no cancellation) and returns `x` plus a vanishing correction for large
/// positive `x`.
///
/// # Parameters
/// - `x`: real input
///
/// # Returns
/// - `ln(1 + exp(x))` as `f64`, always `>= 0`.
#[inline]
pub fn log1p_exp(x: f64) -> f64 {
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}

/// Numerically stable logistic sigmoid `σ(x) = 1 / (1 + exp(-x))`.
///
/// Branches on the sign of `x` so the exponential never overflows:
/// - `x >= 0`: `1 / (1 + exp(-x))`
/// - `x < 0`:  `exp(x) / (1 + exp(x))`
#[inline]
pub fn safe_logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}
