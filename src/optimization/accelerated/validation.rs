//! Validation helpers for the accelerated optimizer.
//!
//! This module centralizes the consistency checks used across the
//! optimizer interface:
//!
//! - **Option checks**: [`verify_tol_grad`], [`verify_max_iter`],
//!   [`verify_lambda`], [`verify_unit_interval`] ensure hyperparameters are
//!   finite and in range.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Objective values**: [`validate_value`] checks objective outputs for
//!   finiteness.
//! - **Curvature bound**: [`validate_curvature`] turns a Lipschitz estimate
//!   into a usable initial step.
use crate::optimization::{
    accelerated::types::Grad,
    errors::{OptError, OptResult},
};

/// Validate the gradient-norm tolerance `ε`.
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: f64) -> OptResult<()> {
    if !tol.is_finite() {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
    }
    Ok(())
}

/// Validate the iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidMaxIter`] if `max_iter == 0`.
pub fn verify_max_iter(max_iter: usize) -> OptResult<()> {
    if max_iter == 0 {
        return Err(OptError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be greater than zero.",
        });
    }
    Ok(())
}

/// Validate the regularization strength `λ`.
///
/// # Errors
/// Returns [`OptError::InvalidLambda`] if `λ` is non-finite or negative.
pub fn verify_lambda(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidLambda { value, reason: "Lambda must be finite." });
    }
    if value < 0.0 {
        return Err(OptError::InvalidLambda { value, reason: "Lambda must be non-negative." });
    }
    Ok(())
}

/// Validate a line-search constant that must lie strictly inside (0, 1).
///
/// # Errors
/// Returns [`OptError::InvalidLineSearchParam`] naming the offending constant.
pub fn verify_unit_interval(name: &'static str, value: f64) -> OptResult<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(OptError::InvalidLineSearchParam {
            name,
            value,
            reason: "Value must lie strictly between 0 and 1.",
        });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that a scalar objective value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

/// Turn a curvature (Lipschitz) bound into the initial learning rate `1 / L`.
///
/// # Errors
/// - [`OptError::NonFiniteEigenvalue`] if the bound is `NaN` or infinite.
/// - [`OptError::DegenerateCurvature`] if the bound is ≤ 0, which happens
///   for an all-zero feature matrix with `λ = 0`.
pub fn validate_curvature(bound: f64) -> OptResult<f64> {
    if !bound.is_finite() {
        return Err(OptError::NonFiniteEigenvalue { value: bound });
    }
    if bound <= 0.0 {
        return Err(OptError::DegenerateCurvature { bound });
    }
    Ok(1.0 / bound)
}
