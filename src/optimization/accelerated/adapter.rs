//! Adapter that exposes a user `SmoothObjective` as an `argmin` problem.
//!
//! The objective is minimized directly, so no sign flips are involved:
//! `CostFunction::cost` is `obj(β)` and `Gradient::gradient` is `∇obj(β)`.
//! If the objective has no analytic gradient, we finite-difference the
//! cost closure.
use std::cell::RefCell;

use crate::optimization::{
    accelerated::{
        traits::SmoothObjective,
        types::{Beta, Cost, Grad},
        validation::{validate_grad, validate_value},
    },
    errors::OptError,
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges a user `SmoothObjective` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `obj(β)`, rejecting non-finite values.
/// - `Gradient::gradient` returns:
///   - the analytic gradient if the objective provides one, or
///   - a finite-difference gradient of the cost.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: SmoothObjective> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: SmoothObjective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Beta;
    type Output = Cost;

    /// Evaluate `obj(β)`.
    ///
    /// # Errors
    /// - Propagates any `OptError` from the objective's `value` via `?`.
    /// - Returns `NonFiniteCost` if the value is not finite.
    fn cost(&self, beta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(beta, self.data)?;
        validate_value(output)?;
        Ok(output)
    }
}

impl<'a, F: SmoothObjective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Beta;
    type Gradient = Grad;

    /// Evaluate `∇obj(β)`.
    ///
    /// Behavior:
    /// - If the objective implements `grad`, validate and return it.
    /// - Otherwise compute a finite-difference gradient of the cost:
    ///   - try *central* differences first;
    ///   - if a cost evaluation failed inside the FD closure, or the central
    ///     gradient does not validate, retry once with *forward* differences.
    ///
    /// The FD closure must return `f64`, so the first evaluation error is
    /// captured in `closure_err` and the closure returns `NaN`.
    ///
    /// # Errors
    /// - Propagates objective errors other than `GradientNotImplemented`.
    /// - Propagates any error raised by cost evaluations during FD.
    /// - Returns validation errors for wrong dimension or non-finite entries.
    fn gradient(&self, beta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = beta.len();
        match self.f.grad(beta, self.data) {
            Ok(g) => {
                validate_grad(&g, dim)?;
                Ok(g)
            }
            Err(OptError::GradientNotImplemented) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                let cost_func = |beta: &Beta| -> f64 {
                    match self.cost(beta) {
                        Ok(val) => val,
                        Err(e) => {
                            let mut slot = closure_err.borrow_mut();
                            if slot.is_none() {
                                *slot = Some(e);
                            }
                            f64::NAN
                        }
                    }
                };
                let fd_grad = beta.central_diff(&cost_func);
                if closure_err.borrow().is_none() && validate_grad(&fd_grad, dim).is_ok() {
                    return Ok(fd_grad);
                }
                run_forward_diff(beta, &cost_func, &closure_err)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl<'a, F: SmoothObjective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user objective and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

/// Forward-difference gradient of `func` at `beta`, with error capture.
///
/// Clears `closure_err`, runs `forward_diff`, surfaces any captured error,
/// then validates the result.
fn run_forward_diff<G: Fn(&Beta) -> f64>(
    beta: &Beta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = beta.forward_diff(func);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, beta.len())?;
    Ok(fd_grad)
}
