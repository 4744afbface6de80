//! Backtracking (Armijo) line search.
//!
//! Starting from the cached initial learning rate `t₀ = 1 / L`, the step is
//! shrunk geometrically until the sufficient-decrease test
//!
//! ```text
//! obj(β - t·∇) ≤ obj(β) - α·t·‖∇‖²
//! ```
//!
//! holds, or the shrink budget runs out. Running out is not an error: the
//! last step tried is returned and flagged `accepted = false`.
//!
//! Every call restarts from `t₀`; nothing is carried across calls. The
//! search is generic over the cost evaluator so it can run against an
//! argmin `Problem` (which counts evaluations) or a plain closure.
use crate::optimization::accelerated::{
    traits::LineSearchOptions,
    types::{Beta, Cost, Grad},
};
use ndarray::Zip;

/// Outcome of one backtracking search.
///
/// - `step`: accepted (or last tried) learning rate, in `(0, t₀]`.
/// - `accepted`: whether the sufficient-decrease test held for `step`.
/// - `shrinks`: number of times `γ` was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchResult {
    pub step: f64,
    pub accepted: bool,
    pub shrinks: usize,
}

/// Search for a step along `-grad` from `beta`.
///
/// # Arguments
/// - `cost`: objective evaluator; errors are propagated unchanged.
/// - `beta`: current iterate.
/// - `cost0`: `obj(beta)`, already known to the caller.
/// - `grad`: gradient at `beta`.
/// - `init_step`: `t₀`, the curvature-based initial learning rate.
/// - `opts`: sufficient-decrease constant, shrink factor and shrink cap.
///
/// # Errors
/// Any error returned by `cost`.
pub fn backtracking<E, C>(
    mut cost: C, beta: &Beta, cost0: Cost, grad: &Grad, init_step: f64, opts: &LineSearchOptions,
) -> Result<LineSearchResult, E>
where
    C: FnMut(&Beta) -> Result<Cost, E>,
{
    let grad_sq = grad.dot(grad);
    let mut trial = beta.clone();
    let mut step = init_step;
    let mut shrinks = 0;
    loop {
        Zip::from(&mut trial).and(beta).and(grad).for_each(|z, &b, &g| *z = b - step * g);
        let lhs = cost(&trial)?;
        let rhs = cost0 - opts.alpha * step * grad_sq;
        if lhs <= rhs {
            return Ok(LineSearchResult { step, accepted: true, shrinks });
        }
        if shrinks >= opts.max_iter {
            return Ok(LineSearchResult { step, accepted: false, shrinks });
        }
        step *= opts.gamma;
        shrinks += 1;
    }
}
