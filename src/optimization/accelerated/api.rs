//! High-level entry point for minimizing a user-provided `SmoothObjective`.
//!
//! Starts from the zero vector, derives the initial learning rate from the
//! objective's curvature bound, and delegates the run to `run_agd`.
use crate::optimization::{
    accelerated::{
        adapter::ArgMinAdapter,
        run::run_agd,
        solver::AcceleratedGradient,
        traits::{AGDOptions, AGDOutcome, SmoothObjective},
        types::Beta,
        validation::validate_curvature,
    },
    errors::OptResult,
};

/// Minimize a smooth convex objective with Nesterov-accelerated gradient
/// descent and backtracking line search.
///
/// # Behavior
/// - Starts from `β₀ = 0` of length `f.dim(data)`.
/// - Validates the start via `f.check(β₀, data)`.
/// - Computes `1 / L` once from `f.curvature_bound(data)`; every line search
///   restarts from this value.
/// - Runs the accelerated loop until `‖∇obj(θ)‖ ≤ tol_grad` or `max_iter`
///   iterations.
///
/// # Errors
/// - Propagates any error from `f.check` and `f.curvature_bound`.
/// - [`OptError::DegenerateCurvature`] / [`OptError::NonFiniteEigenvalue`]
///   for an unusable curvature bound.
/// - Propagates runtime errors from `run_agd`.
///
/// # Example
/// ```
/// use ndarray::Array1;
/// use rust_logreg::optimization::accelerated::{AGDOptions, SmoothObjective, minimize};
/// use rust_logreg::optimization::errors::OptResult;
///
/// struct Bowl;
/// impl SmoothObjective for Bowl {
///     type Data = ();
///     fn dim(&self, _: &()) -> usize { 2 }
///     fn value(&self, b: &Array1<f64>, _: &()) -> OptResult<f64> {
///         Ok((b - 3.0).mapv(|v| v * v).sum())
///     }
///     fn check(&self, _: &Array1<f64>, _: &()) -> OptResult<()> { Ok(()) }
///     fn curvature_bound(&self, _: &()) -> OptResult<f64> { Ok(2.0) }
///     fn grad(&self, b: &Array1<f64>, _: &()) -> OptResult<Array1<f64>> {
///         Ok(2.0 * (b - 3.0))
///     }
/// }
///
/// let out = minimize(&Bowl, &(), &AGDOptions::default())?;
/// assert!(out.converged());
/// assert!((out.beta[0] - 3.0).abs() < 1e-2);
/// # Ok::<(), rust_logreg::optimization::errors::OptError>(())
/// ```
///
/// [`OptError::DegenerateCurvature`]: crate::optimization::errors::OptError::DegenerateCurvature
/// [`OptError::NonFiniteEigenvalue`]: crate::optimization::errors::OptError::NonFiniteEigenvalue
pub fn minimize<F: SmoothObjective>(
    f: &F, data: &F::Data, opts: &AGDOptions,
) -> OptResult<AGDOutcome> {
    let beta0 = Beta::zeros(f.dim(data));
    f.check(&beta0, data)?;
    let init_learning_rate = validate_curvature(f.curvature_bound(data)?)?;
    let problem = ArgMinAdapter::new(f, data);
    let solver = AcceleratedGradient::new(init_learning_rate, opts);
    run_agd(beta0, opts, problem, solver)
}
