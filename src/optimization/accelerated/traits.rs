//! Public API surface for accelerated gradient minimization.
//!
//! - [`SmoothObjective`]: trait users implement for their model.
//! - [`AGDOptions`], [`Tolerances`] and [`LineSearchOptions`]: configuration.
//! - [`Termination`] and [`AGDOutcome`]: normalized result of [`minimize`].
//!
//! [`minimize`]: crate::optimization::accelerated::minimize
use crate::optimization::{
    accelerated::{
        types::{
            Beta, BetaHistory, Cost, DEFAULT_LS_ALPHA, DEFAULT_LS_GAMMA, DEFAULT_LS_MAX_ITER,
            DEFAULT_MAX_ITERATIONS, DEFAULT_TOL_GRAD, FnEvalMap, Grad,
        },
        validation::{verify_max_iter, verify_tol_grad, verify_unit_interval},
    },
    errors::{OptError, OptResult},
};
use argmin::core::{TerminationReason, TerminationStatus};

/// User-implemented smooth convex objective.
///
/// - `type Data`: per-model data carried into every evaluation.
///
/// Required:
/// - `dim(&Data) -> usize`: length of the coefficient vector; the optimizer
///   starts from the zero vector of this length.
/// - `value(&Beta, &Data) -> OptResult<Cost>`: evaluate `obj(β)`.
/// - `check(&Beta, &Data) -> OptResult<()>`: validation hook called once
///   before optimization.
/// - `curvature_bound(&Data) -> OptResult<f64>`: Lipschitz constant `L` of
///   `∇obj`; the initial learning rate is `1 / L`.
///
/// Optional:
/// - `grad(&Beta, &Data) -> OptResult<Grad>`: analytic gradient. If not
///   implemented, finite differences are used automatically.
pub trait SmoothObjective {
    type Data: 'static;

    // Required methods
    fn dim(&self, data: &Self::Data) -> usize;
    fn value(&self, beta: &Beta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, beta: &Beta, data: &Self::Data) -> OptResult<()>;
    fn curvature_bound(&self, data: &Self::Data) -> OptResult<f64>;

    // Optional methods
    fn grad(&self, _beta: &Beta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Stopping rules of the accelerated loop.
///
/// - `tol_grad`: stop once `‖∇obj(θ)‖ ≤ tol_grad` at the momentum point.
/// - `max_iter`: hard cap on accelerated iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: f64,
    pub max_iter: usize,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolGrad`] for a non-finite or non-positive tolerance.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_grad: f64, max_iter: usize) -> OptResult<Self> {
        verify_tol_grad(tol_grad)?;
        verify_max_iter(max_iter)?;
        Ok(Self { tol_grad, max_iter })
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self { tol_grad: DEFAULT_TOL_GRAD, max_iter: DEFAULT_MAX_ITERATIONS }
    }
}

/// Backtracking line-search constants.
///
/// - `alpha`: sufficient-decrease strictness in `obj(β - t∇) ≤ obj(β) - α t ‖∇‖²`.
/// - `gamma`: shrink factor applied to `t` after each failed test.
/// - `max_iter`: cap on shrink steps; exhausting it is not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchOptions {
    pub alpha: f64,
    pub gamma: f64,
    pub max_iter: usize,
}

impl LineSearchOptions {
    /// Construct validated line-search constants.
    ///
    /// # Errors
    /// - [`OptError::InvalidLineSearchParam`] if `alpha` or `gamma` is outside (0, 1).
    pub fn new(alpha: f64, gamma: f64, max_iter: usize) -> OptResult<Self> {
        verify_unit_interval("alpha", alpha)?;
        verify_unit_interval("gamma", gamma)?;
        Ok(Self { alpha, gamma, max_iter })
    }
}

impl Default for LineSearchOptions {
    fn default() -> Self {
        Self { alpha: DEFAULT_LS_ALPHA, gamma: DEFAULT_LS_GAMMA, max_iter: DEFAULT_LS_MAX_ITER }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances`: gradient tolerance and iteration cap.
/// - `line_search: LineSearchOptions`: backtracking constants.
/// - `verbose: bool`: if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
///
/// Default:
/// - `tols`: `tol_grad = 1e-3`, `max_iter = 500`
/// - `line_search`: `alpha = 0.5`, `gamma = 0.8`, `max_iter = 100`
/// - `verbose`: `false`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AGDOptions {
    pub tols: Tolerances,
    pub line_search: LineSearchOptions,
    pub verbose: bool,
}

impl AGDOptions {
    /// Bundle already-validated tolerances and line-search constants.
    pub fn new(tols: Tolerances, line_search: LineSearchOptions, verbose: bool) -> Self {
        Self { tols, line_search, verbose }
    }
}

/// Terminal state of the accelerated loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `‖∇obj(θ)‖ ≤ tol_grad` was observed.
    Converged,
    /// The iteration cap was exhausted first.
    MaxIterReached,
}

impl Termination {
    /// Map argmin's termination status onto the two terminal states.
    ///
    /// # Errors
    /// - [`OptError::UnexpectedTermination`] for anything else (not
    ///   terminated, interrupted, target cost, solver exit).
    pub fn from_status(status: &TerminationStatus) -> OptResult<Self> {
        match status {
            TerminationStatus::Terminated(TerminationReason::SolverConverged) => {
                Ok(Termination::Converged)
            }
            TerminationStatus::Terminated(TerminationReason::MaxItersReached) => {
                Ok(Termination::MaxIterReached)
            }
            other => Err(OptError::UnexpectedTermination { status: format!("{other:?}") }),
        }
    }
}

/// Canonical result returned by `minimize`.
///
/// - `beta`: final coefficient vector (last accepted iterate).
/// - `cost_history`: `obj(β)` recorded *before* each update, so it lags the
///   iterates by one step; empty if the loop converged at iteration 0.
/// - `beta_history`: `d × (iterations + 1)` matrix; column 0 is the zero
///   start, column `k` the iterate after accepted iteration `k`.
/// - `termination`: whether the gradient test or the cap ended the run.
/// - `iterations`: number of accepted iterations (`cost_history.len()`).
/// - `grad_norm`: last gradient norm measured at the momentum point `θ`.
///   The gradient at the returned `β` itself is not evaluated.
/// - `init_learning_rate`: `1 / L`, the start step of every line search.
/// - `fn_evals`: function-evaluation counters reported by argmin.
#[derive(Debug, Clone, PartialEq)]
pub struct AGDOutcome {
    pub beta: Beta,
    pub cost_history: Vec<Cost>,
    pub beta_history: BetaHistory,
    pub termination: Termination,
    pub iterations: usize,
    pub grad_norm: Option<f64>,
    pub init_learning_rate: f64,
    pub fn_evals: FnEvalMap,
}

impl AGDOutcome {
    /// Whether the gradient-norm test fired.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Split into the `(β, cost history, β history)` triple.
    pub fn into_parts(self) -> (Beta, Vec<Cost>, BetaHistory) {
        (self.beta, self.cost_history, self.beta_history)
    }
}
