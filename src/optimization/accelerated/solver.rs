//! Nesterov-accelerated gradient descent as an `argmin` [`Solver`].
//!
//! Each call to `next_iter` performs one pass of the accelerated loop:
//!
//! 1. `g = ∇obj(θ)` at the momentum point; if `‖g‖ ≤ ε` terminate with
//!    `SolverConverged` before anything is recorded.
//! 2. Record `obj(β)` (pre-update, so the cost curve lags by one step).
//! 3. Backtracking line search from `β` along `-∇obj(β)`, starting at `1 / L`.
//! 4. `β_new = θ - t·g` and `θ_new = β_new + it/(it+3)·(β_new - β_hist[it])`.
//! 5. Append `β_new` to the history.
//!
//! The iteration cap is enforced by the `Executor` (`max_iters`), which maps
//! exhaustion to `MaxItersReached`.
use crate::optimization::{
    accelerated::{
        adapter::ArgMinAdapter,
        line_search::backtracking,
        traits::{AGDOptions, LineSearchOptions, SmoothObjective},
        types::{Beta, BetaHistory, Cost, SolverState},
    },
    errors::{OptError, OptResult},
};
use argmin::core::{Error, KV, Problem, Solver, State, TerminationReason};
use ndarray::{Array2, Zip};

/// Solver state carried across iterations.
///
/// - `init_learning_rate`: `1 / L`, fixed for the whole run.
/// - `theta`: current momentum point; `None` until `init` runs.
/// - `beta_history`: every accepted iterate, starting with `β₀`.
/// - `cost_history`: `obj(β)` recorded before each update.
/// - `grad_norm`: last `‖∇obj(θ)‖` measured.
#[derive(Debug, Clone)]
pub struct AcceleratedGradient {
    init_learning_rate: f64,
    tol_grad: f64,
    line_search: LineSearchOptions,
    theta: Option<Beta>,
    beta_history: Vec<Beta>,
    cost_history: Vec<Cost>,
    grad_norm: Option<f64>,
}

impl AcceleratedGradient {
    /// Build a solver with histories pre-sized for `max_iter + 1` iterates.
    pub fn new(init_learning_rate: f64, opts: &AGDOptions) -> Self {
        let cap = opts.tols.max_iter + 1;
        Self {
            init_learning_rate,
            tol_grad: opts.tols.tol_grad,
            line_search: opts.line_search,
            theta: None,
            beta_history: Vec::with_capacity(cap),
            cost_history: Vec::with_capacity(opts.tols.max_iter),
            grad_norm: None,
        }
    }

    pub fn init_learning_rate(&self) -> f64 {
        self.init_learning_rate
    }

    /// Latest accepted iterate.
    pub fn beta(&self) -> OptResult<&Beta> {
        self.beta_history.last().ok_or(OptError::SolverNotInitialized)
    }

    pub fn cost_history(&self) -> &[Cost] {
        &self.cost_history
    }

    pub fn grad_norm(&self) -> Option<f64> {
        self.grad_norm
    }

    /// Number of accepted iterations.
    pub fn iterations(&self) -> usize {
        self.cost_history.len()
    }

    /// Stack the iterate history into a `d × (k + 1)` matrix, one column per
    /// iterate.
    ///
    /// # Errors
    /// - [`OptError::SolverNotInitialized`] if no iterate has been recorded.
    pub fn beta_history(&self) -> OptResult<BetaHistory> {
        let first = self.beta_history.first().ok_or(OptError::SolverNotInitialized)?;
        let mut out = Array2::<f64>::zeros((first.len(), self.beta_history.len()));
        for (mut col, beta) in out.columns_mut().into_iter().zip(&self.beta_history) {
            col.assign(beta);
        }
        Ok(out)
    }

    /// Consume the solver and return `(cost history, β history)`.
    pub fn into_histories(self) -> OptResult<(Vec<Cost>, BetaHistory)> {
        let betas = self.beta_history()?;
        Ok((self.cost_history, betas))
    }
}

impl<'a, F: SmoothObjective> Solver<ArgMinAdapter<'a, F>, SolverState> for AcceleratedGradient {
    const NAME: &'static str = "Accelerated gradient descent";

    fn init(
        &mut self, _problem: &mut Problem<ArgMinAdapter<'a, F>>, mut state: SolverState,
    ) -> Result<(SolverState, Option<KV>), Error> {
        let beta0 = state.take_param().ok_or(OptError::SolverNotInitialized)?;
        self.theta = Some(beta0.clone());
        self.beta_history.clear();
        self.cost_history.clear();
        self.grad_norm = None;
        self.beta_history.push(beta0.clone());
        Ok((state.param(beta0), None))
    }

    fn next_iter(
        &mut self, problem: &mut Problem<ArgMinAdapter<'a, F>>, state: SolverState,
    ) -> Result<(SolverState, Option<KV>), Error> {
        let theta = self.theta.as_ref().ok_or(OptError::SolverNotInitialized)?;
        let it = self.cost_history.len();
        let beta = self.beta_history.get(it).ok_or(OptError::SolverNotInitialized)?;

        let grad_theta = problem.gradient(theta)?;
        let norm = grad_theta.dot(&grad_theta).sqrt();
        self.grad_norm = Some(norm);
        if norm <= self.tol_grad {
            return Ok((state.terminate_with(TerminationReason::SolverConverged), None));
        }

        let cost = problem.cost(beta)?;
        let grad_beta = problem.gradient(beta)?;
        let ls = backtracking(
            |b: &Beta| problem.cost(b),
            beta,
            cost,
            &grad_beta,
            self.init_learning_rate,
            &self.line_search,
        )?;

        let mut beta_new = theta.clone();
        beta_new.scaled_add(-ls.step, &grad_theta);
        let momentum = it as f64 / (it as f64 + 3.0);
        let mut theta_new = beta_new.clone();
        Zip::from(&mut theta_new)
            .and(beta)
            .for_each(|t, &b_old| *t += momentum * (*t - b_old));

        self.cost_history.push(cost);
        self.beta_history.push(beta_new.clone());
        self.theta = Some(theta_new);
        Ok((state.param(beta_new).gradient(grad_theta).cost(cost), None))
    }
}
