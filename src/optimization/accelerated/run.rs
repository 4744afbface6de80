//! Execution helper that drives [`AcceleratedGradient`] through an `argmin`
//! `Executor` and returns a crate-friendly [`AGDOutcome`].
use crate::optimization::{
    accelerated::{
        adapter::ArgMinAdapter,
        solver::AcceleratedGradient,
        traits::{AGDOptions, AGDOutcome, SmoothObjective, Termination},
        types::Beta,
    },
    errors::OptResult,
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};

/// Run the accelerated solver from `beta0`.
///
/// Wires up:
/// - the user objective via [`ArgMinAdapter`],
/// - a constructed [`AcceleratedGradient`] (carrying `1 / L`),
/// - the initial iterate and `max_iters = opts.tols.max_iter`,
/// - optional observers (behind the `obs_slog` feature),
///
/// then executes and collects histories from the solver and termination /
/// evaluation counts from the final `IterState`.
///
/// # Feature flags
/// With `obs_slog` enabled and `opts.verbose == true`, a terminal slog
/// observer is attached with `ObserverMode::Always` and a one-time line logs
/// `obj(β₀)` and `‖∇obj(β₀)‖` before the first iteration.
///
/// # Errors
/// - Propagates `argmin` runtime errors and objective errors via
///   `From<argmin::core::Error>`.
/// - [`OptError::UnexpectedTermination`] if the run stopped for a reason other
///   than convergence or the iteration cap.
///
/// [`OptError::UnexpectedTermination`]: crate::optimization::errors::OptError::UnexpectedTermination
pub fn run_agd<'a, F: SmoothObjective>(
    beta0: Beta, opts: &AGDOptions, problem: ArgMinAdapter<'a, F>, solver: AcceleratedGradient,
) -> OptResult<AGDOutcome> {
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&beta0, &problem)?;
    }
    let init_learning_rate = solver.init_learning_rate();
    let max_iter = opts.tols.max_iter as u64;
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(beta0).max_iters(max_iter));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }

    let result = optimizer.run()?;
    let termination = Termination::from_status(result.state.get_termination_status())?;
    let fn_evals = result.state.get_func_counts().clone();
    let solver = result.solver;
    let beta = solver.beta()?.clone();
    let grad_norm = solver.grad_norm();
    let iterations = solver.iterations();
    let (cost_history, beta_history) = solver.into_histories()?;
    Ok(AGDOutcome {
        beta,
        cost_history,
        beta_history,
        termination,
        iterations,
        grad_norm,
        init_learning_rate,
        fn_evals,
    })
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F: SmoothObjective>(
    beta0: &Beta, problem: &ArgMinAdapter<'_, F>,
) -> OptResult<()> {
    let obj0 = problem.cost(beta0)?;
    let g0n = problem.gradient(beta0).ok().map(|g| g.dot(&g).sqrt());

    eprintln!(
        "init: obj(beta0) = {:.6}{}",
        obj0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
