//! LogisticRegression — L2-regularized binary classifier trained with
//! accelerated gradient descent.
//!
//! Purpose
//! -------
//! Tie together validated data ([`LabeledData`]), the penalized loss
//! ([`L2Logistic`]) and the accelerated optimizer into a single model object
//! with a `train` → `predict` lifecycle.
//!
//! Key behaviors
//! -------------
//! - Construction validates data, `λ`, `ε` and the iteration cap; nothing is
//!   computed until [`LogisticRegression::train`].
//! - `train` derives `1 / (λ_max(XXᵀ/n) + λ)` once, runs the accelerated
//!   loop from `β = 0`, and caches the resulting [`AGDOutcome`].
//! - Accessors and model-level prediction return
//!   [`OptError::ModelNotTrained`] until a training run succeeds.
//!
//! Invariants & assumptions
//! ------------------------
//! - `X` and `y` are never mutated.
//! - Hyperparameters are fixed after construction.
//! - A failed `train` leaves any previous outcome untouched; no partial `β`
//!   is stored.
//!
//! Conventions
//! -----------
//! - `X` is `d × n`, examples in columns; labels are ±1.
//! - `misclassification_error` is a percentage in `[0, 100]`.
use crate::{
    classification::{
        data::LabeledData,
        evaluate::{misclassification_error, predict},
        objective::L2Logistic,
    },
    optimization::{
        accelerated::{
            api::minimize,
            traits::{AGDOptions, AGDOutcome, Tolerances},
            types::{Beta, BetaHistory, Cost},
        },
        errors::{OptError, OptResult},
    },
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// L2-regularized logistic regression model.
///
/// Fields
/// ------
/// - `data`: validated training set.
/// - `objective`: loss with fixed `λ`.
/// - `options`: tolerances, line-search constants and verbosity.
/// - `outcome`: result of the last successful `train`, if any.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    data: LabeledData,
    objective: L2Logistic,
    options: AGDOptions,
    outcome: Option<AGDOutcome>,
}

impl LogisticRegression {
    /// Create an untrained model from a `d × n` feature matrix and ±1 labels.
    ///
    /// Uses default line-search constants (`α = 0.5`, `γ = 0.8`, 100 shrinks).
    ///
    /// # Errors
    /// - Data errors from [`LabeledData::new`].
    /// - [`OptError::InvalidLambda`], [`OptError::InvalidTolGrad`] or
    ///   [`OptError::InvalidMaxIter`] for bad hyperparameters.
    pub fn new(
        x: Array2<f64>, y: Array1<f64>, lambda: f64, eps: f64, max_iterations: usize,
    ) -> OptResult<Self> {
        let data = LabeledData::new(x, y)?;
        let options = AGDOptions { tols: Tolerances::new(eps, max_iterations)?, ..Default::default() };
        Self::with_options(data, lambda, options)
    }

    /// Create an untrained model with full control of optimizer options.
    ///
    /// # Errors
    /// - [`OptError::InvalidLambda`] for a negative or non-finite `lambda`.
    pub fn with_options(data: LabeledData, lambda: f64, options: AGDOptions) -> OptResult<Self> {
        let objective = L2Logistic::new(lambda)?;
        Ok(Self { data, objective, options, outcome: None })
    }

    /// Fit the model and cache the outcome.
    ///
    /// Retraining reruns from `β = 0` and replaces the cached outcome; with
    /// identical inputs the result is identical.
    ///
    /// # Errors
    /// - Numerical errors from the curvature bound
    ///   ([`OptError::EigenDecompositionFailed`], [`OptError::DegenerateCurvature`], ...).
    /// - Any objective or backend error raised during optimization.
    pub fn train(&mut self) -> OptResult<&AGDOutcome> {
        let outcome = minimize(&self.objective, &self.data, &self.options)?;
        Ok(&*self.outcome.insert(outcome))
    }

    pub fn data(&self) -> &LabeledData {
        &self.data
    }

    pub fn lambda(&self) -> f64 {
        self.objective.lambda()
    }

    pub fn options(&self) -> &AGDOptions {
        &self.options
    }

    /// Outcome of the last successful `train`.
    ///
    /// # Errors
    /// - [`OptError::ModelNotTrained`] before the first successful `train`.
    pub fn outcome(&self) -> OptResult<&AGDOutcome> {
        self.outcome.as_ref().ok_or(OptError::ModelNotTrained)
    }

    pub fn beta(&self) -> OptResult<&Beta> {
        Ok(&self.outcome()?.beta)
    }

    pub fn cost_history(&self) -> OptResult<&[Cost]> {
        Ok(&self.outcome()?.cost_history)
    }

    pub fn beta_history(&self) -> OptResult<&BetaHistory> {
        Ok(&self.outcome()?.beta_history)
    }

    pub fn init_learning_rate(&self) -> OptResult<f64> {
        Ok(self.outcome()?.init_learning_rate)
    }

    /// Predict ±1 labels for the columns of `x` with the trained `β`.
    ///
    /// # Errors
    /// - [`OptError::ModelNotTrained`] before training.
    /// - [`OptError::DimensionMismatch`] if `x` has the wrong number of rows.
    pub fn predict(&self, x: ArrayView2<f64>) -> OptResult<Array1<f64>> {
        predict(x, self.beta()?.view())
    }

    /// Misclassification percentage of the trained `β` on `(x, y)`.
    ///
    /// # Errors
    /// - [`OptError::ModelNotTrained`] before training.
    /// - Shape errors from [`misclassification_error`].
    pub fn misclassification_error(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> OptResult<f64> {
        misclassification_error(x, y, self.beta()?.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::{
        accelerated::traits::{LineSearchOptions, Termination},
        errors::ErrorKind,
    };
    use approx::assert_relative_eq;
    use ndarray::array;
    use std::f64::consts::LN_2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - End-to-end training on the separable 4-point toy problem.
    // - Immediate convergence with a loose tolerance (empty cost history).
    // - Iteration cap reporting and history shapes.
    // - Determinism, untrained access and constructor validation.
    // - Numerical failures at the step-size stage leaving no outcome.
    // -------------------------------------------------------------------------

    fn toy_x() -> Array2<f64> {
        array![[1.0, 2.0, -1.0, -2.0], [1.0, 2.0, -1.0, -2.0]]
    }

    fn toy_y() -> Array1<f64> {
        array![1.0, 1.0, -1.0, -1.0]
    }

    #[test]
    // Purpose
    // -------
    // The separable toy problem is solved and classified perfectly.
    //
    // Given
    // -----
    // - Columns (1,1), (2,2) labeled +1 and (-1,-1), (-2,-2) labeled -1.
    // - λ = 0.01, ε = 1e-4, max_iterations = 500.
    //
    // Expect
    // ------
    // - Converged with 0% error, symmetric β with positive entries.
    // - Initial learning rate 1 / (5 + 0.01).
    // - Cost history starts at ln 2, ends lower, and
    //   `beta_history` has one more column than the cost history.
    fn toy_problem_trains_to_zero_error() {
        let mut model = LogisticRegression::new(toy_x(), toy_y(), 0.01, 1e-4, 500).unwrap();

        let outcome = model.train().unwrap().clone();

        assert_eq!(outcome.termination, Termination::Converged);
        assert_relative_eq!(outcome.init_learning_rate, 1.0 / 5.01, epsilon = 1e-12);
        assert!(outcome.beta[0] > 0.0);
        assert_relative_eq!(outcome.beta[0], outcome.beta[1], epsilon = 1e-12);
        let costs = &outcome.cost_history;
        assert_relative_eq!(costs[0], LN_2, epsilon = 1e-12);
        assert!(costs[costs.len() - 1] < costs[0]);
        assert_eq!(outcome.beta_history.ncols(), costs.len() + 1);
        assert!(outcome.beta_history.column(0).iter().all(|&b| b == 0.0));
        assert_eq!(model.misclassification_error(toy_x().view(), toy_y().view()), Ok(0.0));
        assert_eq!(model.predict(toy_x().view()).unwrap(), toy_y());
    }

    #[test]
    // Purpose
    // -------
    // The first few accelerated iterations decrease the recorded cost.
    //
    // Expect
    // ------
    // - cost_history[k + 1] ≤ cost_history[k] for the first 10 entries.
    fn early_cost_history_is_non_increasing() {
        let mut model = LogisticRegression::new(toy_x(), toy_y(), 0.01, 1e-4, 500).unwrap();

        let costs = model.train().unwrap().cost_history.clone();

        assert!(costs.len() > 10);
        for k in 0..10 {
            assert!(costs[k + 1] <= costs[k], "cost increased at {k}: {costs:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // A loose tolerance converges before any cost is recorded.
    //
    // Given
    // -----
    // - ε = 10 (‖∇obj(0)‖ ≈ 1.06), max_iterations = 1.
    //
    // Expect
    // ------
    // - Converged, empty cost history, β = 0, single-column β history.
    fn loose_tolerance_converges_at_iteration_zero() {
        let mut model = LogisticRegression::new(toy_x(), toy_y(), 0.01, 10.0, 1).unwrap();

        let outcome = model.train().unwrap();

        assert!(outcome.converged());
        assert!(outcome.cost_history.is_empty());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(outcome.beta, Beta::zeros(2));
        assert_eq!(outcome.beta_history.dim(), (2, 1));
    }

    #[test]
    // Purpose
    // -------
    // A binding iteration cap is reported as `MaxIterReached`.
    //
    // Expect
    // ------
    // - Exactly 3 recorded costs and 4 β-history columns.
    fn iteration_cap_is_reported() {
        let mut model = LogisticRegression::new(toy_x(), toy_y(), 0.01, 1e-10, 3).unwrap();

        let outcome = model.train().unwrap();

        assert_eq!(outcome.termination, Termination::MaxIterReached);
        assert_eq!(outcome.cost_history.len(), 3);
        assert_eq!(outcome.beta_history.ncols(), 4);
    }

    #[test]
    // Purpose
    // -------
    // Training is deterministic: identical inputs give identical outputs.
    fn training_is_deterministic() {
        let mut a = LogisticRegression::new(toy_x(), toy_y(), 0.05, 1e-6, 200).unwrap();
        let mut b = a.clone();

        let beta_a = a.train().unwrap().beta.clone();
        let beta_b = b.train().unwrap().beta.clone();
        let beta_a_again = a.train().unwrap().beta.clone();

        assert_eq!(beta_a, beta_b);
        assert_eq!(beta_a, beta_a_again);
    }

    #[test]
    // Purpose
    // -------
    // Accessors fail cleanly before training.
    fn untrained_model_reports_not_trained() {
        let model = LogisticRegression::new(toy_x(), toy_y(), 0.01, 1e-4, 10).unwrap();

        assert_eq!(model.beta().err(), Some(OptError::ModelNotTrained));
        assert_eq!(model.cost_history().err(), Some(OptError::ModelNotTrained));
        assert_eq!(model.predict(toy_x().view()).err(), Some(OptError::ModelNotTrained));
    }

    #[test]
    // Purpose
    // -------
    // Constructors reject invalid hyperparameters and data.
    fn constructors_validate_inputs() {
        assert!(matches!(
            LogisticRegression::new(toy_x(), toy_y(), -0.1, 1e-4, 10),
            Err(OptError::InvalidLambda { .. })
        ));
        assert!(matches!(
            LogisticRegression::new(toy_x(), toy_y(), 0.1, 0.0, 10),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            LogisticRegression::new(toy_x(), toy_y(), 0.1, 1e-4, 0),
            Err(OptError::InvalidMaxIter { .. })
        ));
        assert!(matches!(
            LogisticRegression::new(toy_x(), array![1.0, 1.0], 0.1, 1e-4, 10),
            Err(OptError::DimensionMismatch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // An all-zero feature matrix with λ = 0 has no usable step size.
    fn degenerate_curvature_fails_training() {
        let data = LabeledData::new(Array2::zeros((2, 3)), array![1.0, -1.0, 1.0]).unwrap();
        let mut model = LogisticRegression::with_options(data, 0.0, AGDOptions::default()).unwrap();

        let err = model.train().unwrap_err();

        assert_eq!(err, OptError::DegenerateCurvature { bound: 0.0 });
        assert_eq!(model.outcome().err(), Some(OptError::ModelNotTrained));
    }

    #[test]
    // Purpose
    // -------
    // Features large enough to overflow the Gram matrix abort training at the
    // step-size stage.
    //
    // Given
    // -----
    // - Finite X = [[1e200, -1e200, 1], [1e200, 1e200, -1]], λ = 0.01.
    //
    // Expect
    // ------
    // - `train` fails with a `Numerical` error and no outcome is stored.
    fn overflowing_features_fail_training() {
        let x = array![[1e200, -1e200, 1.0], [1e200, 1e200, -1.0]];
        let mut model = LogisticRegression::new(x, array![1.0, -1.0, 1.0], 0.01, 1e-4, 50).unwrap();

        let err = model.train().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Numerical);
        assert_eq!(model.outcome().err(), Some(OptError::ModelNotTrained));
    }

    #[test]
    // Purpose
    // -------
    // Custom line-search constants flow through `with_options`.
    fn with_options_accepts_custom_line_search() {
        let data = LabeledData::new(toy_x(), toy_y()).unwrap();
        let options = AGDOptions::new(
            Tolerances::new(1e-4, 500).unwrap(),
            LineSearchOptions::new(0.3, 0.5, 50).unwrap(),
            false,
        );
        let mut model = LogisticRegression::with_options(data, 0.01, options).unwrap();

        model.train().unwrap();

        assert_eq!(model.options().line_search.gamma, 0.5);
        assert_eq!(model.misclassification_error(toy_x().view(), toy_y().view()), Ok(0.0));
    }
}
