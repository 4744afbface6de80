//! Integration tests for logistic-regression training and evaluation.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from validated labeled data, through
//!   accelerated-gradient training, to prediction and misclassification
//!   rates.
//! - Exercise realistic datasets (separable with margin, overlapping
//!   classes with an intercept row) rather than the 4-point toy only.
//!
//! Coverage
//! --------
//! - `classification`:
//!   - `LogisticRegression::new` / `with_options`, `train`, `predict`,
//!     `misclassification_error`.
//!   - Free functions `predict` / `misclassification_error` on an arbitrary β.
//! - `optimization::accelerated`:
//!   - `minimize` on the logistic objective, with and without an analytic
//!     gradient (finite-difference fallback).
//!   - `AGDOutcome` bookkeeping (termination, histories, learning rate).
//!
//! Exclusions
//! ----------
//! - Low-level building blocks (line search, eigen bound, stable transforms)
//!   are covered by unit tests.
//! - Python bindings are exercised from the Python side.
use ndarray::{Array1, Array2};
use rust_logreg::{
    classification::{
        L2Logistic, LabeledData, LogisticRegression, misclassification_error,
        objective::{logistic_gradient, logistic_value},
        predict,
    },
    optimization::{
        accelerated::{AGDOptions, Beta, Cost, SmoothObjective, Termination, Tolerances, minimize},
        errors::{ErrorKind, OptError, OptResult},
    },
};

/// Purpose
/// -------
/// Two linearly separable clouds of 10 points each in 2-D.
///
/// Layout
/// ------
/// - Columns 0..10 are labeled +1 with first coordinate in [1, 2].
/// - Columns 10..20 are their reflections through the origin, labeled -1.
fn separable() -> (Array2<f64>, Array1<f64>) {
    let m = 20;
    let x = Array2::from_shape_fn((2, m), |(r, i)| {
        let sign = if i < 10 { 1.0 } else { -1.0 };
        match r {
            0 => sign * (1.0 + 0.25 * (i % 5) as f64),
            _ => sign * 0.5 + 0.6 * ((i % 4) as f64 - 1.5),
        }
    });
    let y = Array1::from_shape_fn(m, |i| if i < 10 { 1.0 } else { -1.0 });
    (x, y)
}

/// Purpose
/// -------
/// Forty points from two overlapping classes plus a constant intercept row.
///
/// Notes
/// -----
/// - Not separable: the optimum misclassifies a minority of points.
fn overlapping() -> (Array2<f64>, Array1<f64>) {
    let n = 40;
    let x = Array2::from_shape_fn((3, n), |(r, i)| {
        let t = i as f64;
        let odd = (i % 2) as f64;
        match r {
            0 => (0.7 * t).sin() * 2.0 + 1.5 * odd - 0.75,
            1 => (1.3 * t).cos() + odd - 0.5,
            _ => 1.0,
        }
    });
    let y = Array1::from_shape_fn(n, |i| if i % 2 == 1 { 1.0 } else { -1.0 });
    (x, y)
}

fn l2_norm(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

#[test]
// Purpose
// -------
// Separable data with a margin is classified perfectly after training.
//
// Given
// -----
// - 20 points in two reflected clouds, λ = 0.01, ε = 1e-5, 500 iterations.
//
// Expect
// ------
// - Converged; 0% training error via both the model and the free function.
// - `beta_history` is d × (iterations + 1) and starts at zero.
fn separable_data_is_classified_perfectly() {
    let (x, y) = separable();
    let mut model = LogisticRegression::new(x.clone(), y.clone(), 0.01, 1e-5, 500).unwrap();

    let outcome = model.train().unwrap().clone();

    assert_eq!(outcome.termination, Termination::Converged);
    assert_eq!(outcome.beta_history.dim(), (2, outcome.iterations + 1));
    assert_eq!(outcome.cost_history.len(), outcome.iterations);
    assert!(outcome.beta_history.column(0).iter().all(|&b| b == 0.0));
    assert_eq!(model.misclassification_error(x.view(), y.view()).unwrap(), 0.0);
    assert_eq!(misclassification_error(x.view(), y.view(), outcome.beta.view()).unwrap(), 0.0);
    assert_eq!(predict(x.view(), outcome.beta.view()).unwrap(), y);
}

#[test]
// Purpose
// -------
// On overlapping classes the trained β is a stationary point, and
// stronger regularization shrinks it.
//
// Given
// -----
// - 40 overlapping points with an intercept row, ε = 1e-6, 2000 iterations.
// - λ ∈ {0.001, 0.05, 0.5}.
//
// Expect
// ------
// - Every run converges with ‖∇obj(β)‖ < 1e-4 at the returned β.
// - Final recorded cost is below obj(0) = ln 2.
// - ‖β‖ strictly decreases as λ grows.
// - Training error is a minority (≤ 30%).
fn regularization_path_on_overlapping_data() {
    let (x, y) = overlapping();
    let mut norms = Vec::new();

    for lambda in [0.001, 0.05, 0.5] {
        let mut model = LogisticRegression::new(x.clone(), y.clone(), lambda, 1e-6, 2000).unwrap();
        let outcome = model.train().unwrap().clone();

        assert!(outcome.converged(), "λ = {lambda} did not converge");
        let grad = logistic_gradient(&outcome.beta, x.view(), y.view(), lambda);
        assert!(l2_norm(&grad) < 1e-4, "λ = {lambda}: ‖∇obj(β)‖ = {}", l2_norm(&grad));
        let last = outcome.cost_history[outcome.cost_history.len() - 1];
        assert!(last < std::f64::consts::LN_2);
        let error = model.misclassification_error(x.view(), y.view()).unwrap();
        assert!(error <= 30.0, "λ = {lambda}: error {error}%");
        norms.push(l2_norm(&outcome.beta));
    }

    assert!(norms[0] > norms[1] && norms[1] > norms[2], "norms not shrinking: {norms:?}");
}

#[test]
// Purpose
// -------
// The trained β is a local minimizer: coordinate perturbations never
// lower the objective.
fn trained_beta_is_a_local_minimizer() {
    let (x, y) = overlapping();
    let lambda = 0.05;
    let mut model = LogisticRegression::new(x.clone(), y.clone(), lambda, 1e-6, 2000).unwrap();
    let beta = model.train().unwrap().beta.clone();
    let best = logistic_value(&beta, x.view(), y.view(), lambda);

    for k in 0..beta.len() {
        for delta in [-1e-2, 1e-2] {
            let mut probe = beta.clone();
            probe[k] += delta;
            assert!(logistic_value(&probe, x.view(), y.view(), lambda) >= best);
        }
    }
}

/// Logistic objective that hides its analytic gradient, forcing the
/// optimizer's finite-difference fallback.
struct NoGradient(L2Logistic);

impl SmoothObjective for NoGradient {
    type Data = LabeledData;

    fn dim(&self, data: &LabeledData) -> usize {
        self.0.dim(data)
    }
    fn value(&self, beta: &Beta, data: &LabeledData) -> OptResult<Cost> {
        self.0.value(beta, data)
    }
    fn check(&self, beta: &Beta, data: &LabeledData) -> OptResult<()> {
        self.0.check(beta, data)
    }
    fn curvature_bound(&self, data: &LabeledData) -> OptResult<f64> {
        self.0.curvature_bound(data)
    }
}

#[test]
// Purpose
// -------
// The finite-difference gradient fallback reaches the same optimum as the
// analytic gradient.
//
// Given
// -----
// - Overlapping data, λ = 0.05, ε = 1e-6, 2000 iterations.
//
// Expect
// ------
// - Both runs converge; coefficients agree to 1e-4; same learning rate.
fn finite_difference_fallback_matches_analytic_gradient() {
    let (x, y) = overlapping();
    let data = LabeledData::new(x, y).unwrap();
    let objective = L2Logistic::new(0.05).unwrap();
    let opts = AGDOptions { tols: Tolerances::new(1e-6, 2000).unwrap(), ..Default::default() };

    let analytic = minimize(&objective, &data, &opts).unwrap();
    let numeric = minimize(&NoGradient(objective), &data, &opts).unwrap();

    assert!(analytic.converged() && numeric.converged());
    assert_eq!(analytic.init_learning_rate, numeric.init_learning_rate);
    for (a, b) in analytic.beta.iter().zip(numeric.beta.iter()) {
        assert!((a - b).abs() < 1e-4, "analytic {a} vs finite-difference {b}");
    }
}

#[test]
// Purpose
// -------
// A binding iteration cap yields a usable, partially trained model.
//
// Expect
// ------
// - `MaxIterReached`, exactly `max_iterations` recorded costs, and a
//   finite, non-zero β that predictions can use.
fn iteration_cap_returns_partial_model() {
    let (x, y) = overlapping();
    let mut model = LogisticRegression::new(x.clone(), y, 0.05, 1e-12, 5).unwrap();

    let outcome = model.train().unwrap();

    assert_eq!(outcome.termination, Termination::MaxIterReached);
    assert_eq!(outcome.cost_history.len(), 5);
    assert!(outcome.beta.iter().all(|b| b.is_finite()));
    assert!(l2_norm(&outcome.beta) > 0.0);
    assert_eq!(model.predict(x.view()).unwrap().len(), 40);
}

#[test]
// Purpose
// -------
// Invalid inputs surface as errors of the documented kind.
//
// Expect
// ------
// - Label-length mismatch → Dimension.
// - 0/1 labels and negative λ → InvalidInput.
// - Zero features with λ = 0 → Numerical at training time.
fn invalid_inputs_map_to_error_kinds() {
    let (x, y) = separable();

    let short = LogisticRegression::new(x.clone(), y.slice(ndarray::s![..5]).to_owned(), 0.1, 1e-4, 10);
    assert_eq!(short.unwrap_err().kind(), ErrorKind::Dimension);

    let zero_one = y.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 });
    let bad_labels = LogisticRegression::new(x.clone(), zero_one, 0.1, 1e-4, 10);
    assert_eq!(bad_labels.unwrap_err().kind(), ErrorKind::InvalidInput);

    let bad_lambda = LogisticRegression::new(x, y.clone(), -1.0, 1e-4, 10);
    assert!(matches!(bad_lambda, Err(OptError::InvalidLambda { .. })));

    let mut degenerate = LogisticRegression::new(Array2::zeros((2, 20)), y, 0.0, 1e-4, 10).unwrap();
    assert_eq!(degenerate.train().unwrap_err().kind(), ErrorKind::Numerical);
}
