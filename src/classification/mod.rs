//! classification — L2-regularized logistic regression on ±1 labels.
//!
//! Purpose
//! -------
//! Provide the model layer on top of `optimization::accelerated`: validated
//! training data, the penalized logistic objective, a trainable model, and
//! prediction / error-rate utilities for a coefficient vector.
//!
//! Key behaviors
//! -------------
//! - [`LabeledData`] validates a `d × n` feature matrix and ±1 labels.
//! - [`L2Logistic`] implements `SmoothObjective` with an analytic gradient
//!   and the spectral curvature bound `λ_max(XXᵀ/n) + λ`.
//! - [`LogisticRegression`] owns data and hyperparameters, trains once per
//!   `train` call and caches the `AGDOutcome`.
//! - [`predict`] and [`misclassification_error`] work with any `β`, trained
//!   or not.
//!
//! Conventions
//! -----------
//! - Examples are columns of `X`.
//! - Misclassification is reported as a percentage.

pub mod data;
pub mod evaluate;
pub mod model;
pub mod objective;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::LabeledData;
pub use self::evaluate::{misclassification_error, predict};
pub use self::model::LogisticRegression;
pub use self::objective::L2Logistic;
