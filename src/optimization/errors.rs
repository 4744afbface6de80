//! optimization::errors — unified error surface for training and evaluation.
//!
//! Every fallible routine in the crate returns [`OptResult<T>`]. Variants are
//! grouped by the stage that raises them; [`OptError::kind`] folds them into
//! the four coarse [`ErrorKind`]s callers usually branch on (shape problems,
//! numerical breakdown, invalid input, backend failures).
//!
//! Errors raised inside the argmin executor travel as `argmin::core::Error`
//! (an `anyhow` error). The `From<Error>` impl first recovers an `OptError`
//! that was boxed on the way in, then maps argmin's own error enum, and only
//! then falls back to [`OptError::BackendError`].
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

/// Coarse classification of [`OptError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Shapes of `X`, `y` and `β` are incompatible, or the data is empty.
    Dimension,
    /// A linear-algebra routine or objective evaluation broke down.
    Numerical,
    /// A hyperparameter, label, feature or call order was rejected.
    InvalidInput,
    /// Failure reported by the argmin backend.
    Backend,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Data ----
    /// Two containers disagree on a shared dimension.
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// Feature matrix has no rows or no columns.
    EmptyData {
        rows: usize,
        cols: usize,
    },
    /// Feature entries need to be finite.
    NonFiniteFeature {
        row: usize,
        col: usize,
        value: f64,
    },
    /// Labels must be exactly -1.0 or +1.0.
    InvalidLabel {
        index: usize,
        value: f64,
    },

    // ---- Options ----
    /// Regularization strength must be finite and non-negative.
    InvalidLambda {
        value: f64,
        reason: &'static str,
    },
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// Line-search constants must lie in the open unit interval.
    InvalidLineSearchParam {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    // ---- Objective ----
    /// Implies that finite differences should be used.
    GradientNotImplemented,
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },
    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },
    /// Objective returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Curvature bound ----
    /// Symmetric eigen-decomposition did not converge.
    EigenDecompositionFailed {
        dim: usize,
    },
    /// Largest eigenvalue came back NaN or infinite.
    NonFiniteEigenvalue {
        value: f64,
    },
    /// Curvature bound is not strictly positive, so no step size exists.
    DegenerateCurvature {
        bound: f64,
    },

    // ---- Solver / model state ----
    /// Solver state was read before `init` populated it.
    SolverNotInitialized,
    /// Executor stopped for a reason other than convergence or the cap.
    UnexpectedTermination {
        status: String,
    },
    /// Model accessor called before `train`.
    ModelNotTrained,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl OptError {
    /// Classify this error into one of the coarse [`ErrorKind`]s.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OptError::DimensionMismatch { .. }
            | OptError::EmptyData { .. }
            | OptError::GradientDimMismatch { .. } => ErrorKind::Dimension,

            OptError::EigenDecompositionFailed { .. }
            | OptError::NonFiniteEigenvalue { .. }
            | OptError::DegenerateCurvature { .. }
            | OptError::NonFiniteCost { .. }
            | OptError::InvalidGradient { .. } => ErrorKind::Numerical,

            OptError::NonFiniteFeature { .. }
            | OptError::InvalidLabel { .. }
            | OptError::InvalidLambda { .. }
            | OptError::InvalidTolGrad { .. }
            | OptError::InvalidMaxIter { .. }
            | OptError::InvalidLineSearchParam { .. }
            | OptError::GradientNotImplemented
            | OptError::ModelNotTrained => ErrorKind::InvalidInput,

            OptError::SolverNotInitialized
            | OptError::UnexpectedTermination { .. }
            | OptError::InvalidParameter { .. }
            | OptError::NotImplemented { .. }
            | OptError::NotInitialized { .. }
            | OptError::ConditionViolated { .. }
            | OptError::PotentialBug { .. }
            | OptError::BackendError { .. }
            | OptError::UnknownError => ErrorKind::Backend,
        }
    }
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Data ----
            OptError::DimensionMismatch { what, expected, found } => {
                write!(f, "Dimension mismatch for {what}: expected {expected}, found {found}")
            }
            OptError::EmptyData { rows, cols } => {
                write!(f, "Feature matrix is empty: shape ({rows}, {cols})")
            }
            OptError::NonFiniteFeature { row, col, value } => {
                write!(f, "Non-finite feature at ({row}, {col}): {value}")
            }
            OptError::InvalidLabel { index, value } => {
                write!(f, "Invalid label at index {index}: {value}, must be -1 or +1")
            }

            // ---- Options ----
            OptError::InvalidLambda { value, reason } => {
                write!(f, "Invalid regularization strength {value}: {reason}")
            }
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::InvalidLineSearchParam { name, value, reason } => {
                write!(f, "Invalid line-search parameter {name} = {value}: {reason}")
            }

            // ---- Objective ----
            OptError::GradientNotImplemented => {
                write!(f, "Analytic gradient not implemented")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Curvature bound ----
            OptError::EigenDecompositionFailed { dim } => {
                write!(f, "Symmetric eigen-decomposition of a {dim}x{dim} Gram matrix did not converge")
            }
            OptError::NonFiniteEigenvalue { value } => {
                write!(f, "Largest eigenvalue is not finite: {value}")
            }
            OptError::DegenerateCurvature { bound } => {
                write!(f, "Curvature bound {bound} is not strictly positive")
            }

            // ---- Solver / model state ----
            OptError::SolverNotInitialized => {
                write!(f, "Solver state accessed before initialization")
            }
            OptError::UnexpectedTermination { status } => {
                write!(f, "Optimizer terminated unexpectedly: {status}")
            }
            OptError::ModelNotTrained => {
                write!(f, "Model has not been trained yet")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast::<ArgminError>() {
            Ok(argmin_err) => match argmin_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl std::convert::From<OptError> for pyo3::PyErr {
    fn from(err: OptError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
