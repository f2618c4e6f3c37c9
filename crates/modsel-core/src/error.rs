//! Error types for coordinate-wise optimization.
//!
//! Only configuration problems are errors: a missing evaluator or update
//! strategy, invalid run parameters, or an initial iterate that does not
//! match the selection. A step that fails to improve the objective is part
//! of normal operation and never surfaces here. Errors raised by
//! caller-supplied evaluators are carried through unchanged.

use thiserror::Error;

/// Errors that can occur when configuring or running an optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizerError {
    /// No objective evaluator bound for an algorithm that needs one.
    #[error("To run {algorithm} you need to specify an objective evaluator")]
    MissingObjective {
        /// Name of the requested algorithm
        algorithm: String,
    },

    /// No closed-form univariate update bound for an algorithm that needs one.
    #[error("To run {algorithm} you need to specify a univariate update")]
    MissingUpdate {
        /// Name of the requested algorithm
        algorithm: String,
    },

    /// No gradient/curvature strategy bound for a Newton algorithm.
    #[error("To run {algorithm} you need to specify a gradient/curvature strategy")]
    MissingGradHess {
        /// Name of the requested algorithm
        algorithm: String,
    },

    /// Invalid optimizer configuration.
    ///
    /// This error occurs when the optimizer is configured with invalid
    /// parameters (e.g., negative tolerance, zero line-search steps).
    #[error("Invalid optimizer configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the configuration error
        reason: String,
        /// Name of the invalid parameter
        parameter: String,
        /// Value that was invalid
        value: String,
    },

    /// Dimension mismatch between the iterate and the selection.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// The coordinate selection is not valid for the parameter vector.
    #[error("Invalid coordinate selection: {reason}")]
    InvalidSelection {
        /// Description of why the selection is invalid
        reason: String,
    },

    /// A caller-supplied evaluator or strategy reported a failure.
    #[error("Evaluation failed: {reason}")]
    Evaluation {
        /// Description supplied by the evaluator
        reason: String,
    },
}

impl OptimizerError {
    /// Create a MissingObjective error for the named algorithm.
    pub fn missing_objective<S: Into<String>>(algorithm: S) -> Self {
        Self::MissingObjective {
            algorithm: algorithm.into(),
        }
    }

    /// Create a MissingUpdate error for the named algorithm.
    pub fn missing_update<S: Into<String>>(algorithm: S) -> Self {
        Self::MissingUpdate {
            algorithm: algorithm.into(),
        }
    }

    /// Create a MissingGradHess error for the named algorithm.
    pub fn missing_grad_hess<S: Into<String>>(algorithm: S) -> Self {
        Self::MissingGradHess {
            algorithm: algorithm.into(),
        }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2, S3>(reason: S1, parameter: S2, value: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self::InvalidConfiguration {
            reason: reason.into(),
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an InvalidSelection error with a custom reason.
    pub fn invalid_selection<S: Into<String>>(reason: S) -> Self {
        Self::InvalidSelection {
            reason: reason.into(),
        }
    }

    /// Create an Evaluation error with a custom reason.
    pub fn evaluation<S: Into<String>>(reason: S) -> Self {
        Self::Evaluation {
            reason: reason.into(),
        }
    }

    /// Returns true for errors raised before any iteration because the
    /// optimizer was not set up for the requested run.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::Evaluation { .. })
    }
}

/// Result type alias for optimizer operations.
pub type OptimizerResult<T> = std::result::Result<T, OptimizerError>;
