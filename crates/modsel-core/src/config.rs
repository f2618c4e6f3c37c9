//! Run parameters shared by every coordinate descent algorithm.

use crate::{
    error::{OptimizerError, OptimizerResult},
    types::{constants, Scalar},
};
use num_traits::Float;

/// Configuration for a coordinate descent run.
///
/// These are properties of the optimizer instance rather than of a single
/// call, and apply to whichever algorithm is invoked next.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModselConfig<T: Scalar> {
    /// Maximum number of outer sweeps
    pub max_iterations: usize,
    /// Stop once a sweep improves the objective by no more than this
    pub function_tolerance: T,
    /// Stop once no coordinate moves by more than this within a sweep
    pub parameter_tolerance: T,
    /// Number of step attempts per Newton line search (the raw step counts as one)
    pub max_line_search_steps: usize,
}

impl<T: Scalar> Default for ModselConfig<T> {
    fn default() -> Self {
        Self {
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            function_tolerance: T::DEFAULT_FUNCTION_TOLERANCE,
            parameter_tolerance: T::DEFAULT_PARAMETER_TOLERANCE,
            max_line_search_steps: constants::DEFAULT_MAX_LINE_SEARCH_STEPS,
        }
    }
}

impl<T: Scalar> ModselConfig<T> {
    /// Create a new configuration with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of outer sweeps
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the function-value tolerance
    pub fn with_function_tolerance(mut self, tol: T) -> Self {
        self.function_tolerance = tol;
        self
    }

    /// Set the parameter-change tolerance
    pub fn with_parameter_tolerance(mut self, tol: T) -> Self {
        self.parameter_tolerance = tol;
        self
    }

    /// Set the number of step attempts per Newton line search
    pub fn with_max_line_search_steps(mut self, steps: usize) -> Self {
        self.max_line_search_steps = steps;
        self
    }

    /// Checks that tolerances are non-negative numbers.
    ///
    /// Zero line search steps is accepted: Newton sweeps then move nothing.
    pub fn validate(&self) -> OptimizerResult<()> {
        check_tolerance("function_tolerance", self.function_tolerance)?;
        check_tolerance("parameter_tolerance", self.parameter_tolerance)
    }
}

fn check_tolerance<T: Scalar>(parameter: &str, tol: T) -> OptimizerResult<()> {
    if <T as Float>::is_nan(tol) || tol < T::zero() {
        return Err(OptimizerError::invalid_configuration(
            "tolerance must be a non-negative number",
            parameter,
            tol.to_string(),
        ));
    }
    Ok(())
}
