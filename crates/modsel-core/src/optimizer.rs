//! Run state and results shared by the coordinate descent algorithms.
//!
//! # Key Components
//!
//! - **ConvergenceState**: per-run counters driving the outer loop
//! - **TerminationReason**: which stopping condition ended a run
//! - **OptimizationResult**: final iterate, objective value and run metadata

use crate::{config::ModselConfig, types::{Iterate, Scalar}};
use num_traits::Float;
use std::fmt;
use std::time::Duration;

/// Reason for termination of a coordinate descent run.
///
/// None of these is a failure: the returned iterate is always the last
/// accepted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// The last sweep improved the objective by no more than the function tolerance
    FunctionTolerance,
    /// No coordinate moved by more than the parameter tolerance in the last sweep
    ParameterTolerance,
    /// The sweep cap was reached
    MaxIterations,
}

impl TerminationReason {
    /// Returns true when a tolerance, rather than the sweep cap, ended the run.
    pub fn is_converged(self) -> bool {
        !matches!(self, Self::MaxIterations)
    }
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FunctionTolerance => "function tolerance reached",
            Self::ParameterTolerance => "parameter tolerance reached",
            Self::MaxIterations => "maximum iterations reached",
        };
        f.write_str(name)
    }
}

/// Per-run convergence counters.
///
/// Created fresh at the start of every algorithm invocation. Both deltas
/// start at infinity so that the first sweep always runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceState<T: Scalar> {
    /// Number of completed sweeps
    pub iteration: usize,
    /// Decrease of the objective credited to the latest sweep(s)
    pub function_delta: T,
    /// Largest coordinate change in the latest accepted sweep
    pub parameter_delta: T,
}

impl<T: Scalar> Default for ConvergenceState<T> {
    fn default() -> Self {
        Self {
            iteration: 0,
            function_delta: <T as Float>::infinity(),
            parameter_delta: <T as Float>::infinity(),
        }
    }
}

impl<T: Scalar> ConvergenceState<T> {
    /// Creates a fresh state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether another sweep should run.
    ///
    /// With `track_function` false only the sweep cap and the parameter
    /// tolerance are consulted.
    pub fn should_continue(&self, config: &ModselConfig<T>, track_function: bool) -> bool {
        self.iteration < config.max_iterations
            && (!track_function || self.function_delta > config.function_tolerance)
            && self.parameter_delta > config.parameter_tolerance
    }

    /// Explains why [`should_continue`](Self::should_continue) returned false.
    ///
    /// Tolerances take precedence over the sweep cap when both hold.
    pub fn termination_reason(
        &self,
        config: &ModselConfig<T>,
        track_function: bool,
    ) -> TerminationReason {
        if track_function && !(self.function_delta > config.function_tolerance) {
            TerminationReason::FunctionTolerance
        } else if !(self.parameter_delta > config.parameter_tolerance) {
            TerminationReason::ParameterTolerance
        } else {
            TerminationReason::MaxIterations
        }
    }
}

/// Result of a coordinate descent run.
#[derive(Debug, Clone)]
pub struct OptimizationResult<T: Scalar> {
    /// The final iterate, one value per selected coordinate
    pub point: Iterate<T>,

    /// Objective value at `point`; `None` for runs that never evaluate it
    pub value: Option<T>,

    /// Number of sweeps performed
    pub iterations: usize,

    /// Number of objective evaluations, full and incremental
    pub function_evaluations: usize,

    /// Total optimization time
    pub duration: Duration,

    /// Reason for termination
    pub termination_reason: TerminationReason,

    /// Whether a tolerance ended the run
    pub converged: bool,
}

impl<T: Scalar> OptimizationResult<T> {
    /// Creates a new optimization result.
    pub fn new(
        point: Iterate<T>,
        value: Option<T>,
        iterations: usize,
        duration: Duration,
        termination_reason: TerminationReason,
    ) -> Self {
        Self {
            point,
            value,
            iterations,
            function_evaluations: 0,
            duration,
            termination_reason,
            converged: termination_reason.is_converged(),
        }
    }

    /// Sets the function evaluation count.
    pub fn with_function_evaluations(mut self, count: usize) -> Self {
        self.function_evaluations = count;
        self
    }
}
