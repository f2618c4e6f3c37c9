//! Core traits and types for coordinate-wise mode finding.
//!
//! This crate defines the contract between a coordinate descent optimizer
//! and its caller: the objective evaluator (with incremental
//! re-evaluation), the per-coordinate update rules, the coordinate
//! selection, and the run configuration and results.
//!
//! # Modules
//!
//! - [`config`]: Run parameters (sweep cap, tolerances, line search steps)
//! - [`error`]: Error types
//! - [`objective`]: Objective evaluator interface and evaluation counting
//! - [`optimizer`]: Convergence state, termination reasons and results
//! - [`selection`]: Coordinate selection
//! - [`types`]: Scalar trait, iterate alias and constants
//! - [`update`]: Univariate update and gradient/curvature interfaces

pub mod config;
pub mod error;
pub mod objective;
pub mod optimizer;
pub mod selection;
pub mod types;
pub mod update;

// Re-export commonly used items at the crate root
pub use error::{OptimizerError, OptimizerResult};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use modsel_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::ModselConfig;
    pub use crate::error::{OptimizerError, OptimizerResult};
    pub use crate::objective::{CountingObjective, EvaluationCounts, Objective};
    pub use crate::optimizer::{ConvergenceState, OptimizationResult, TerminationReason};
    pub use crate::selection::CoordinateSelection;
    pub use crate::types::{constants, Iterate, Scalar};
    pub use crate::update::{GradHessUnivariate, UnivariateUpdate};
}
