//! The optimizer core.
//!
//! A [`ModselFunction`] is bound to a coordinate selection, a run
//! configuration, an objective and the update strategies its algorithms
//! need. Each algorithm entry point takes an initial iterate and returns
//! the final one; all scratch buffers live for the duration of one call.
//!
//! # Example
//!
//! ```rust
//! use modsel_core::prelude::*;
//! use modsel_optim::ModselFunction;
//!
//! #[derive(Debug)]
//! struct Squares;
//!
//! impl Objective<f64> for Squares {
//!     type Aux = ();
//!
//!     fn evaluate(&self, th: &Iterate<f64>, _: &CoordinateSelection) -> OptimizerResult<f64> {
//!         Ok((th[0] - 3.0).powi(2) + (th[1] + 2.0).powi(2))
//!     }
//!
//!     fn evaluate_with_aux(
//!         &self,
//!         th: &Iterate<f64>,
//!         sel: &CoordinateSelection,
//!     ) -> OptimizerResult<(f64, ())> {
//!         Ok((self.evaluate(th, sel)?, ()))
//!     }
//! }
//!
//! let minimizer = |j: usize, _: &Iterate<f64>, _: &CoordinateSelection| -> OptimizerResult<f64> {
//!     Ok([3.0, -2.0][j])
//! };
//!
//! let selection = CoordinateSelection::new(vec![0, 1]);
//! let optimizer = ModselFunction::<f64>::new(&selection)
//!     .with_objective(&Squares)
//!     .with_update(&minimizer);
//!
//! let result = optimizer.cda(&Iterate::from_vec(vec![0.0, 0.0])).unwrap();
//! assert_eq!(result.point, Iterate::from_vec(vec![3.0, -2.0]));
//! assert_eq!(result.value, Some(0.0));
//! ```

use crate::algorithm::Algorithm;
use log::debug;
use modsel_core::{
    config::ModselConfig,
    error::{OptimizerError, OptimizerResult},
    objective::Objective,
    optimizer::{ConvergenceState, OptimizationResult},
    selection::CoordinateSelection,
    types::{Iterate, Scalar},
    update::{GradHessUnivariate, UnivariateUpdate},
};
use num_traits::Float;
use std::fmt;
use std::time::Instant;

/// Coordinate descent optimizer over a selected subset of parameters.
///
/// The objective is minimized. `A` is the auxiliary evaluation state type
/// of the bound objective, `()` until one is bound.
pub struct ModselFunction<'a, T: Scalar, A = ()> {
    pub(crate) selection: &'a CoordinateSelection,
    pub(crate) config: ModselConfig<T>,
    objective: Option<&'a dyn Objective<T, Aux = A>>,
    update: Option<&'a dyn UnivariateUpdate<T>>,
    grad_hess: Option<&'a dyn GradHessUnivariate<T>>,
}

impl<'a, T: Scalar> ModselFunction<'a, T> {
    /// Creates an optimizer over `selection` with the default configuration
    /// and nothing bound.
    pub fn new(selection: &'a CoordinateSelection) -> Self {
        Self {
            selection,
            config: ModselConfig::default(),
            objective: None,
            update: None,
            grad_hess: None,
        }
    }
}

impl<'a, T: Scalar, A> ModselFunction<'a, T, A> {
    /// Binds the objective evaluator, replacing any previous one.
    pub fn with_objective<O>(self, objective: &'a O) -> ModselFunction<'a, T, O::Aux>
    where
        O: Objective<T>,
    {
        ModselFunction {
            selection: self.selection,
            config: self.config,
            objective: Some(objective),
            update: self.update,
            grad_hess: self.grad_hess,
        }
    }

    /// Binds the closed-form univariate update.
    pub fn with_update(mut self, update: &'a dyn UnivariateUpdate<T>) -> Self {
        self.update = Some(update);
        self
    }

    /// Binds the gradient/curvature strategy used for Newton steps.
    pub fn with_grad_hess(mut self, grad_hess: &'a dyn GradHessUnivariate<T>) -> Self {
        self.grad_hess = Some(grad_hess);
        self
    }

    /// Replaces the run configuration.
    pub fn with_config(mut self, config: ModselConfig<T>) -> Self {
        self.config = config;
        self
    }

    /// The coordinate selection this optimizer works on.
    pub fn selection(&self) -> &CoordinateSelection {
        self.selection
    }

    /// Current run configuration.
    pub fn config(&self) -> &ModselConfig<T> {
        &self.config
    }

    /// Mutable access to the run configuration.
    pub fn config_mut(&mut self) -> &mut ModselConfig<T> {
        &mut self.config
    }

    /// Replaces the run configuration.
    pub fn set_config(&mut self, config: ModselConfig<T>) {
        self.config = config;
    }

    /// Runs the named algorithm from `initial`.
    pub fn run(
        &self,
        algorithm: Algorithm,
        initial: &Iterate<T>,
    ) -> OptimizerResult<OptimizationResult<T>> {
        match algorithm {
            Algorithm::Cda => self.cda(initial),
            Algorithm::CdaUntracked => self.cda_untracked(initial),
            Algorithm::BlockCda => self.block_cda(initial),
            Algorithm::CdaNewton => self.cda_newton(initial),
            Algorithm::BlockCdaNewton => self.block_cda_newton(initial),
        }
    }

    pub(crate) fn objective_for(
        &self,
        algorithm: Algorithm,
    ) -> OptimizerResult<&'a dyn Objective<T, Aux = A>> {
        self.objective
            .ok_or_else(|| OptimizerError::missing_objective(algorithm.name()))
    }

    pub(crate) fn update_for(
        &self,
        algorithm: Algorithm,
    ) -> OptimizerResult<&'a dyn UnivariateUpdate<T>> {
        self.update
            .ok_or_else(|| OptimizerError::missing_update(algorithm.name()))
    }

    pub(crate) fn grad_hess_for(
        &self,
        algorithm: Algorithm,
    ) -> OptimizerResult<&'a dyn GradHessUnivariate<T>> {
        self.grad_hess
            .ok_or_else(|| OptimizerError::missing_grad_hess(algorithm.name()))
    }

    /// Checks the configuration and the initial iterate before a run.
    pub(crate) fn prepare(&self, algorithm: Algorithm, initial: &Iterate<T>) -> OptimizerResult<()> {
        self.config.validate()?;
        if initial.len() != self.selection.len() {
            return Err(OptimizerError::dimension_mismatch(
                self.selection.len(),
                initial.len(),
            ));
        }
        debug!(
            "{}: starting on {} coordinates (max_iterations={}, ftol={}, thtol={}, max_steps={})",
            algorithm,
            initial.len(),
            self.config.max_iterations,
            self.config.function_tolerance,
            self.config.parameter_tolerance,
            self.config.max_line_search_steps,
        );
        Ok(())
    }

    /// Packs the final iterate into a result.
    pub(crate) fn finish(
        &self,
        algorithm: Algorithm,
        point: Iterate<T>,
        value: Option<T>,
        state: &ConvergenceState<T>,
        function_evaluations: usize,
        start: Instant,
    ) -> OptimizationResult<T> {
        let reason = state.termination_reason(&self.config, algorithm.tracks_objective());
        debug!(
            "{}: {} after {} sweeps, {} evaluations (value {:?})",
            algorithm, reason, state.iteration, function_evaluations, value
        );
        OptimizationResult::new(point, value, state.iteration, start.elapsed(), reason)
            .with_function_evaluations(function_evaluations)
    }
}

impl<T: Scalar, A> fmt::Debug for ModselFunction<'_, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModselFunction")
            .field("selection", self.selection)
            .field("config", &self.config)
            .field("objective", &self.objective)
            .field("update", &self.update.is_some())
            .field("grad_hess", &self.grad_hess.is_some())
            .finish()
    }
}

/// Largest absolute entrywise difference between two iterates.
pub(crate) fn max_abs_difference<T: Scalar>(a: &Iterate<T>, b: &Iterate<T>) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| <T as Float>::max(acc, <T as Float>::abs(x - y)))
}
