//! Sequential coordinate descent.
//!
//! Each sweep visits the selected coordinates in order and replaces each
//! one with the value proposed by the univariate update, so later
//! coordinates see the values already updated earlier in the same sweep
//! (Gauss-Seidel order).

use crate::{algorithm::Algorithm, modsel_function::ModselFunction};
use log::trace;
use modsel_core::{
    error::OptimizerResult,
    optimizer::{ConvergenceState, OptimizationResult},
    types::{Iterate, Scalar},
    update::UnivariateUpdate,
};
use num_traits::Float;
use std::time::Instant;

impl<'a, T: Scalar, A> ModselFunction<'a, T, A> {
    /// Sequential coordinate descent tracking the objective.
    ///
    /// After every sweep the objective is evaluated once. The run stops
    /// when the sweep cap is reached, when a sweep decreases the objective
    /// by no more than the function tolerance, or when no coordinate moved
    /// by more than the parameter tolerance.
    ///
    /// Requires an objective and a univariate update.
    pub fn cda(&self, initial: &Iterate<T>) -> OptimizerResult<OptimizationResult<T>> {
        let algorithm = Algorithm::Cda;
        let objective = self.objective_for(algorithm)?;
        let update = self.update_for(algorithm)?;
        self.prepare(algorithm, initial)?;

        let start = Instant::now();
        let mut theta = initial.clone();
        let mut value = objective.evaluate(&theta, self.selection)?;
        let mut evaluations = 1;
        let mut state = ConvergenceState::new();

        while state.should_continue(&self.config, true) {
            state.parameter_delta = self.sequential_sweep(update, &mut theta)?;

            let new_value = objective.evaluate(&theta, self.selection)?;
            evaluations += 1;
            state.function_delta = value - new_value;
            value = new_value;
            state.iteration += 1;

            trace!(
                "{}: sweep {} value={} fdelta={} thdelta={}",
                algorithm,
                state.iteration,
                value,
                state.function_delta,
                state.parameter_delta
            );
        }

        Ok(self.finish(algorithm, theta, Some(value), &state, evaluations, start))
    }

    /// Sequential coordinate descent without evaluating the objective.
    ///
    /// Same sweeps as [`cda`](Self::cda), but stopping depends only on the
    /// sweep cap and the parameter tolerance. The result carries no value.
    ///
    /// Requires a univariate update only.
    pub fn cda_untracked(&self, initial: &Iterate<T>) -> OptimizerResult<OptimizationResult<T>> {
        let algorithm = Algorithm::CdaUntracked;
        let update = self.update_for(algorithm)?;
        self.prepare(algorithm, initial)?;

        let start = Instant::now();
        let mut theta = initial.clone();
        let mut state = ConvergenceState::new();

        while state.should_continue(&self.config, false) {
            state.parameter_delta = self.sequential_sweep(update, &mut theta)?;
            state.iteration += 1;

            trace!(
                "{}: sweep {} thdelta={}",
                algorithm,
                state.iteration,
                state.parameter_delta
            );
        }

        Ok(self.finish(algorithm, theta, None, &state, 0, start))
    }

    /// Updates every coordinate in place, returning the largest change.
    fn sequential_sweep(
        &self,
        update: &dyn UnivariateUpdate<T>,
        theta: &mut Iterate<T>,
    ) -> OptimizerResult<T> {
        let mut max_change = T::zero();
        for j in 0..theta.len() {
            let new_value = update.update(j, theta, self.selection)?;
            max_change = <T as Float>::max(max_change, <T as Float>::abs(new_value - theta[j]));
            theta[j] = new_value;
        }
        Ok(max_change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use modsel_core::{
        objective::{CountingObjective, Objective},
        optimizer::TerminationReason,
        selection::CoordinateSelection,
    };

    /// (th0 - 1)^2 + (th1 - th0)^2, coupled so that sweep order matters.
    #[derive(Debug)]
    struct Chain;

    impl Objective<f64> for Chain {
        type Aux = ();

        fn evaluate(&self, th: &Iterate<f64>, _: &CoordinateSelection) -> OptimizerResult<f64> {
            Ok((th[0] - 1.0).powi(2) + (th[1] - th[0]).powi(2))
        }

        fn evaluate_with_aux(
            &self,
            th: &Iterate<f64>,
            sel: &CoordinateSelection,
        ) -> OptimizerResult<(f64, ())> {
            Ok((self.evaluate(th, sel)?, ()))
        }
    }

    fn chain_minimizer(j: usize, th: &Iterate<f64>, _: &CoordinateSelection) -> OptimizerResult<f64> {
        Ok(match j {
            0 => (1.0 + th[1]) / 2.0,
            _ => th[0],
        })
    }

    #[test]
    fn test_gauss_seidel_order() {
        let selection = CoordinateSelection::full(2);
        let update = chain_minimizer;
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&Chain)
            .with_update(&update)
            .with_config(modsel_core::config::ModselConfig::new().with_max_iterations(1));

        let result = optimizer.cda(&Iterate::from_vec(vec![0.0, 0.0])).unwrap();

        // th1 is updated from the new th0 = 0.5 within the same sweep.
        assert_relative_eq!(result.point[0], 0.5);
        assert_relative_eq!(result.point[1], 0.5);
        assert_relative_eq!(result.value.unwrap(), 0.25);
        assert_eq!(result.termination_reason, TerminationReason::MaxIterations);
    }

    #[test]
    fn test_untracked_never_evaluates() {
        let selection = CoordinateSelection::full(2);
        let objective = CountingObjective::new(Chain);
        let update = chain_minimizer;
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&objective)
            .with_update(&update);

        let result = optimizer
            .cda_untracked(&Iterate::from_vec(vec![0.0, 0.0]))
            .unwrap();

        assert_eq!(objective.counts().total(), 0);
        assert_eq!(result.value, None);
        assert_eq!(result.function_evaluations, 0);
        assert_eq!(result.termination_reason, TerminationReason::ParameterTolerance);
        assert_relative_eq!(result.point[0], 1.0, epsilon = 1e-3);
        assert_relative_eq!(result.point[1], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_tracked_evaluates_once_per_sweep() {
        let selection = CoordinateSelection::full(2);
        let objective = CountingObjective::new(Chain);
        let update = chain_minimizer;
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&objective)
            .with_update(&update);

        let result = optimizer.cda(&Iterate::from_vec(vec![0.0, 0.0])).unwrap();

        assert_eq!(objective.counts().full, result.iterations + 1);
        assert_eq!(result.function_evaluations, result.iterations + 1);
        assert!(result.converged);
    }

    #[test]
    fn test_empty_selection() {
        let selection = CoordinateSelection::default();
        let update = chain_minimizer;
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&Chain)
            .with_update(&update);

        let result = optimizer.cda_untracked(&Iterate::zeros(0)).unwrap();
        assert_eq!(result.iterations, 1);
        assert_eq!(result.point.len(), 0);
    }
}
