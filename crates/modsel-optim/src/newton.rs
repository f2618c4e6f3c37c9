//! Sequential coordinate descent with Newton steps.
//!
//! Each coordinate moves to `th[j] - 0.5^(k-1) * g[j] / H[j]`, where `k` is
//! the first attempt in `1..=max_line_search_steps` that strictly improves
//! the objective. Gradient and curvature for coordinate `j` are evaluated
//! after coordinates `0..j` have been updated in the same sweep.
//!
//! Trial points differ from the current iterate in one coordinate only,
//! so they are scored through [`Objective::evaluate_incremental`]. A
//! rejected trial is undone with a second incremental call that moves the
//! coordinate back, which keeps the auxiliary state in step with the
//! iterate. Each rejection therefore costs two incremental evaluations;
//! objectives relying on the default full re-evaluation pay two full
//! evaluations per rejected trial.

use crate::{algorithm::Algorithm, modsel_function::ModselFunction};
use log::trace;
use modsel_core::{
    error::OptimizerResult,
    objective::Objective,
    optimizer::{ConvergenceState, OptimizationResult},
    types::{Iterate, Scalar},
};
use num_traits::Float;
use std::time::Instant;

impl<'a, T: Scalar, A> ModselFunction<'a, T, A> {
    /// Sequential Newton coordinate descent with step halving.
    ///
    /// A coordinate whose attempts all fail to improve the objective keeps
    /// its value for this sweep. The function and parameter deltas are
    /// accumulated over the current sweep only.
    ///
    /// Requires an objective and a gradient/curvature strategy.
    pub fn cda_newton(&self, initial: &Iterate<T>) -> OptimizerResult<OptimizationResult<T>> {
        let algorithm = Algorithm::CdaNewton;
        let objective = self.objective_for(algorithm)?;
        let grad_hess = self.grad_hess_for(algorithm)?;
        self.prepare(algorithm, initial)?;

        let start = Instant::now();
        let max_steps = self.config.max_line_search_steps;
        let two = T::one() + T::one();
        let mut theta = initial.clone();
        let (mut value, mut aux) = objective.evaluate_with_aux(&theta, self.selection)?;
        let mut evaluations = 1;
        let mut state = ConvergenceState::new();

        while state.should_continue(&self.config, true) {
            let mut improvement = T::zero();
            let mut max_step = T::zero();

            for j in 0..theta.len() {
                let (gradient, curvature) = grad_hess.grad_hess(j, &theta, self.selection)?;
                let mut delta = gradient / curvature;
                if !<T as Float>::is_finite(delta) {
                    trace!("{}: coordinate {} skipped, step {} is not finite", algorithm, j, delta);
                    continue;
                }

                let current = theta[j];
                for attempt in 1..=max_steps {
                    let proposal = current - delta;
                    let new_value = objective.evaluate_incremental(
                        value,
                        &theta,
                        j,
                        proposal,
                        self.selection,
                        &mut aux,
                    )?;
                    evaluations += 1;
                    theta[j] = proposal;

                    if new_value < value {
                        improvement += value - new_value;
                        value = new_value;
                        max_step = <T as Float>::max(max_step, <T as Float>::abs(delta));
                        break;
                    }

                    self.revert_coordinate(objective, new_value, &mut theta, j, current, &mut aux)?;
                    evaluations += 1;
                    trace!(
                        "{}: coordinate {} attempt {} rejected (step {})",
                        algorithm,
                        j,
                        attempt,
                        delta
                    );
                    delta /= two;
                }
            }

            state.function_delta = improvement;
            state.parameter_delta = max_step;
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

    /// Moves `theta[j]` back to `previous`, updating the auxiliary state.
    fn revert_coordinate(
        &self,
        objective: &dyn Objective<T, Aux = A>,
        trial_value: T,
        theta: &mut Iterate<T>,
        j: usize,
        previous: T,
        aux: &mut A,
    ) -> OptimizerResult<()> {
        objective.evaluate_incremental(trial_value, theta, j, previous, self.selection, aux)?;
        theta[j] = previous;
        Ok(())
    }
}
