//! Block coordinate descent with joint Newton steps.
//!
//! Gradient and curvature for every coordinate are evaluated at the
//! sweep-start iterate, before anything moves. All coordinates then move
//! together by `0.5^(k-1) * g[j] / H[j]`, halving the whole step vector
//! until the joint move improves the objective or the attempts run out.
//!
//! A coordinate whose step `g[j] / H[j]` is not finite is held at its
//! sweep-start value while the others move, so the joint move can be
//! partial.

use crate::{algorithm::Algorithm, modsel_function::ModselFunction};
use log::trace;
use modsel_core::{
    error::OptimizerResult,
    optimizer::{ConvergenceState, OptimizationResult},
    types::{Iterate, Scalar},
};
use num_traits::Float;
use std::time::Instant;

impl<'a, T: Scalar, A> ModselFunction<'a, T, A> {
    /// Block Newton coordinate descent with joint step halving.
    ///
    /// If no attempt improves the objective the iterate reverts to the
    /// sweep-start values and the sweep reports a zero step. Coordinates
    /// whose step is not finite stay fixed for the sweep.
    ///
    /// Requires an objective and a gradient/curvature strategy.
    pub fn block_cda_newton(
        &self,
        initial: &Iterate<T>,
    ) -> OptimizerResult<OptimizationResult<T>> {
        let algorithm = Algorithm::BlockCdaNewton;
        let objective = self.objective_for(algorithm)?;
        let grad_hess = self.grad_hess_for(algorithm)?;
        self.prepare(algorithm, initial)?;

        let start = Instant::now();
        let k = initial.len();
        let max_steps = self.config.max_line_search_steps;
        let two = T::one() + T::one();
        let mut theta = initial.clone();
        let mut sweep_start = initial.clone();
        let mut delta = Iterate::<T>::zeros(k);
        let mut value = objective.evaluate(&theta, self.selection)?;
        let mut evaluations = 1;
        let mut state = ConvergenceState::new();

        while state.should_continue(&self.config, true) {
            sweep_start.copy_from(&theta);
            for j in 0..k {
                let (gradient, curvature) = grad_hess.grad_hess(j, &sweep_start, self.selection)?;
                let step = gradient / curvature;
                delta[j] = if <T as Float>::is_finite(step) {
                    step
                } else {
                    trace!("{}: coordinate {} held, step {} is not finite", algorithm, j, step);
                    T::zero()
                };
            }

            let mut improvement = T::zero();
            let mut max_step = T::zero();
            for attempt in 1..=max_steps {
                for j in 0..k {
                    theta[j] = sweep_start[j] - delta[j];
                }
                let new_value = objective.evaluate(&theta, self.selection)?;
                evaluations += 1;

                if new_value < value {
                    improvement = value - new_value;
                    value = new_value;
                    max_step = delta
                        .iter()
                        .fold(T::zero(), |acc, &d| <T as Float>::max(acc, <T as Float>::abs(d)));
                    break;
                }

                theta.copy_from(&sweep_start);
                for d in delta.iter_mut() {
                    *d /= two;
                }
                trace!("{}: joint attempt {} rejected", algorithm, attempt);
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
}
