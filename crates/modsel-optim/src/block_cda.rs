//! Block coordinate descent.
//!
//! Every coordinate's candidate is computed from the iterate at the start
//! of the sweep (Jacobi order), then the whole candidate vector is accepted
//! or rejected as a unit. Because the joint move is not a sequence of
//! univariate optimizations, convergence of sequential CDA does not carry
//! over to this variant.

use crate::{
    algorithm::Algorithm,
    modsel_function::{max_abs_difference, ModselFunction},
};
use log::trace;
use modsel_core::{
    error::OptimizerResult,
    optimizer::{ConvergenceState, OptimizationResult},
    types::{Iterate, Scalar},
};
use std::time::Instant;

impl<'a, T: Scalar, A> ModselFunction<'a, T, A> {
    /// Block coordinate descent with all coordinates proposed jointly.
    ///
    /// A sweep is committed only when it strictly decreases the objective;
    /// otherwise the iterate is left as it was. A rejected sweep yields a
    /// non-positive function delta, which ends the run.
    ///
    /// Requires an objective and a univariate update.
    pub fn block_cda(&self, initial: &Iterate<T>) -> OptimizerResult<OptimizationResult<T>> {
        let algorithm = Algorithm::BlockCda;
        let objective = self.objective_for(algorithm)?;
        let update = self.update_for(algorithm)?;
        self.prepare(algorithm, initial)?;

        let start = Instant::now();
        let mut theta = initial.clone();
        let mut candidate = initial.clone();
        let mut value = objective.evaluate(&theta, self.selection)?;
        let mut evaluations = 1;
        let mut state = ConvergenceState::new();

        while state.should_continue(&self.config, true) {
            for j in 0..theta.len() {
                candidate[j] = update.update(j, &theta, self.selection)?;
            }

            let new_value = objective.evaluate(&candidate, self.selection)?;
            evaluations += 1;
            state.function_delta = value - new_value;

            if new_value < value {
                value = new_value;
                state.parameter_delta = max_abs_difference(&candidate, &theta);
                theta.copy_from(&candidate);
            } else {
                trace!(
                    "{}: sweep {} rejected ({} >= {})",
                    algorithm,
                    state.iteration + 1,
                    new_value,
                    value
                );
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use modsel_core::{
        config::ModselConfig, objective::Objective, optimizer::TerminationReason,
        selection::CoordinateSelection,
    };

    /// (th0 - 1)^2 + (th1 - th0)^2
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
    fn test_jacobi_order() {
        let selection = CoordinateSelection::full(2);
        let update = chain_minimizer;
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&Chain)
            .with_update(&update)
            .with_config(ModselConfig::new().with_max_iterations(1));

        let result = optimizer.block_cda(&Iterate::from_vec(vec![0.0, 0.0])).unwrap();

        // th1 is proposed from the sweep-start th0 = 0, not the new 0.5.
        assert_relative_eq!(result.point[0], 0.5);
        assert_relative_eq!(result.point[1], 0.0);
        assert_relative_eq!(result.value.unwrap(), 0.5);
    }

    #[test]
    fn test_block_cda_converges_on_chain() {
        let selection = CoordinateSelection::full(2);
        let update = chain_minimizer;
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&Chain)
            .with_update(&update)
            .with_config(ModselConfig::new().with_function_tolerance(1e-10).with_max_iterations(200));

        let result = optimizer.block_cda(&Iterate::from_vec(vec![0.0, 0.0])).unwrap();

        assert!(result.converged);
        assert_relative_eq!(result.point[0], 1.0, epsilon = 1e-3);
        assert_relative_eq!(result.point[1], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rejected_sweep_keeps_iterate() {
        let selection = CoordinateSelection::full(2);
        // Proposes a point far from the minimum of Chain.
        let away = |j: usize, _: &Iterate<f64>, _: &CoordinateSelection| -> OptimizerResult<f64> {
            Ok(if j == 0 { 10.0 } else { -10.0 })
        };
        let optimizer = ModselFunction::<f64>::new(&selection)
            .with_objective(&Chain)
            .with_update(&away);

        let initial = Iterate::from_vec(vec![0.5, 0.5]);
        let result = optimizer.block_cda(&initial).unwrap();

        assert_eq!(result.point, initial);
        assert_relative_eq!(result.value.unwrap(), 0.25);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.termination_reason, TerminationReason::FunctionTolerance);
    }
}
