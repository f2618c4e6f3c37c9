//! Coordinate descent algorithms for mode finding in model selection.
//!
//! This crate provides [`ModselFunction`], an optimizer bound to a
//! coordinate selection and a caller-supplied objective, with five entry
//! points. All of them minimize the objective.
//!
//! # Available Algorithms
//!
//! - **CDA** ([`ModselFunction::cda`]): sequential coordinate descent with closed-form updates
//! - **Untracked CDA** ([`ModselFunction::cda_untracked`]): same sweeps, never evaluates the objective
//! - **Block CDA** ([`ModselFunction::block_cda`]): all coordinates proposed jointly, accepted as a unit
//! - **Newton CDA** ([`ModselFunction::cda_newton`]): sequential Newton steps with step halving
//! - **Block Newton CDA** ([`ModselFunction::block_cda_newton`]): joint Newton steps with step halving
//!
//! # Examples
//!
//! ```rust
//! use modsel_core::prelude::*;
//! use modsel_optim::{Algorithm, ModselFunction};
//!
//! #[derive(Debug)]
//! struct Parabola;
//!
//! impl Objective<f64> for Parabola {
//!     type Aux = ();
//!
//!     fn evaluate(&self, th: &Iterate<f64>, _: &CoordinateSelection) -> OptimizerResult<f64> {
//!         Ok((th[0] - 2.0).powi(2))
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
//! let grad_hess = |_: usize, th: &Iterate<f64>, _: &CoordinateSelection| -> OptimizerResult<(f64, f64)> {
//!     Ok((2.0 * (th[0] - 2.0), 2.0))
//! };
//!
//! let selection = CoordinateSelection::new(vec![4]);
//! let optimizer = ModselFunction::<f64>::new(&selection)
//!     .with_objective(&Parabola)
//!     .with_grad_hess(&grad_hess)
//!     .with_config(ModselConfig::new().with_max_line_search_steps(3));
//!
//! let result = optimizer
//!     .run(Algorithm::CdaNewton, &Iterate::from_vec(vec![-1.0]))
//!     .unwrap();
//! assert_eq!(result.point[0], 2.0);
//! ```

pub mod algorithm;
pub mod block_cda;
pub mod block_newton;
pub mod cda;
pub mod modsel_function;
pub mod newton;

pub use algorithm::Algorithm;
pub use modsel_function::ModselFunction;

// Re-export commonly used items from core
pub use modsel_core::{
    config::ModselConfig,
    error::{OptimizerError, OptimizerResult},
    objective::Objective,
    optimizer::{OptimizationResult, TerminationReason},
    selection::CoordinateSelection,
    update::{GradHessUnivariate, UnivariateUpdate},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports() {
        let _config = ModselConfig::<f64>::new();
        let _selection = CoordinateSelection::full(2);
        assert_eq!(Algorithm::ALL.len(), 5);
    }
}
