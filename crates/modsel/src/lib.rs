//! # modsel
//!
//! Coordinate-wise mode finding for Bayesian model selection.
//!
//! The optimizer minimizes a caller-supplied objective (typically a
//! negative marginal or penalized likelihood) over a selected subset of
//! model parameters. The objective and the per-coordinate update rules are
//! opaque to the optimizer; it only calls them through the traits in
//! [`modsel_core`].
//!
//! ## Quick Start
//!
//! ```rust
//! use modsel::prelude::*;
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
//! let result = optimizer.run(Algorithm::Cda, &Iterate::zeros(2)).unwrap();
//! assert_eq!(result.value, Some(0.0));
//! ```

/// Contracts, configuration and result types.
pub use modsel_core;

/// Optimizer core and algorithms.
pub use modsel_optim;

/// Re-export of the linear algebra backend.
pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use modsel_core::prelude::*;
    pub use modsel_optim::{Algorithm, ModselFunction};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_names() {
        let selection = CoordinateSelection::full(1);
        let optimizer = ModselFunction::<f64>::new(&selection);
        assert_eq!(optimizer.config(), &ModselConfig::default());
        assert_eq!("cdanewton".parse::<Algorithm>().unwrap(), Algorithm::CdaNewton);
    }
}
