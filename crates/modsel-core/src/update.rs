//! Per-coordinate update rules.
//!
//! Plain coordinate descent asks a [`UnivariateUpdate`] for the new value of
//! one coordinate given the others. Newton coordinate descent asks a
//! [`GradHessUnivariate`] for the first and second partial derivatives of
//! the objective along one coordinate and steps by `gradient / curvature`.
//!
//! Both traits are implemented for closures of the matching signature:
//!
//! ```
//! use modsel_core::prelude::*;
//!
//! let target = [3.0, -2.0];
//! let update = move |j: usize, _theta: &Iterate<f64>, _sel: &CoordinateSelection| -> OptimizerResult<f64> {
//!     Ok(target[j])
//! };
//! let theta = Iterate::from_vec(vec![0.0, 0.0]);
//! let selection = CoordinateSelection::full(2);
//! assert_eq!(update.update(1, &theta, &selection).unwrap(), -2.0);
//! ```

use crate::{
    error::OptimizerResult,
    selection::CoordinateSelection,
    types::{Iterate, Scalar},
};

/// Closed-form or problem-specific update of a single coordinate.
pub trait UnivariateUpdate<T: Scalar> {
    /// Returns the new value for `theta[j]` holding every other coordinate
    /// at its current value in `theta`.
    fn update(&self, j: usize, theta: &Iterate<T>, selection: &CoordinateSelection)
        -> OptimizerResult<T>;
}

/// Gradient and curvature of the objective along a single coordinate.
pub trait GradHessUnivariate<T: Scalar> {
    /// Returns `(gradient, curvature)` of the objective with respect to
    /// `theta[j]`, evaluated at `theta`.
    fn grad_hess(
        &self,
        j: usize,
        theta: &Iterate<T>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(T, T)>;
}

impl<T, F> UnivariateUpdate<T> for F
where
    T: Scalar,
    F: Fn(usize, &Iterate<T>, &CoordinateSelection) -> OptimizerResult<T>,
{
    fn update(
        &self,
        j: usize,
        theta: &Iterate<T>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<T> {
        self(j, theta, selection)
    }
}

impl<T, F> GradHessUnivariate<T> for F
where
    T: Scalar,
    F: Fn(usize, &Iterate<T>, &CoordinateSelection) -> OptimizerResult<(T, T)>,
{
    fn grad_hess(
        &self,
        j: usize,
        theta: &Iterate<T>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(T, T)> {
        self(j, theta, selection)
    }
}
