//! Type definitions and aliases for coordinate-wise optimization.
//!
//! This module provides the scalar trait shared by every algorithm, the
//! iterate type alias and the default run constants.

use nalgebra::{Dyn, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Trait for scalar types used in optimization (f32 or f64).
///
/// This trait combines all the numeric traits required by the
/// coordinate descent algorithms.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Default tolerance on the decrease of the objective between sweeps.
    const DEFAULT_FUNCTION_TOLERANCE: Self;

    /// Default tolerance on the largest coordinate change within a sweep.
    const DEFAULT_PARAMETER_TOLERANCE: Self;
}

impl Scalar for f32 {
    const DEFAULT_FUNCTION_TOLERANCE: Self = 1e-3;
    const DEFAULT_PARAMETER_TOLERANCE: Self = 1e-4;
}

impl Scalar for f64 {
    const DEFAULT_FUNCTION_TOLERANCE: Self = 1e-3;
    const DEFAULT_PARAMETER_TOLERANCE: Self = 1e-4;
}

/// Values of the selected coordinates, one entry per selected index.
pub type Iterate<T> = OVector<T, Dyn>;

/// Default run constants.
pub mod constants {
    /// Default cap on the number of outer sweeps.
    pub const DEFAULT_MAX_ITERATIONS: usize = 50;

    /// Default number of step attempts per Newton line search.
    pub const DEFAULT_MAX_LINE_SEARCH_STEPS: usize = 1;
}
