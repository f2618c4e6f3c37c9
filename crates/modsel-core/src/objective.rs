//! Objective evaluator interface.
//!
//! The optimizer minimizes a scalar function of the selected coordinates
//! without knowing what it represents. Callers implement [`Objective`] to
//! provide full evaluation and, optionally, a cheaper incremental path for
//! the case where a single coordinate changes.
//!
//! # Incremental evaluation
//!
//! `evaluate_with_aux` returns an auxiliary state alongside the value. The
//! optimizer never looks inside it; it only hands it back to
//! `evaluate_incremental`, which must return exactly what a full
//! evaluation at the updated iterate would return and leave the state
//! describing the updated iterate.
//!
//! For a least-squares objective `sum_i (y_i - x_i' th)^2` the state can
//! hold the linear predictor; moving `th[j]` by `d` then costs one column
//! update `pred_i += x_ij * d` instead of a full matrix-vector product.

use crate::{
    error::OptimizerResult,
    selection::CoordinateSelection,
    types::{Iterate, Scalar},
};
use std::cell::Cell;
use std::fmt::Debug;

/// Trait for objective functions minimized by coordinate descent.
pub trait Objective<T: Scalar>: Debug {
    /// Opaque auxiliary evaluation state.
    ///
    /// Use `()` when there is no cheaper incremental path.
    type Aux;

    /// Evaluates the objective at `theta`.
    ///
    /// # Arguments
    ///
    /// * `theta` - Values of the selected coordinates
    /// * `selection` - Parameter indices that `theta` refers to
    fn evaluate(&self, theta: &Iterate<T>, selection: &CoordinateSelection)
        -> OptimizerResult<T>;

    /// Evaluates the objective at `theta` and builds the auxiliary state
    /// needed for later incremental updates.
    fn evaluate_with_aux(
        &self,
        theta: &Iterate<T>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(T, Self::Aux)>;

    /// Re-evaluates the objective after setting `theta[j] = theta_j_new`.
    ///
    /// # Arguments
    ///
    /// * `value` - Objective value at `theta`
    /// * `theta` - Current iterate, before the change
    /// * `j` - Position of the changed coordinate within the selection
    /// * `theta_j_new` - New value for `theta[j]`
    /// * `aux` - On input, the state at `theta`; on output, the state at the updated iterate
    ///
    /// Sequential Newton CDA calls this twice for every rejected trial step,
    /// once to score it and once to move the coordinate back, so objectives
    /// with an expensive full evaluation should override it.
    ///
    /// # Default Implementation
    ///
    /// Copies `theta`, applies the change and calls `evaluate_with_aux`.
    /// `value` is not used.
    fn evaluate_incremental(
        &self,
        _value: T,
        theta: &Iterate<T>,
        j: usize,
        theta_j_new: T,
        selection: &CoordinateSelection,
        aux: &mut Self::Aux,
    ) -> OptimizerResult<T> {
        let mut updated = theta.clone();
        updated[j] = theta_j_new;
        let (new_value, new_aux) = self.evaluate_with_aux(&updated, selection)?;
        *aux = new_aux;
        Ok(new_value)
    }
}

/// Wrapper that counts evaluations of an objective.
#[derive(Debug)]
pub struct CountingObjective<O> {
    /// The underlying objective
    pub inner: O,
    full: Cell<usize>,
    with_aux: Cell<usize>,
    incremental: Cell<usize>,
}

/// Evaluation counts recorded by [`CountingObjective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvaluationCounts {
    /// Calls to `evaluate`
    pub full: usize,
    /// Calls to `evaluate_with_aux`
    pub with_aux: usize,
    /// Calls to `evaluate_incremental`
    pub incremental: usize,
}

impl EvaluationCounts {
    /// Total number of objective evaluations of any kind.
    pub fn total(&self) -> usize {
        self.full + self.with_aux + self.incremental
    }
}

impl<O> CountingObjective<O> {
    /// Creates a new counting wrapper around an objective.
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            full: Cell::new(0),
            with_aux: Cell::new(0),
            incremental: Cell::new(0),
        }
    }

    /// Resets all counters to zero.
    pub fn reset_counts(&self) {
        self.full.set(0);
        self.with_aux.set(0);
        self.incremental.set(0);
    }

    /// Returns the current evaluation counts.
    pub fn counts(&self) -> EvaluationCounts {
        EvaluationCounts {
            full: self.full.get(),
            with_aux: self.with_aux.get(),
            incremental: self.incremental.get(),
        }
    }
}

impl<T, O> Objective<T> for CountingObjective<O>
where
    T: Scalar,
    O: Objective<T>,
{
    type Aux = O::Aux;

    fn evaluate(&self, theta: &Iterate<T>, selection: &CoordinateSelection) -> OptimizerResult<T> {
        self.full.set(self.full.get() + 1);
        self.inner.evaluate(theta, selection)
    }

    fn evaluate_with_aux(
        &self,
        theta: &Iterate<T>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(T, Self::Aux)> {
        self.with_aux.set(self.with_aux.get() + 1);
        self.inner.evaluate_with_aux(theta, selection)
    }

    fn evaluate_incremental(
        &self,
        value: T,
        theta: &Iterate<T>,
        j: usize,
        theta_j_new: T,
        selection: &CoordinateSelection,
        aux: &mut Self::Aux,
    ) -> OptimizerResult<T> {
        self.incremental.set(self.incremental.get() + 1);
        self.inner
            .evaluate_incremental(value, theta, j, theta_j_new, selection, aux)
    }
}
