//! Shared objectives for the integration tests.

#![allow(dead_code)]

use modsel_core::prelude::*;
use nalgebra::{DMatrix, DVector};

/// Residual sum of squares `||y - X[:, sel] th||^2`.
///
/// The auxiliary state is the linear predictor, so a single-coordinate
/// change costs one column update.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    pub x: DMatrix<f64>,
    pub y: DVector<f64>,
}

impl LeastSquares {
    /// A small, mildly correlated design with an intercept column.
    pub fn example() -> Self {
        let x = DMatrix::from_row_slice(
            6,
            3,
            &[
                1.0, 0.2, 0.1, //
                1.0, -0.5, 0.3, //
                1.0, 0.9, -0.4, //
                1.0, -1.2, 0.8, //
                1.0, 0.4, 1.1, //
                1.0, 0.1, -0.9,
            ],
        );
        let y = DVector::from_vec(vec![1.5, 0.2, 2.9, -0.7, 2.4, 0.8]);
        Self { x, y }
    }

    pub fn predictor(&self, theta: &Iterate<f64>, selection: &CoordinateSelection) -> DVector<f64> {
        let mut prediction = DVector::zeros(self.y.len());
        for (j, column) in selection.iter().enumerate() {
            prediction.axpy(theta[j], &self.x.column(column), 1.0);
        }
        prediction
    }

    /// Ordinary least squares fit on the selected columns.
    pub fn ols(&self, selection: &CoordinateSelection) -> DVector<f64> {
        let xs = self.x.select_columns(selection.indices());
        let gram = xs.transpose() * &xs;
        gram.try_inverse().unwrap() * xs.transpose() * &self.y
    }

    fn rss(&self, prediction: &DVector<f64>) -> f64 {
        (&self.y - prediction).norm_squared()
    }
}

impl Objective<f64> for LeastSquares {
    type Aux = DVector<f64>;

    fn evaluate(&self, theta: &Iterate<f64>, selection: &CoordinateSelection) -> OptimizerResult<f64> {
        Ok(self.rss(&self.predictor(theta, selection)))
    }

    fn evaluate_with_aux(
        &self,
        theta: &Iterate<f64>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(f64, DVector<f64>)> {
        let prediction = self.predictor(theta, selection);
        Ok((self.rss(&prediction), prediction))
    }

    fn evaluate_incremental(
        &self,
        _value: f64,
        theta: &Iterate<f64>,
        j: usize,
        theta_j_new: f64,
        selection: &CoordinateSelection,
        aux: &mut DVector<f64>,
    ) -> OptimizerResult<f64> {
        let column = selection
            .index(j)
            .ok_or_else(|| OptimizerError::evaluation(format!("no coordinate {}", j)))?;
        aux.axpy(theta_j_new - theta[j], &self.x.column(column), 1.0);
        Ok(self.rss(aux))
    }
}

impl UnivariateUpdate<f64> for LeastSquares {
    fn update(&self, j: usize, theta: &Iterate<f64>, selection: &CoordinateSelection) -> OptimizerResult<f64> {
        let column = self.x.column(selection.indices()[j]);
        let partial = &self.y - self.predictor(theta, selection) + &column * theta[j];
        Ok(column.dot(&partial) / column.norm_squared())
    }
}

impl GradHessUnivariate<f64> for LeastSquares {
    fn grad_hess(
        &self,
        j: usize,
        theta: &Iterate<f64>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(f64, f64)> {
        let column = self.x.column(selection.indices()[j]);
        let residual = &self.y - self.predictor(theta, selection);
        Ok((-2.0 * column.dot(&residual), 2.0 * column.norm_squared()))
    }
}

/// `sum_j (th_j - c_j)^2`, minimized at `c`.
#[derive(Debug, Clone)]
pub struct SumOfSquares {
    pub center: Vec<f64>,
}

impl SumOfSquares {
    pub fn new(center: Vec<f64>) -> Self {
        Self { center }
    }
}

impl Objective<f64> for SumOfSquares {
    type Aux = ();

    fn evaluate(&self, theta: &Iterate<f64>, _: &CoordinateSelection) -> OptimizerResult<f64> {
        Ok(theta
            .iter()
            .zip(&self.center)
            .map(|(t, c)| (t - c).powi(2))
            .sum())
    }

    fn evaluate_with_aux(
        &self,
        theta: &Iterate<f64>,
        selection: &CoordinateSelection,
    ) -> OptimizerResult<(f64, ())> {
        Ok((self.evaluate(theta, selection)?, ()))
    }
}

impl UnivariateUpdate<f64> for SumOfSquares {
    fn update(&self, j: usize, _: &Iterate<f64>, _: &CoordinateSelection) -> OptimizerResult<f64> {
        Ok(self.center[j])
    }
}

impl GradHessUnivariate<f64> for SumOfSquares {
    fn grad_hess(
        &self,
        j: usize,
        theta: &Iterate<f64>,
        _: &CoordinateSelection,
    ) -> OptimizerResult<(f64, f64)> {
        Ok((2.0 * (theta[j] - self.center[j]), 2.0))
    }
}
