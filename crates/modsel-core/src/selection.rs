//! Coordinate selection.
//!
//! A selection names which entries of a larger parameter vector are under
//! optimization. The iterate handed to the algorithms holds one value per
//! selected index, in selection order, so position `j` of the iterate is
//! the parameter `indices[j]` of the full model.

use crate::error::{OptimizerError, OptimizerResult};

/// Ordered set of parameter indices subject to optimization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateSelection {
    indices: Vec<usize>,
}

impl CoordinateSelection {
    /// Creates a selection from parameter indices, kept in the given order.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Creates a selection and checks it against a parameter vector of
    /// length `dimension`: every index must be in range and appear once.
    pub fn with_dimension(indices: Vec<usize>, dimension: usize) -> OptimizerResult<Self> {
        let selection = Self::new(indices);
        selection.validate(dimension)?;
        Ok(selection)
    }

    /// Selects every parameter `0..dimension`.
    pub fn full(dimension: usize) -> Self {
        Self::new((0..dimension).collect())
    }

    /// Checks that every index is below `dimension` and none is repeated.
    pub fn validate(&self, dimension: usize) -> OptimizerResult<()> {
        let mut seen = vec![false; dimension];
        for &index in &self.indices {
            match seen.get_mut(index) {
                None => {
                    return Err(OptimizerError::invalid_selection(format!(
                        "index {} out of bounds for dimension {}",
                        index, dimension
                    )))
                }
                Some(true) => {
                    return Err(OptimizerError::invalid_selection(format!(
                        "duplicate index {}",
                        index
                    )))
                }
                Some(flag) => *flag = true,
            }
        }
        Ok(())
    }

    /// Number of selected coordinates.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The selected parameter indices.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Parameter index of the `j`-th selected coordinate.
    pub fn index(&self, j: usize) -> Option<usize> {
        self.indices.get(j).copied()
    }

    /// Iterates over the selected parameter indices.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

impl From<Vec<usize>> for CoordinateSelection {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl From<&[usize]> for CoordinateSelection {
    fn from(indices: &[usize]) -> Self {
        Self::new(indices.to_vec())
    }
}
