//! Traits for matrix ordering algorithms.

use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::{Permutation, SquareMatrix, reorder};

/// Output of a reordering: the permuted matrix and the permutation used.
///
/// `matrix.labels()` already reflects the new order; apply
/// [`Permutation::apply`] to any other per-node data.
#[derive(Debug, Clone, PartialEq)]
pub struct Reordering<T: Element> {
    /// Matrix with rows and columns permuted
    pub matrix: SquareMatrix<T>,
    /// Permutation that produced `matrix` from the input
    pub permutation: Permutation,
}

/// Trait for matrix ordering algorithms.
///
/// An ordering computes a permutation of node indices for a square matrix;
/// applying it to both axes places related nodes close together. All
/// implementations are deterministic pure functions of their input.
pub trait MatrixOrdering {
    /// Short algorithm name used in logs
    fn name(&self) -> &'static str;

    /// Compute the permutation for `matrix`.
    ///
    /// # Returns
    ///
    /// Permutation `P` where `P[i]` is the original index that should be
    /// placed at position `i` of the reordered matrix.
    fn ordering<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Permutation>;

    /// Compute the permutation and apply it to both axes of `matrix`.
    fn reorder<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Reordering<T>> {
        let permutation = self.ordering(matrix)?;
        let matrix = reorder(matrix, &permutation)?;
        Ok(Reordering {
            matrix,
            permutation,
        })
    }
}

/// Keeps the input order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityOrdering;

impl MatrixOrdering for IdentityOrdering {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn ordering<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Permutation> {
        Ok(Permutation::identity(matrix.n()))
    }
}
