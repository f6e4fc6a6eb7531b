//! Degree-count ordering.
//!
//! Nodes are sorted by ascending number of nonzero entries in their row.
//! The sort is stable: nodes of equal degree keep their original relative
//! order, which keeps the layout reproducible across runs.

use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::{Permutation, SquareMatrix, reorder};

use super::traits::MatrixOrdering;

/// Orders nodes by ascending degree, ties by original index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegreeOrdering;

impl MatrixOrdering for DegreeOrdering {
    fn name(&self) -> &'static str {
        "degree"
    }

    fn ordering<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Permutation> {
        Ok(count_ordering(matrix))
    }
}

/// Stable ascending sort of node indices by nonzero count.
pub fn count_ordering<T: Element>(matrix: &SquareMatrix<T>) -> Permutation {
    let degrees = matrix.degrees();
    let mut idx: Vec<usize> = (0..matrix.n()).collect();
    // sort_by_key is stable
    idx.sort_by_key(|&i| degrees[i]);
    log::trace!("degree ordering: degrees={degrees:?}");
    Permutation::from_vec_unchecked(idx)
}

/// Reorder `matrix` by [`count_ordering`].
pub fn count_permutation<T: Element>(matrix: &SquareMatrix<T>) -> Result<SquareMatrix<T>> {
    reorder(matrix, &count_ordering(matrix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ordering_path_graph() {
        let rows = [[0u8, 1, 0, 0], [1, 0, 1, 0], [0, 1, 0, 1], [0, 0, 1, 0]];
        let m = SquareMatrix::from_rows(&rows).unwrap();
        assert_eq!(count_ordering(&m).as_slice(), &[0, 3, 1, 2]);
    }

    #[test]
    fn test_count_ordering_stable_ties() {
        // Degrees: 2, 1, 2, 1, 0
        #[rustfmt::skip]
        let m = SquareMatrix::from_rows(&[
            [0u8, 1, 1, 0, 0],
            [1, 0, 0, 0, 0],
            [1, 0, 0, 1, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(count_ordering(&m).as_slice(), &[4, 1, 3, 0, 2]);
    }

    #[test]
    fn test_count_ordering_counts_diagonal_and_weights() {
        // Any nonzero counts, including self-loops and real weights.
        let rows = [[0.5, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]];
        let m = SquareMatrix::from_rows(&rows).unwrap();
        assert_eq!(count_ordering(&m).as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_count_permutation_matrix() {
        let m = SquareMatrix::from_rows(&[[0u8, 1, 1], [1, 0, 0], [1, 0, 0]])
            .unwrap()
            .with_labels(["hub", "a", "b"])
            .unwrap();
        let out = count_permutation(&m).unwrap();
        assert_eq!(out.labels(), &["a", "b", "hub"]);
        assert_eq!(out.row(2), &[1, 1, 0]);
        assert!(out.is_symmetric());
    }
}
