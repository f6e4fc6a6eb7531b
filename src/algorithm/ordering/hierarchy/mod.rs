//! Hierarchical-clustering leaf ordering.
//!
//! Rows of the matrix are clustered agglomeratively on their Euclidean
//! distances; the left-to-right leaf order of the resulting dendrogram is
//! the permutation. With optimal leaf ordering enabled (the default) the
//! dendrogram's children are flipped to minimize the summed distance between
//! adjacent leaves, which keeps similar rows next to each other across
//! cluster boundaries as well as within them.
//!
//! Everything here is deterministic: the same input and method always give
//! the same order.

pub mod linkage;
pub mod optimal;

pub use linkage::{LinkageMatrix, LinkageMethod, leaves_list, linkage};
pub use optimal::{adjacent_leaf_cost, optimal_leaf_ordering};

use crate::algorithm::distance::pdist_euclidean;
use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::{Permutation, SquareMatrix, reorder};

use super::traits::MatrixOrdering;

/// Options for hierarchical-clustering ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyOptions {
    /// Linkage criterion.
    /// Default: [`LinkageMethod::Complete`]
    pub method: LinkageMethod,

    /// Apply optimal leaf ordering to the dendrogram.
    /// Default: true
    pub optimal_ordering: bool,
}

impl Default for HierarchyOptions {
    fn default() -> Self {
        Self {
            method: LinkageMethod::Complete,
            optimal_ordering: true,
        }
    }
}

impl HierarchyOptions {
    /// Default options with the given linkage method
    pub fn with_method(method: LinkageMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

/// Dendrogram leaf order as a [`MatrixOrdering`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchicalOrdering {
    /// Clustering options
    pub options: HierarchyOptions,
}

impl MatrixOrdering for HierarchicalOrdering {
    fn name(&self) -> &'static str {
        "hierarchical"
    }

    fn ordering<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Permutation> {
        hierarchical_ordering(matrix, &self.options)
    }
}

/// Leaf order of the dendrogram over the rows of `matrix`.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidArgument`] if a row distance is not
/// finite (the matrix holds NaN or infinite entries).
pub fn hierarchical_ordering<T: Element>(
    matrix: &SquareMatrix<T>,
    options: &HierarchyOptions,
) -> Result<Permutation> {
    let n = matrix.n();
    if n <= 1 {
        return Ok(Permutation::identity(n));
    }

    let condensed = pdist_euclidean(matrix);
    let mut z = linkage(&condensed, n, options.method)?;
    if options.optimal_ordering {
        z = optimal_leaf_ordering(&z, &condensed)?;
    }
    log::trace!(
        "hierarchical ordering: method={}, root height={}",
        options.method,
        z.rows().last().map_or(0.0, |row| row[2])
    );

    Ok(Permutation::from_vec_unchecked(leaves_list(&z)))
}

/// Reorder `matrix` by [`hierarchical_ordering`].
pub fn hierarchical_clustering_permutation<T: Element>(
    matrix: &SquareMatrix<T>,
    options: &HierarchyOptions,
) -> Result<SquareMatrix<T>> {
    reorder(matrix, &hierarchical_ordering(matrix, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_blocks() -> SquareMatrix<u8> {
        let rows = [[0u8, 0, 1, 1], [0, 0, 1, 1], [1, 1, 0, 0], [1, 1, 0, 0]];
        SquareMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_hierarchical_trivial_sizes() {
        let opts = HierarchyOptions::default();
        let empty = SquareMatrix::<u8>::zeros(0).unwrap();
        assert!(hierarchical_ordering(&empty, &opts).unwrap().is_empty());
        let single = SquareMatrix::from_rows(&[[1u8]]).unwrap();
        let p = hierarchical_ordering(&single, &opts).unwrap();
        assert_eq!(p.as_slice(), &[0]);
    }

    #[test]
    fn test_hierarchical_two_blocks() {
        let m = two_blocks();

        let plain = HierarchyOptions {
            optimal_ordering: false,
            ..Default::default()
        };
        let p = hierarchical_ordering(&m, &plain).unwrap();
        assert_eq!(p.as_slice(), &[0, 1, 2, 3]);

        // Every cross-block distance is 2, so the first end pair wins.
        let p = hierarchical_ordering(&m, &HierarchyOptions::default()).unwrap();
        assert_eq!(p.as_slice(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_hierarchical_deterministic() {
        #[rustfmt::skip]
        let m = SquareMatrix::from_rows(&[
            [0.0, 0.2, 0.9, 0.1, 0.0],
            [0.2, 0.0, 0.4, 0.8, 0.3],
            [0.9, 0.4, 0.0, 0.5, 0.7],
            [0.1, 0.8, 0.5, 0.0, 0.6],
            [0.0, 0.3, 0.7, 0.6, 0.0],
        ])
        .unwrap();

        for method in LinkageMethod::ALL {
            let opts = HierarchyOptions::with_method(method);
            let first = hierarchical_ordering(&m, &opts).unwrap();
            let second = hierarchical_ordering(&m, &opts).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.len(), 5);
        }
    }

    #[test]
    fn test_hierarchical_rejects_non_finite() {
        let m = SquareMatrix::from_rows(&[[0.0, f64::NAN], [f64::NAN, 0.0]]).unwrap();
        let result = hierarchical_ordering(&m, &HierarchyOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_hierarchical_permutation_labels() {
        let m = two_blocks().with_labels(["a", "b", "c", "d"]).unwrap();
        let out = hierarchical_clustering_permutation(&m, &HierarchyOptions::default()).unwrap();
        assert_eq!(out.labels(), &["a", "b", "d", "c"]);
        assert!(out.is_symmetric());
    }
}
