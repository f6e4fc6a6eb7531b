//! Shape validation and symmetric permutation

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::core::SquareMatrix;
use super::permutation::{Permutation, validate_permutation};

/// Reject any shape whose row count differs from its column count
///
/// # Errors
///
/// Returns [`Error::NotSquare`] if `rows != cols`.
#[inline]
pub fn validate_square(rows: usize, cols: usize) -> Result<()> {
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok(())
}

/// Reorder rows and columns of a square matrix by the same permutation
///
/// Produces `out[i][j] = matrix[perm[i]][perm[j]]`; node labels are
/// permuted the same way, so `out.label(i) == matrix.label(perm[i])`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the permutation length differs from
/// the matrix size. Nothing is reordered in that case.
pub fn reorder<T: Element>(
    matrix: &SquareMatrix<T>,
    perm: &Permutation,
) -> Result<SquareMatrix<T>> {
    let n = matrix.n();
    if perm.len() != n {
        return Err(Error::shape_mismatch(&[n], &[perm.len()]));
    }

    let idx = perm.as_slice();
    let src = matrix.as_slice();
    let mut data = Vec::with_capacity(n * n);
    for &pi in idx {
        let row = &src[pi * n..(pi + 1) * n];
        data.extend(idx.iter().map(|&pj| row[pj]));
    }

    let labels = idx.iter().map(|&p| matrix.label(p).to_owned()).collect();
    Ok(SquareMatrix::from_parts(data, n, labels))
}

/// Reorder by a raw index sequence, validating it first
///
/// # Errors
///
/// Returns a shape error if `indices` is not a bijection over `0..n`.
pub fn reorder_by_indices<T: Element>(
    matrix: &SquareMatrix<T>,
    indices: &[usize],
) -> Result<SquareMatrix<T>> {
    validate_permutation(indices, matrix.n())?;
    reorder(matrix, &Permutation::from_vec_unchecked(indices.to_vec()))
}
