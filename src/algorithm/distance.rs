//! Pairwise Euclidean distances between matrix rows.
//!
//! Condensed storage follows the usual upper-triangle convention: entry
//! `(i, j)` with `i < j` lives at [`condensed_index`]`(n, i, j)`, giving
//! `n * (n - 1) / 2` values for `n` rows.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;

/// Position of pair `(i, j)`, `i < j < n`, in a condensed distance vector.
#[inline]
pub fn condensed_index(n: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < j && j < n);
    n * i - i * (i + 1) / 2 + (j - i - 1)
}

/// Euclidean distance between every pair of rows, condensed form.
pub fn pdist_euclidean<T: Element>(matrix: &SquareMatrix<T>) -> Vec<f64> {
    let n = matrix.n();
    let rows: Vec<Vec<f64>> = matrix
        .rows()
        .map(|row| row.iter().map(|&v| v.as_f64()).collect())
        .collect();

    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            out.push(euclidean_distance(&rows[i], &rows[j]));
        }
    }
    out
}

#[inline]
fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    sqeuclidean_distance(a, b).sqrt()
}

#[inline]
fn sqeuclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Expand a condensed distance vector into a dense `n x n` matrix.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `condensed.len() != n * (n - 1) / 2`.
pub fn squareform(condensed: &[f64], n: usize) -> Result<SquareMatrix<f64>> {
    let expected = n * n.saturating_sub(1) / 2;
    if condensed.len() != expected {
        return Err(Error::shape_mismatch(&[expected], &[condensed.len()]));
    }

    let mut square = vec![0.0; n * n];
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            let val = condensed[k];
            square[i * n + j] = val;
            square[j * n + i] = val;
            k += 1;
        }
    }
    SquareMatrix::from_vec(square, n)
}
