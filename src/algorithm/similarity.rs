//! Pairwise cosine similarity between matrix rows.

use crate::dtype::Element;
use crate::matrix::SquareMatrix;

/// Cosine similarity for every pair of distinct rows.
///
/// `sim[i][j] = dot(r_i, r_j) / (|r_i| * |r_j|)` for `i != j`, stored
/// symmetrically. The diagonal is 0 (a row is never compared with itself),
/// and any pair involving a zero-norm row, which has no defined cosine, is
/// normalized to 0. The result never contains NaN or infinities.
///
/// Full `O(n^2 * d)` computation; labels are carried over unchanged.
pub fn pairwise_cosine<T: Element>(matrix: &SquareMatrix<T>) -> SquareMatrix<f64> {
    let n = matrix.n();
    let rows: Vec<Vec<f64>> = matrix
        .rows()
        .map(|row| row.iter().map(|&v| v.as_f64()).collect())
        .collect();
    let norms: Vec<f64> = rows.iter().map(|r| dot(r, r).sqrt()).collect();

    let mut sim = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let value = dot(&rows[i], &rows[j]) / (norms[i] * norms[j]);
            let value = if value.is_finite() { value } else { 0.0 };
            sim[i * n + j] = value;
            sim[j * n + i] = value;
        }
    }

    SquareMatrix::from_parts(sim, n, matrix.labels().to_vec())
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
