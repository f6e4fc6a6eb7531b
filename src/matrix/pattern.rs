//! CSR sparsity pattern of a square matrix

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::core::SquareMatrix;

/// Nonzero structure in CSR (Compressed Sparse Row) layout
///
/// Only positions are stored, no values. Index arrays are `i64` so the
/// pattern can be handed directly to ordering primitives that take raw
/// `row_ptrs` / `col_indices` slices, such as [`rcm`](crate::algorithm::ordering::rcm::rcm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparsityPattern {
    row_ptrs: Vec<i64>,
    col_indices: Vec<i64>,
    n: usize,
}

impl SparsityPattern {
    /// Create a pattern from components
    ///
    /// # Arguments
    ///
    /// * `row_ptrs` - Row pointers (length: n + 1, non-decreasing, starting at 0)
    /// * `col_indices` - Column index of each nonzero
    /// * `n` - Matrix dimension
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - row_ptrs length != n + 1
    /// - row_ptrs does not start at 0, decreases, or does not end at nnz
    /// - a column index is outside 0..n
    pub fn new(row_ptrs: Vec<i64>, col_indices: Vec<i64>, n: usize) -> Result<Self> {
        if row_ptrs.len() != n + 1 {
            return Err(Error::shape_mismatch(&[n + 1], &[row_ptrs.len()]));
        }
        if row_ptrs[0] != 0 || row_ptrs.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::invalid_argument(
                "row_ptrs",
                "must start at 0 and be non-decreasing",
            ));
        }
        if row_ptrs[n] as usize != col_indices.len() {
            return Err(Error::shape_mismatch(&[row_ptrs[n] as usize], &[col_indices.len()]));
        }
        if let Some(&bad) = col_indices.iter().find(|&&c| c < 0 || c as usize >= n) {
            return Err(Error::invalid_argument(
                "col_indices",
                format!("column index {bad} out of range for n = {n}"),
            ));
        }
        Ok(Self {
            row_ptrs,
            col_indices,
            n,
        })
    }

    /// Extract the nonzero structure of a dense matrix
    ///
    /// Diagonal entries (self-loops) are kept only if `include_diagonal`.
    pub fn from_matrix<T: Element>(matrix: &SquareMatrix<T>, include_diagonal: bool) -> Self {
        let n = matrix.n();
        let mut row_ptrs = Vec::with_capacity(n + 1);
        let mut col_indices = Vec::new();
        row_ptrs.push(0i64);

        for (i, row) in matrix.rows().enumerate() {
            for (j, v) in row.iter().enumerate() {
                if v.is_nonzero() && (include_diagonal || i != j) {
                    col_indices.push(j as i64);
                }
            }
            row_ptrs.push(col_indices.len() as i64);
        }

        Self {
            row_ptrs,
            col_indices,
            n,
        }
    }

    /// Matrix dimension
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of stored positions
    #[inline]
    pub fn nnz(&self) -> usize {
        self.col_indices.len()
    }

    /// Returns the row pointers
    #[inline]
    pub fn row_ptrs(&self) -> &[i64] {
        &self.row_ptrs
    }

    /// Returns the column indices
    #[inline]
    pub fn col_indices(&self) -> &[i64] {
        &self.col_indices
    }

    /// Column indices of row `i`, ascending
    #[inline]
    pub fn row(&self, i: usize) -> &[i64] {
        let start = self.row_ptrs[i] as usize;
        let end = self.row_ptrs[i + 1] as usize;
        &self.col_indices[start..end]
    }

    /// Number of stored positions in row `i`
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        (self.row_ptrs[i + 1] - self.row_ptrs[i]) as usize
    }
}

impl<T: Element> SquareMatrix<T> {
    /// Off-diagonal nonzero structure, the adjacency of the matrix's graph
    pub fn pattern(&self) -> SparsityPattern {
        SparsityPattern::from_matrix(self, false)
    }
}
