//! Core dense matrix implementation: struct, creation, getters

use std::ops::Index;

use crate::dtype::Element;
use crate::error::{Error, Result};

use super::ops::validate_square;

/// Dense square matrix with node labels
///
/// Entries are stored row-major. Row `i` and column `i` describe the same
/// node, whose identity is `labels()[i]`. Squareness is guaranteed by every
/// constructor; symmetry is not, see [`SquareMatrix::check_symmetric`].
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T: Element> {
    data: Vec<T>,
    n: usize,
    labels: Vec<String>,
}

/// `n * n`, or a shape error when it does not fit in `usize`.
fn element_count(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .ok_or_else(|| Error::shape_mismatch(&[n, n], &[usize::MAX]))
}

fn default_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

impl<T: Element> SquareMatrix<T> {
    /// Create a matrix from row-major data
    ///
    /// Labels default to the decimal node index (`"0"`, `"1"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len() != n * n` or if
    /// `n * n` overflows.
    pub fn from_vec(data: Vec<T>, n: usize) -> Result<Self> {
        let len = element_count(n)?;
        if data.len() != len {
            return Err(Error::shape_mismatch(&[len], &[data.len()]));
        }
        Ok(Self {
            data,
            n,
            labels: default_labels(n),
        })
    }

    /// Create a matrix from a slice of rows
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(element_count(n)?);
        for row in rows {
            let row = row.as_ref();
            validate_square(n, row.len())?;
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            n,
            labels: default_labels(n),
        })
    }

    /// Create an all-zero matrix
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `n * n` overflows.
    pub fn zeros(n: usize) -> Result<Self> {
        Ok(Self {
            data: vec![T::zero(); element_count(n)?],
            n,
            labels: default_labels(n),
        })
    }

    /// Attach node labels, one per row/column position
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the label count differs from `n`.
    pub fn with_labels<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.n {
            return Err(Error::shape_mismatch(&[self.n], &[labels.len()]));
        }
        self.labels = labels;
        Ok(self)
    }

    /// Assemble from already validated parts.
    pub(crate) fn from_parts(data: Vec<T>, n: usize, labels: Vec<String>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        debug_assert_eq!(labels.len(), n);
        Self { data, n, labels }
    }

    /// Number of nodes (rows == columns)
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Matrix shape `[n, n]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.n, self.n]
    }

    /// True for the 0 x 0 matrix
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry at row `i`, column `j`
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds");
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() rejects a zero chunk size; the data is empty then anyway
        self.data.chunks(self.n.max(1))
    }

    /// Row-major entries
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning row-major entries
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Node labels in row/column order
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label of node `i`
    #[inline]
    pub fn label(&self, i: usize) -> &str {
        &self.labels[i]
    }

    /// Number of nonzero entries in each row
    pub fn degrees(&self) -> Vec<usize> {
        self.rows()
            .map(|row| row.iter().filter(|v| v.is_nonzero()).count())
            .collect()
    }

    /// Check `A[i][j] == A[j][i]` for all pairs
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSymmetric`] naming the first asymmetric pair in
    /// row-major scan order of the upper triangle.
    pub fn check_symmetric(&self) -> Result<()> {
        let n = self.n;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.data[i * n + j] != self.data[j * n + i] {
                    return Err(Error::NotSymmetric { row: i, col: j });
                }
            }
        }
        Ok(())
    }

    /// True if the matrix equals its transpose
    pub fn is_symmetric(&self) -> bool {
        self.check_symmetric().is_ok()
    }

    /// Maximum `|i - j|` over nonzero entries (0 for diagonal or empty matrices)
    pub fn bandwidth(&self) -> usize {
        let mut bandwidth = 0;
        for (i, row) in self.rows().enumerate() {
            for (j, v) in row.iter().enumerate() {
                if v.is_nonzero() {
                    bandwidth = bandwidth.max(i.abs_diff(j));
                }
            }
        }
        bandwidth
    }

    /// Convert every entry, keeping labels
    pub fn map<U: Element>(&self, f: impl Fn(T) -> U) -> SquareMatrix<U> {
        SquareMatrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            n: self.n,
            labels: self.labels.clone(),
        }
    }

    /// Convert every entry to f64, keeping labels
    pub fn to_f64(&self) -> SquareMatrix<f64> {
        self.map(Element::as_f64)
    }
}

impl<T: Element> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of bounds");
        &self.data[i * self.n + j]
    }
}
