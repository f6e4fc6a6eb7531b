//! Error types for reordr

use thiserror::Error;

/// Result type alias using reordr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in reordr operations
///
/// Every variant belongs to one of two coarse kinds, see [`ErrorKind`].
/// Errors are always raised before any reordering is applied.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Matrix is not square
    #[error("Matrix is not square: {rows} rows, {cols} columns")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Index sequence is not a bijection over 0..n
    #[error("Invalid permutation: {reason}")]
    InvalidPermutation {
        /// Reason for invalidity
        reason: String,
    },

    /// Length mismatch between related inputs
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Matrix required to be symmetric is not
    #[error("Matrix is not symmetric at entry ({row}, {col})")]
    NotSymmetric {
        /// Row of the first asymmetric entry
        row: usize,
        /// Column of the first asymmetric entry
        col: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not square, or an index sequence is not a valid bijection.
    Shape,
    /// Input violates a precondition of the operation (e.g. symmetry).
    InvalidInput,
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid permutation error
    pub fn invalid_permutation(reason: impl Into<String>) -> Self {
        Self::InvalidPermutation {
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Returns the coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotSquare { .. }
            | Error::InvalidPermutation { .. }
            | Error::ShapeMismatch { .. } => ErrorKind::Shape,
            Error::NotSymmetric { .. } | Error::InvalidArgument { .. } => ErrorKind::InvalidInput,
        }
    }
}
