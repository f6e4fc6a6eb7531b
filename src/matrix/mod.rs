//! Dense square matrices, permutations and symmetric reordering
//!
//! # Types
//!
//! - [`SquareMatrix`] - row-major `n x n` matrix with one node label per
//!   row/column position
//! - [`Permutation`] - validated bijection over `0..n`
//! - [`SparsityPattern`] - CSR layout of the nonzero structure, consumed by
//!   graph ordering algorithms
//!
//! # Reordering
//!
//! [`reorder`] applies the same index sequence to both axes:
//!
//! ```text
//! out[i][j] = matrix[perm[i]][perm[j]]
//! ```
//!
//! This is a relabeling of the graph, never a transpose, so shape and
//! symmetry are preserved and labels travel with their rows.

mod core;
mod ops;
mod pattern;
mod permutation;

pub use self::core::SquareMatrix;
pub use ops::{reorder, reorder_by_indices, validate_square};
pub use pattern::SparsityPattern;
pub use permutation::{Permutation, validate_permutation};
