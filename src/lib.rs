//! # reordr
//!
//! **Adjacency-matrix reordering for matrix-based graph visualization.**
//!
//! reordr computes permutations of the nodes of a square matrix and applies
//! them symmetrically to rows and columns, so that related nodes end up
//! close together and structure (blocks, bands, clusters) becomes visible.
//!
//! ## Strategies
//!
//! - **Raw data**: identity
//! - **Count based (naive)**: ascending degree, stable on ties
//! - **Similarity based**: greedy nearest-neighbor path over cosine similarity
//! - **Reverse Cuthill-McKee**: bandwidth reduction for symmetric matrices
//! - **Hierarchical Clustering**: dendrogram leaf order with optimal leaf ordering
//!
//! ## Quick Start
//!
//! ```rust
//! use reordr::prelude::*;
//!
//! let m = SquareMatrix::from_rows(&[
//!     [0u8, 1, 0, 0],
//!     [1, 0, 1, 0],
//!     [0, 1, 0, 1],
//!     [0, 0, 1, 0],
//! ])?
//! .with_labels(["a", "b", "c", "d"])?;
//!
//! let r = Strategy::ReverseCuthillMckee.apply(&m)?;
//! assert_eq!(r.matrix.bandwidth(), 1);
//! assert_eq!(r.matrix.labels().len(), 4);
//! # Ok::<(), reordr::error::Error>(())
//! ```
//!
//! All operations are synchronous pure functions; logging goes through the
//! [`log`] facade and no logger is installed by the library.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod strategy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::ordering::{
        HierarchyOptions, LinkageMethod, MatrixOrdering, RcmOptions, Reordering,
    };
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::matrix::{Permutation, SquareMatrix, reorder};
    pub use crate::strategy::Strategy;
}
