//! Matrix ordering algorithms.
//!
//! Each algorithm computes a permutation of the node indices of a square
//! matrix; applying it to rows and columns alike places related nodes near
//! each other. All orderings are deterministic pure functions of their
//! input and share the [`MatrixOrdering`] contract.
//!
//! # Algorithms
//!
//! - **Identity**: keeps the input order
//! - **Degree**: ascending nonzero count, stable on ties
//! - **Nearest neighbor**: greedy path over cosine similarity between rows
//! - **RCM**: Reverse Cuthill-McKee bandwidth reduction (symmetric input)
//! - **Hierarchical**: dendrogram leaf order of an agglomerative clustering
//!   of the rows, with optimal leaf ordering

pub mod degree;
pub mod hierarchy;
pub mod nearest_neighbor;
pub mod rcm;
pub mod traits;

pub use degree::{DegreeOrdering, count_ordering, count_permutation};
pub use hierarchy::{
    HierarchicalOrdering, HierarchyOptions, LinkageMatrix, LinkageMethod,
    hierarchical_clustering_permutation, hierarchical_ordering, leaves_list, linkage,
    optimal_leaf_ordering,
};
pub use nearest_neighbor::{
    NearestNeighborOrdering, nearest_neighbor_ordering, nearest_neighbor_permutation,
};
pub use rcm::{RcmOptions, RcmStats, ReverseCuthillMckee, rcm, rcm_ordering, rcm_permutation};
pub use traits::{IdentityOrdering, MatrixOrdering, Reordering};
