//! Reordering algorithms and the row-wise measures they build on
//!
//! - [`similarity`] - cosine similarity between rows
//! - [`distance`] - Euclidean distances between rows, condensed storage
//! - [`ordering`] - the permutation algorithms themselves

pub mod distance;
pub mod ordering;
pub mod similarity;

pub use distance::{condensed_index, pdist_euclidean, squareform};
pub use similarity::pairwise_cosine;
