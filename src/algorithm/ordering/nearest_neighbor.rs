//! Nearest-neighbor ordering over cosine similarity.
//!
//! Treats the similarity matrix as a complete weighted graph and builds a
//! Hamiltonian path greedily:
//!
//! 1. `S = pairwise_cosine(matrix)`
//! 2. Start at the node whose strongest similarity to any other node is the
//!    global maximum.
//! 3. Repeatedly append the unvisited node most similar to the last node.
//!
//! # Tie-breaking
//!
//! Every maximum is taken over an ascending index scan with strict `>`, so
//! the lowest index wins all ties. With an all-zero similarity matrix the
//! path is therefore `0, 1, ..., n-1`.
//!
//! # Complexity
//!
//! `O(n^2 * d)` for the similarities, `O(n^2)` for the walk.

use crate::algorithm::similarity::pairwise_cosine;
use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::{Permutation, SquareMatrix, reorder};

use super::traits::MatrixOrdering;

/// Greedy nearest-neighbor path over cosine similarity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NearestNeighborOrdering;

impl MatrixOrdering for NearestNeighborOrdering {
    fn name(&self) -> &'static str {
        "nearest-neighbor"
    }

    fn ordering<T: Element>(&self, matrix: &SquareMatrix<T>) -> Result<Permutation> {
        Ok(nearest_neighbor_ordering(matrix))
    }
}

/// Index and value of the largest entry among `candidates`, lowest index on ties.
fn argmax_by(
    candidates: impl Iterator<Item = usize>,
    value: impl Fn(usize) -> f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for j in candidates {
        let v = value(j);
        match best {
            Some((_, bv)) if v <= bv => {}
            _ => best = Some((j, v)),
        }
    }
    best
}

/// Visiting order of the greedy nearest-neighbor walk.
pub fn nearest_neighbor_ordering<T: Element>(matrix: &SquareMatrix<T>) -> Permutation {
    let n = matrix.n();
    if n <= 1 {
        return Permutation::identity(n);
    }

    let sim = pairwise_cosine(matrix);

    // Strongest partner value per node (the diagonal is 0 and takes part,
    // as in a plain row maximum).
    let strongest: Vec<f64> = (0..n)
        .map(|i| argmax_by(0..n, |j| sim.get(i, j)))
        .map(|best| best.map_or(0.0, |(_, v)| v))
        .collect();
    let start = argmax_by(0..n, |i| strongest[i]).map_or(0, |(i, _)| i);
    log::trace!(
        "nearest-neighbor start node {start} (similarity {})",
        strongest[start]
    );

    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);
    visited[start] = true;
    path.push(start);

    while path.len() < n {
        let current = path[path.len() - 1];
        let unvisited = (0..n).filter(|&j| !visited[j]);
        // At least one node is unvisited while path.len() < n.
        let Some((next, _)) = argmax_by(unvisited, |j| sim.get(current, j)) else {
            break;
        };
        visited[next] = true;
        path.push(next);
    }

    Permutation::from_vec_unchecked(path)
}

/// Reorder `matrix` by [`nearest_neighbor_ordering`].
pub fn nearest_neighbor_permutation<T: Element>(
    matrix: &SquareMatrix<T>,
) -> Result<SquareMatrix<T>> {
    reorder(matrix, &nearest_neighbor_ordering(matrix))
}
