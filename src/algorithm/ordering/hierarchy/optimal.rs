//! Optimal leaf ordering of a dendrogram.
//!
//! A binary tree over `n` leaves admits `2^(n-1)` leaf orders (one flip per
//! merge). This module finds the flips that minimize the sum of distances
//! between adjacent leaves, keeping the tree topology and merge heights.
//!
//! # Algorithm
//!
//! Bar-Joseph et al. dynamic program. For a merge `v = (a, b)` and leaves
//! `u` under `a`, `w` under `b`, `M[u][w]` is the cheapest ordering of
//! `v`'s leaves that starts at `u` and ends at `w`:
//!
//! ```text
//! M[u][w] = min over m in other(a, u), k in other(b, w) of
//!           M[u][m] + D[m][k] + M[k][w]
//! ```
//!
//! where `other(a, u)` are the leaves of the child of `a` that does not
//! contain `u` (just `u` when `a` is a leaf). Splitting the minimum over `m`
//! and `k` into two passes gives `O(n^3)` time; `M` and the argmin table take
//! `O(n^2)` space.
//!
//! # Tie-breaking
//!
//! All minima use strict `<` while scanning leaves in dendrogram order, so
//! the first candidate in that order wins.
//!
//! # References
//!
//! Bar-Joseph, Z., Gifford, D. K., & Jaakkola, T. S. (2001). "Fast optimal
//! leaf ordering for hierarchical clustering." Bioinformatics, 17(suppl 1).

use crate::algorithm::distance::squareform;
use crate::error::{Error, Result};

use super::linkage::{LinkageMatrix, leaves_list};

/// Sum of `D[order[i]][order[i + 1]]` over a leaf order.
///
/// `distances` is a dense row-major `n x n` matrix.
pub fn adjacent_leaf_cost(order: &[usize], distances: &[f64], n: usize) -> f64 {
    order
        .windows(2)
        .map(|pair| distances[pair[0] * n + pair[1]])
        .sum()
}

/// Reorder the children of `z` so that [`leaves_list`] minimizes the sum of
/// distances between adjacent leaves.
///
/// # Arguments
///
/// * `z` - Linkage matrix over `n` leaves
/// * `condensed` - The condensed distances `z` was built from
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if `condensed` does not hold
/// `n * (n - 1) / 2` distances.
pub fn optimal_leaf_ordering(z: &LinkageMatrix, condensed: &[f64]) -> Result<LinkageMatrix> {
    let n = z.n_leaves();
    let expected = n * n.saturating_sub(1) / 2;
    if condensed.len() != expected {
        return Err(Error::shape_mismatch(&[expected], &[condensed.len()]));
    }
    if n <= 2 {
        return Ok(z.clone());
    }

    let dist = squareform(condensed, n)?.into_vec();

    // Leaves under every cluster id, in dendrogram order.
    let mut leaves: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
    for s in 0..n - 1 {
        let (a, b) = z.children(s);
        let mut merged = leaves[a].clone();
        merged.extend_from_slice(&leaves[b]);
        leaves.push(merged);
    }

    let mut m = vec![0.0; n * n];
    let mut split = vec![(0usize, 0usize); n * n];
    let mut t = vec![0.0; n * n];
    let mut t_arg = vec![0usize; n * n];
    let mut in_first = vec![false; n];

    for s in 0..n - 1 {
        let (a, b) = z.children(s);

        // Step 1: T[u][k] = min over m of M[u][m] + D[m][k]
        mark_first_child(z, a, &leaves, &mut in_first);
        for &u in &leaves[a] {
            let inner = other_side(z, a, u, &leaves, &in_first);
            for &k in &leaves[b] {
                let mut best = (f64::INFINITY, u);
                for &mm in inner {
                    let cost = m[u * n + mm] + dist[mm * n + k];
                    if cost < best.0 {
                        best = (cost, mm);
                    }
                }
                t[u * n + k] = best.0;
                t_arg[u * n + k] = best.1;
            }
        }

        // Step 2: M[u][w] = min over k of T[u][k] + M[k][w]
        mark_first_child(z, b, &leaves, &mut in_first);
        for &w in &leaves[b] {
            let inner = other_side(z, b, w, &leaves, &in_first);
            for &u in &leaves[a] {
                let mut best = (f64::INFINITY, w);
                for &k in inner {
                    let cost = t[u * n + k] + m[k * n + w];
                    if cost < best.0 {
                        best = (cost, k);
                    }
                }
                m[u * n + w] = best.0;
                m[w * n + u] = best.0;
                split[u * n + w] = (t_arg[u * n + best.1], best.1);
            }
        }
    }

    // Best pair of end leaves for the whole tree
    let root = 2 * n - 2;
    let (a, b) = z.children(n - 2);
    let mut ends = (leaves[a][0], leaves[b][0]);
    let mut best = f64::INFINITY;
    for &u in &leaves[a] {
        for &w in &leaves[b] {
            if m[u * n + w] < best {
                best = m[u * n + w];
                ends = (u, w);
            }
        }
    }

    let mut order = Vec::with_capacity(n);
    build_order(z, root, ends.0, ends.1, &leaves, &split, &mut order);
    log::trace!("optimal leaf ordering: cost {best}");

    // Flip every merge whose second child now comes first.
    let mut position = vec![0usize; n];
    for (pos, &leaf) in order.iter().enumerate() {
        position[leaf] = pos;
    }
    let mut first_pos: Vec<usize> = position.clone();
    let mut ordered = z.clone();
    for s in 0..n - 1 {
        let (a, b) = z.children(s);
        if first_pos[b] < first_pos[a] {
            ordered.swap_children(s);
        }
        first_pos.push(first_pos[a].min(first_pos[b]));
    }

    debug_assert_eq!(leaves_list(&ordered), order);
    Ok(ordered)
}

/// Set `in_first[x]` for the leaves of the first child of cluster `c`.
fn mark_first_child(z: &LinkageMatrix, c: usize, leaves: &[Vec<usize>], in_first: &mut [bool]) {
    let n = z.n_leaves();
    if c < n {
        return;
    }
    for &x in &leaves[c] {
        in_first[x] = false;
    }
    let (first, _) = z.children(c - n);
    for &x in &leaves[first] {
        in_first[x] = true;
    }
}

/// Leaves of the child of `c` that does not contain `u`; `[u]` for a leaf.
fn other_side<'a>(
    z: &LinkageMatrix,
    c: usize,
    u: usize,
    leaves: &'a [Vec<usize>],
    in_first: &[bool],
) -> &'a [usize] {
    let n = z.n_leaves();
    if c < n {
        return &leaves[c];
    }
    let (first, second) = z.children(c - n);
    if in_first[u] {
        &leaves[second]
    } else {
        &leaves[first]
    }
}

/// Append the optimal leaf sequence of cluster `c` from leaf `u` to leaf `w`.
fn build_order(
    z: &LinkageMatrix,
    c: usize,
    u: usize,
    w: usize,
    leaves: &[Vec<usize>],
    split: &[(usize, usize)],
    out: &mut Vec<usize>,
) {
    let n = z.n_leaves();
    if c < n {
        out.push(c);
        return;
    }

    let (a, b) = z.children(c - n);
    if leaves[a].contains(&u) {
        let (m, k) = split[u * n + w];
        build_order(z, a, u, m, leaves, split, out);
        build_order(z, b, k, w, leaves, split, out);
    } else {
        // u under b, w under a: the stored path from w to u, walked backwards
        let (m, k) = split[w * n + u];
        build_order(z, b, u, k, leaves, split, out);
        build_order(z, a, m, w, leaves, split, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ordering::hierarchy::{LinkageMethod, linkage};

    fn dense(condensed: &[f64], n: usize) -> Vec<f64> {
        squareform(condensed, n).unwrap().into_vec()
    }

    // Points 1, 11, 0, 10 on a line.
    const LINE: [f64; 6] = [10.0, 1.0, 9.0, 11.0, 1.0, 10.0];

    #[test]
    fn test_olo_flips_clusters() {
        let z = linkage(&LINE, 4, LinkageMethod::Complete).unwrap();
        assert_eq!(leaves_list(&z), vec![0, 2, 1, 3]);

        let ordered = optimal_leaf_ordering(&z, &LINE).unwrap();
        assert_eq!(leaves_list(&ordered), vec![2, 0, 3, 1]);
        assert_eq!(
            ordered.rows(),
            &[
                [2.0, 0.0, 1.0, 2.0],
                [3.0, 1.0, 1.0, 2.0],
                [4.0, 5.0, 11.0, 4.0],
            ]
        );

        let d = dense(&LINE, 4);
        assert_eq!(adjacent_leaf_cost(&[0, 2, 1, 3], &d, 4), 13.0);
        assert_eq!(adjacent_leaf_cost(&leaves_list(&ordered), &d, 4), 11.0);
    }

    #[test]
    fn test_olo_never_worse() {
        let condensed = [3.0, 4.0, 5.0, 2.0, 6.0, 7.0, 1.0, 8.0, 2.5, 3.5];
        let d = dense(&condensed, 5);
        for method in LinkageMethod::ALL {
            let z = linkage(&condensed, 5, method).unwrap();
            let ordered = optimal_leaf_ordering(&z, &condensed).unwrap();

            let before = adjacent_leaf_cost(&leaves_list(&z), &d, 5);
            let after = adjacent_leaf_cost(&leaves_list(&ordered), &d, 5);
            assert!(after <= before + 1e-12, "{method}: {after} > {before}");

            // Same merges, only children swapped
            for (r0, r1) in z.rows().iter().zip(ordered.rows()) {
                assert_eq!(r0[2..], r1[2..]);
                assert_eq!(r0[0].min(r0[1]), r1[0].min(r1[1]));
                assert_eq!(r0[0].max(r0[1]), r1[0].max(r1[1]));
            }
        }
    }

    #[test]
    fn test_olo_small_trees_unchanged() {
        let z = linkage(&[2.0], 2, LinkageMethod::Single).unwrap();
        assert_eq!(optimal_leaf_ordering(&z, &[2.0]).unwrap(), z);

        let z = linkage(&[], 1, LinkageMethod::Single).unwrap();
        assert_eq!(optimal_leaf_ordering(&z, &[]).unwrap(), z);
    }

    #[test]
    fn test_olo_length_mismatch() {
        let z = linkage(&LINE, 4, LinkageMethod::Complete).unwrap();
        assert!(matches!(
            optimal_leaf_ordering(&z, &LINE[..5]),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
